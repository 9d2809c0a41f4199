//! HTTP routes and handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::error;
use uas_directory::ClientDirectory;
use uas_model::User;
use uas_storage::UserStore;
use uuid::Uuid;

use crate::demo;
use crate::dto::{ResetParams, StatusResponse, TokenResponse, UserResponse};
use crate::error::{ApiError, ApiResult};
use crate::extract::{GatewayUserInfo, RawJson};
use crate::state::AppState;
use crate::validate;

/// Builds the service router.
///
/// # Routes
///
/// - `POST /api/v1/auth/user` - Exchange credentials for a session token
/// - `POST /api/v1/users` - Register a user under a tenant
/// - `GET /api/v1/users/me` - Fetch the caller's own record
/// - `POST /api/v1/users/detail` - Look up a user by email (internal)
/// - `GET /api/v1/users/{clientId}/{userId}` - Path lookup (internal)
/// - `POST /api/v1/reset/user` - Wipe users, optionally seeding the demo set
/// - `POST /api/v1/backup/user` - Trigger a managed export
/// - `GET /api/v1/health/user` - Liveness probe
pub fn api_router<S, D>() -> Router<AppState<S, D>>
where
    S: UserStore + 'static,
    D: ClientDirectory + 'static,
{
    Router::new()
        .route("/api/v1/auth/user", post(login::<S, D>))
        .route("/api/v1/users", post(register::<S, D>))
        .route("/api/v1/users/me", get(get_current_user::<S, D>))
        .route("/api/v1/users/detail", post(find_user_by_email::<S, D>))
        .route(
            "/api/v1/users/{client_id}/{user_id}",
            get(get_user_by_path::<S, D>),
        )
        .route("/api/v1/reset/user", post(reset_users::<S, D>))
        .route("/api/v1/backup/user", post(backup_users::<S, D>))
        .route("/api/v1/health/user", get(health_check))
}

// ============================================================================
// Account Handlers
// ============================================================================

/// POST /api/v1/auth/user - Exchange credentials for a session token.
async fn login<S, D>(
    State(state): State<AppState<S, D>>,
    RawJson(body): RawJson,
) -> ApiResult<Json<TokenResponse>>
where
    S: UserStore,
    D: ClientDirectory,
{
    let credentials = validate::login_request(&body)?;

    // Unknown email and failed verification collapse into the same 401.
    let user = state
        .store
        .find_by_email(&credentials.username)
        .await?
        .filter(|user| state.hasher.verify(&credentials.password, &user.password_hash))
        .ok_or_else(ApiError::invalid_credentials)?;

    let token = state.issuer.issue(&user)?;
    Ok(Json(TokenResponse { token }))
}

/// POST /api/v1/users - Register a user under a tenant.
async fn register<S, D>(
    State(state): State<AppState<S, D>>,
    RawJson(body): RawJson,
) -> ApiResult<(StatusCode, Json<UserResponse>)>
where
    S: UserStore,
    D: ClientDirectory,
{
    let request = validate::register_request(&body)?;

    // Tenant existence is checked before anything is hashed or written.
    if state.directory.get(request.client_id).await?.is_none() {
        return Err(validate::field_error("clientId", "Client does not exist."));
    }

    let digest = state.hasher.hash(&request.password)?;
    let user = User::new(request.client_id, request.name, request.email, digest);
    state.store.create(&user).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/v1/users/me - Fetch the caller's own record.
async fn get_current_user<S, D>(
    State(state): State<AppState<S, D>>,
    GatewayUserInfo(claims): GatewayUserInfo,
) -> ApiResult<Json<UserResponse>>
where
    S: UserStore,
    D: ClientDirectory,
{
    // Gateway claims that do not parse as UUIDs cannot match a record;
    // they read as absent, not as a validation failure.
    let ids = Uuid::parse_str(&claims.subject)
        .ok()
        .zip(Uuid::parse_str(&claims.tenant).ok());
    let Some((user_id, client_id)) = ids else {
        return Err(ApiError::user_not_found());
    };

    let user = state
        .store
        .get(user_id, client_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/v1/users/{clientId}/{userId} - Path lookup (internal).
async fn get_user_by_path<S, D>(
    State(state): State<AppState<S, D>>,
    Path((client_id, user_id)): Path<(String, String)>,
) -> ApiResult<Json<UserResponse>>
where
    S: UserStore,
    D: ClientDirectory,
{
    let Some(client_id) = validate::parse_v4(&client_id) else {
        return Err(ApiError::BadRequest("Invalid client ID.".to_owned()));
    };
    let Some(user_id) = validate::parse_v4(&user_id) else {
        return Err(ApiError::BadRequest("Invalid user ID.".to_owned()));
    };

    let user = state
        .store
        .get(user_id, client_id)
        .await?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/v1/users/detail - Look up a user by email (internal).
async fn find_user_by_email<S, D>(
    State(state): State<AppState<S, D>>,
    RawJson(body): RawJson,
) -> ApiResult<Json<UserResponse>>
where
    S: UserStore,
    D: ClientDirectory,
{
    let request = validate::detail_request(&body)?;

    let user = state
        .store
        .find_by_email(&request.email)
        .await?
        .ok_or_else(ApiError::user_not_found)?;
    Ok(Json(UserResponse::from(user)))
}

// ============================================================================
// Admin Handlers
// ============================================================================

/// POST /api/v1/reset/user - Wipe users, optionally seeding the demo set.
async fn reset_users<S, D>(
    State(state): State<AppState<S, D>>,
    Query(params): Query<ResetParams>,
) -> ApiResult<Json<StatusResponse>>
where
    S: UserStore,
    D: ClientDirectory,
{
    state.store.delete_all().await?;

    // Only the literal string "true" seeds.
    if params.demo.as_deref() == Some("true") {
        for user in demo::demo_users() {
            state.store.create(&user).await?;
        }
    }

    Ok(Json(StatusResponse::OK))
}

/// POST /api/v1/backup/user - Trigger a managed export.
async fn backup_users<S, D>(
    State(state): State<AppState<S, D>>,
) -> (StatusCode, Json<StatusResponse>)
where
    S: UserStore,
    D: ClientDirectory,
{
    match state.export.export().await {
        Ok(()) => (StatusCode::OK, Json(StatusResponse::OK)),
        Err(err) => {
            error!("user export failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse::ERROR),
            )
        }
    }
}

/// GET /api/v1/health/user - Liveness probe.
async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse::OK)
}
