//! Registration, login, and lookup flows over a live server.

use axum::http::StatusCode;
use serde_json::json;
use uas_auth::decode_token;
use uuid::Uuid;

use crate::common::{userinfo, TestEnv, KNOWN_CLIENT, PASSWORD};

#[tokio::test]
async fn register_login_and_fetch_self() -> anyhow::Result<()> {
    let Some(env) = TestEnv::new().await? else {
        return Ok(());
    };

    let created = env.register("Bruno Costa", "bruno@example.com").await?;
    let user_id = created["id"].as_str().unwrap().to_owned();
    assert_eq!(created["clientId"], json!(KNOWN_CLIENT));
    assert_eq!(created["name"], "Bruno Costa");
    assert_eq!(created["email"], "bruno@example.com");
    assert!(created.get("password").is_none(), "digest must not leak");

    // The email is taken now, whatever tenant or name asks for it.
    let (status, body) = env
        .post(
            "/api/v1/users",
            json!({
                "clientId": KNOWN_CLIENT,
                "name": "Another Bruno",
                "email": "bruno@example.com",
                "password": PASSWORD,
            }),
        )
        .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "A user with the email already exists.");

    let (status, body) = env
        .post(
            "/api/v1/auth/user",
            json!({ "username": "bruno@example.com", "password": PASSWORD }),
        )
        .await?;
    assert_eq!(status, StatusCode::OK);
    let claims = decode_token(body["token"].as_str().unwrap(), &env.public_key_pem)?;
    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.cid, KNOWN_CLIENT.to_string());
    assert_eq!(claims.email, "bruno@example.com");
    assert_eq!(claims.exp - claims.iat, 3600);

    let header = userinfo(&user_id, &KNOWN_CLIENT.to_string());
    let (status, body) = env.get_as("/api/v1/users/me", &header).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = env
        .post(
            "/api/v1/auth/user",
            json!({ "username": "bruno@example.com", "password": "not it" }),
        )
        .await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid username or password.");

    env.teardown().await
}

#[tokio::test]
async fn lookups_find_users_by_path_and_email() -> anyhow::Result<()> {
    let Some(env) = TestEnv::new().await? else {
        return Ok(());
    };

    let created = env.register("Carla Dias", "carla@example.com").await?;
    let user_id = created["id"].as_str().unwrap();

    let (status, body) = env
        .get(&format!("/api/v1/users/{KNOWN_CLIENT}/{user_id}"))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    // The same user id under a different tenant is nobody.
    let (status, body) = env
        .get(&format!("/api/v1/users/{}/{user_id}", Uuid::new_v4()))
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    let (status, body) = env
        .get(&format!("/api/v1/users/not-a-uuid/{user_id}"))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid client ID.");

    let (status, body) = env
        .post("/api/v1/users/detail", json!({ "email": "carla@example.com" }))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = env
        .post("/api/v1/users/detail", json!({ "email": "nobody@example.com" }))
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    env.teardown().await
}

#[tokio::test]
async fn registration_is_validated_before_it_reaches_the_store() -> anyhow::Result<()> {
    let Some(env) = TestEnv::new().await? else {
        return Ok(());
    };

    let (status, body) = env.post("/api/v1/users", json!({})).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Invalid value for clientId: Missing data for required field. \
         Invalid value for name: Missing data for required field. \
         Invalid value for email: Missing data for required field. \
         Invalid value for password: Missing data for required field."
    );

    // A well-formed id the directory does not know is rejected too.
    let (status, body) = env
        .post(
            "/api/v1/users",
            json!({
                "clientId": Uuid::new_v4(),
                "name": "Diego Farias",
                "email": "diego@example.com",
                "password": PASSWORD,
            }),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Invalid value for clientId: Client does not exist."
    );

    let response = env
        .client
        .post(format!("{}/api/v1/users", env.base_url))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body["message"],
        "The request body could not be parsed as valid JSON."
    );

    env.teardown().await
}

#[tokio::test]
async fn sessions_are_rejected_without_gateway_identity() -> anyhow::Result<()> {
    let Some(env) = TestEnv::new().await? else {
        return Ok(());
    };

    let (status, body) = env.get("/api/v1/users/me").await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token is missing");

    // A valid header naming an identity that does not exist is a 404.
    let header = userinfo(
        &Uuid::new_v4().to_string(),
        &Uuid::new_v4().to_string(),
    );
    let (status, body) = env.get_as("/api/v1/users/me", &header).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");

    env.teardown().await
}
