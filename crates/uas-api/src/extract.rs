//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde_json::Value;
use uas_auth::gateway::{decode_userinfo, GatewayClaims, GatewayError, USERINFO_HEADER};

use crate::error::ApiError;

/// Request body read as a raw JSON value.
///
/// Schema validation needs the unparsed shape, since a missing field and
/// a present-but-wrong-type field report different reasons. Handlers take
/// the value and run the schema themselves instead of letting serde
/// reject the body.
#[derive(Debug)]
pub struct RawJson(pub Value);

impl<S> FromRequest<S> for RawJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::malformed_body())?;
        let value = serde_json::from_slice(&bytes).map_err(|_| ApiError::malformed_body())?;
        Ok(Self(value))
    }
}

/// Caller identity forwarded by the API gateway.
///
/// Decodes the `x-apigateway-api-userinfo` header via
/// [`uas_auth::gateway`]; any rejection becomes the matching 401.
#[derive(Debug, Clone)]
pub struct GatewayUserInfo(pub GatewayClaims);

impl<S> FromRequestParts<S> for GatewayUserInfo
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USERINFO_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(GatewayError::TokenMissing)?;
        Ok(Self(decode_userinfo(header)?))
    }
}
