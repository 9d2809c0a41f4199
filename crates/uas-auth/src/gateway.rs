//! Gateway identity boundary.
//!
//! An upstream API gateway verifies caller tokens and forwards the
//! decoded claim map in the `X-Apigateway-Api-Userinfo` header as
//! base64url-encoded JSON, padded or unpadded. The service trusts the
//! header unconditionally and only enforces claim presence; signature
//! checks happened at the gateway.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;
use thiserror::Error;

/// Header carrying the gateway-verified claim map.
pub const USERINFO_HEADER: &str = "x-apigateway-api-userinfo";

/// Rejection reasons for a forwarded identity.
///
/// The display text is the exact message returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The header is absent or does not decode into a claim map.
    #[error("Token is missing")]
    TokenMissing,

    /// A required claim is absent from the map.
    #[error("{0} is missing in token")]
    ClaimMissing(&'static str),
}

/// Identity assertions forwarded by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayClaims {
    /// Subject claim (`sub`): the user id.
    pub subject: String,
    /// Tenant claim (`cid`): the owning client id.
    pub tenant: String,
}

/// Decodes a userinfo header value into gateway claims.
///
/// Trailing padding is stripped before decoding so both padded and
/// unpadded encodings are accepted.
///
/// # Errors
///
/// Returns [`GatewayError::TokenMissing`] when the value does not decode
/// into a JSON claim map, and [`GatewayError::ClaimMissing`] when a
/// required claim is absent.
pub fn decode_userinfo(header_value: &str) -> Result<GatewayClaims, GatewayError> {
    let raw = URL_SAFE_NO_PAD
        .decode(header_value.trim_end_matches('='))
        .map_err(|_| GatewayError::TokenMissing)?;
    let map: Value = serde_json::from_slice(&raw).map_err(|_| GatewayError::TokenMissing)?;
    claims_from_map(&map)
}

/// Enforces claim presence on a decoded claim map.
///
/// The claims are checked in a fixed order (`sub`, `cid`, `aud`) and the
/// first absent one is reported. A claim present with a non-string value
/// counts as absent.
///
/// # Errors
///
/// Returns [`GatewayError::ClaimMissing`] naming the first absent claim.
pub fn claims_from_map(map: &Value) -> Result<GatewayClaims, GatewayError> {
    let subject = required_claim(map, "sub")?;
    let tenant = required_claim(map, "cid")?;
    required_claim(map, "aud")?;
    Ok(GatewayClaims {
        subject: subject.to_owned(),
        tenant: tenant.to_owned(),
    })
}

fn required_claim<'a>(map: &'a Value, name: &'static str) -> Result<&'a str, GatewayError> {
    map.get(name)
        .and_then(Value::as_str)
        .ok_or(GatewayError::ClaimMissing(name))
}
