//! Session token issuing and decoding.
//!
//! Session tokens are JWTs signed with an Ed25519 key (`EdDSA`). The
//! service only ever signs; verification is the API gateway's job. A
//! decode helper is still provided for tests and diagnostics.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uas_model::User;

use crate::error::{AuthError, AuthResult};

/// Audience stamped into every session token.
pub const SESSION_AUDIENCE: &str = "user";

/// Role stamped into every session token.
pub const SESSION_ROLE: &str = "user";

/// Session lifetime in seconds.
pub const SESSION_LIFETIME_SECS: i64 = 3600;

/// Claim set of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Issuer, from configuration.
    pub iss: String,
    /// Subject: the user id.
    pub sub: String,
    /// Id of the tenant owning the account.
    pub cid: String,
    /// Email address of the subject.
    pub email: String,
    /// Role; always [`SESSION_ROLE`].
    pub role: String,
    /// Audience; always [`SESSION_AUDIENCE`].
    pub aud: String,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds; exactly one hour after `iat`.
    pub exp: i64,
}

impl SessionClaims {
    /// Builds the claim set for a user at the given instant.
    ///
    /// Building is separate from signing so the claim output can be
    /// checked deterministically: for a fixed `now` the result is always
    /// the same.
    #[must_use]
    pub fn for_user(issuer: &str, user: &User, now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            iss: issuer.to_owned(),
            sub: user.id.to_string(),
            cid: user.client_id.to_string(),
            email: user.email.clone(),
            role: SESSION_ROLE.to_owned(),
            aud: SESSION_AUDIENCE.to_owned(),
            iat,
            exp: iat + SESSION_LIFETIME_SECS,
        }
    }
}

/// Signs session tokens with an Ed25519 private key.
pub struct TokenIssuer {
    issuer: String,
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("encoding_key", &"[REDACTED]")
            .finish()
    }
}

impl TokenIssuer {
    /// Creates an issuer from a PKCS#8 Ed25519 private key in PEM form.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SigningKey`] if the key cannot be parsed.
    /// Key problems are fatal configuration errors, not per-request
    /// conditions.
    pub fn new(issuer: impl Into<String>, private_key_pem: &str) -> AuthResult<Self> {
        let encoding_key = EncodingKey::from_ed_pem(private_key_pem.as_bytes())
            .map_err(|err| AuthError::SigningKey(err.to_string()))?;
        Ok(Self {
            issuer: issuer.into(),
            encoding_key,
        })
    }

    /// Issues a session token for the user, valid for one hour from now.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenSigning`] if signing fails.
    pub fn issue(&self, user: &User) -> AuthResult<String> {
        self.sign(&SessionClaims::for_user(&self.issuer, user, Utc::now()))
    }

    /// Signs a prepared claim set.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenSigning`] if signing fails.
    pub fn sign(&self, claims: &SessionClaims) -> AuthResult<String> {
        encode(&Header::new(Algorithm::EdDSA), claims, &self.encoding_key)
            .map_err(|err| AuthError::TokenSigning(err.to_string()))
    }

    /// Returns the configured issuer string.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.issuer
    }
}

/// Decodes a session token against the Ed25519 public key.
///
/// Enforces the signature, the [`SESSION_AUDIENCE`] audience, and expiry.
///
/// # Errors
///
/// Returns [`AuthError::SigningKey`] if the public key cannot be parsed
/// and [`AuthError::TokenValidation`] if the token fails any check.
pub fn decode_token(token: &str, public_key_pem: &str) -> AuthResult<SessionClaims> {
    let key = DecodingKey::from_ed_pem(public_key_pem.as_bytes())
        .map_err(|err| AuthError::SigningKey(err.to_string()))?;
    let mut validation = Validation::new(Algorithm::EdDSA);
    validation.set_audience(&[SESSION_AUDIENCE]);
    let data = decode::<SessionClaims>(token, &key, &validation)
        .map_err(|err| AuthError::TokenValidation(err.to_string()))?;
    Ok(data.claims)
}
