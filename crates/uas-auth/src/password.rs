//! Password hashing and verification.
//!
//! Digests use PBKDF2-HMAC-SHA256 in the PHC string format. Every digest
//! embeds its own salt and parameters, so verification needs no external
//! configuration and records hashed under older iteration counts keep
//! verifying after the policy moves on.

use pbkdf2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Params, Pbkdf2,
};

use crate::error::{AuthError, AuthResult};

/// Parameters applied to newly created digests.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// PBKDF2 iteration count.
    pub rounds: u32,
    /// Digest length in bytes.
    pub output_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        // OWASP baseline for PBKDF2-HMAC-SHA256.
        Self {
            rounds: 600_000,
            output_length: 32,
        }
    }
}

impl PasswordPolicy {
    /// Creates a policy with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the iteration count.
    #[must_use]
    pub const fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }
}

/// Hashes and verifies passwords.
#[derive(Debug, Clone)]
pub struct PasswordHasherService {
    policy: PasswordPolicy,
}

impl PasswordHasherService {
    /// Creates a hasher with the given policy.
    #[must_use]
    pub const fn new(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// Creates a hasher with the default policy.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PasswordPolicy::default())
    }

    /// Hashes a password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PasswordHash`] if the digest cannot be
    /// produced.
    pub fn hash(&self, password: &str) -> AuthResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let params = Params {
            rounds: self.policy.rounds,
            output_length: self.policy.output_length,
        };
        let digest = Pbkdf2
            .hash_password_customized(
                password.as_bytes(),
                Some(Algorithm::Pbkdf2Sha256.ident()),
                None,
                params,
                &salt,
            )
            .map_err(|err| AuthError::PasswordHash(err.to_string()))?;
        Ok(digest.to_string())
    }

    /// Verifies a password against a stored digest.
    ///
    /// Parameters come from the digest itself. Malformed digests verify
    /// as `false`; this never fails the caller.
    #[must_use]
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };
        Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok()
    }
}

impl Default for PasswordHasherService {
    fn default() -> Self {
        Self::with_defaults()
    }
}
