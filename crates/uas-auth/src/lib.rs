//! # uas-auth
//!
//! Authentication building blocks for the user account service:
//!
//! - PBKDF2 password hashing with self-describing PHC digests
//!   ([`password`])
//! - EdDSA session token issuing and decoding ([`token`])
//! - the trust contract for identities forwarded by the API gateway
//!   ([`gateway`])

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod gateway;
pub mod password;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use gateway::{GatewayClaims, GatewayError};
pub use password::{PasswordHasherService, PasswordPolicy};
pub use token::{decode_token, SessionClaims, TokenIssuer};
