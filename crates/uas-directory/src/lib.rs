//! # uas-directory
//!
//! Tenant directory lookups for the user account service.
//!
//! Tenants ("clients") are owned by an external client service; this
//! crate answers the one question the account service has about them:
//! does the tenant id from a registration belong to a real client?
//! [`RestClientDirectory`] asks the client service over HTTP;
//! [`StaticClientDirectory`] answers from a fixed set for tests and
//! local development.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod directory;
pub mod error;
pub mod token;

pub use directory::{ClientDirectory, RestClientDirectory, StaticClientDirectory};
pub use error::DirectoryError;
pub use token::{StaticTokenProvider, TokenProvider};
