//! # uas-model
//!
//! Domain models shared by every crate of the user account service.
//!
//! The service manages user accounts on behalf of external tenants
//! ("clients"). [`User`] is the account record itself; [`Client`] is the
//! slim view of a tenant as answered by the external client directory.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod client;
pub mod user;

pub use client::Client;
pub use user::User;
