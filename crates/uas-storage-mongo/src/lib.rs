//! # uas-storage-mongo
//!
//! MongoDB-backed implementation of the user store.
//!
//! Records live in two flat collections: `clients` holds one container
//! document per tenant and `users` holds the account records, each
//! carrying its owning `client_id`. A unique index on `users.email`
//! backs the global email uniqueness invariant; registration double-
//! checks it inside a transaction so concurrent creates race cleanly.
//!
//! Transactions require the deployment to be a replica set.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod conn;
pub mod document;
pub mod user;

pub use conn::{connect, MongoConfig};
pub use user::MongoUserStore;
