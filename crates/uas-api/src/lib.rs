//! # uas-api
//!
//! HTTP surface of the user account service: routes, handlers, request
//! validation, and the error-to-response mapping.
//!
//! The router is generic over the [`uas_storage::UserStore`] and
//! [`uas_directory::ClientDirectory`] seams so the handler tests run
//! against the in-memory implementations while production wires in
//! MongoDB and the client service.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod backup;
pub mod demo;
pub mod dto;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
pub mod validate;

pub use backup::{ExportClient, ExportConfig, ExportError};
pub use error::{ApiError, ApiResult};
pub use router::api_router;
pub use state::AppState;
