//! # uas-storage
//!
//! Storage abstractions for the user account service.
//!
//! [`UserStore`] is the seam between the HTTP layer and persistence. The
//! production implementation lives in `uas-storage-mongo`;
//! [`MemoryUserStore`] backs handler tests and local development.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod memory;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryUserStore;
pub use store::UserStore;
