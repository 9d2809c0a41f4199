//! Directory error types.

use thiserror::Error;

/// Errors from directory lookups and outbound token plumbing.
///
/// A missing client is not an error; lookups answer `Ok(None)` for a
/// clean absence and reserve errors for conditions where the directory
/// gave no usable answer at all.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Transport failure, timeout, or an unreadable response body.
    #[error("client directory request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The directory answered with a status that maps to neither a
    /// record nor a clean absence.
    #[error("client directory returned unexpected status {status}")]
    UnexpectedStatus {
        /// The offending status code.
        status: u16,
    },

    /// The outbound token provider failed.
    #[error("token provider failed: {0}")]
    TokenProvider(String),
}
