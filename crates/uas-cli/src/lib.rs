//! # uas-cli
//!
//! Operator command line for the user account service: read-only
//! diagnostics straight against the MongoDB store.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod cli;
pub mod commands;
