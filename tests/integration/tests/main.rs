//! End-to-End Integration Tests
//!
//! Each test boots the real server against a scratch MongoDB database,
//! with stub HTTP services standing in for the client directory and the
//! export endpoint. Set `MONGODB_URI` to run the suite; without it every
//! test skips itself.

mod common;

mod account_flows;
mod admin_ops;
