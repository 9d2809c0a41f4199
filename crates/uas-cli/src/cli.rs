//! CLI argument parsing.

use clap::{Parser, Subcommand};
use uas_storage_mongo::MongoConfig;

/// Operator tooling for the user account service.
#[derive(Debug, Parser)]
#[command(name = "uas")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection string.
    #[arg(long, env = "MONGODB_URI")]
    pub uri: String,

    /// Database holding the user collections.
    #[arg(long, env = "MONGODB_DATABASE", default_value = "users")]
    pub database: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every tenant container and its users.
    Dump,
}

impl Cli {
    /// Mongo settings from the parsed arguments.
    #[must_use]
    pub fn mongo_config(&self) -> MongoConfig {
        MongoConfig {
            uri: self.uri.clone(),
            database: self.database.clone(),
        }
    }
}
