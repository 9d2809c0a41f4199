//! # User Account Service CLI
//!
//! Read-only diagnostics against the MongoDB user store.

#![forbid(unsafe_code)]
#![deny(warnings)]

use clap::Parser;
use uas_cli::cli::{Cli, Command};
use uas_cli::commands::run_dump;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Dump => run_dump(&cli.mongo_config()).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
