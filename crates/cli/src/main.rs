// Path: crates/cli/src/main.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # Blink CLI
//!
//! A terminal collaborator for the blink action client: fetches remote
//! action descriptors, renders their invocable actions, and executes them
//! against their endpoints on behalf of a signer account.

use anyhow::Result;
use clap::{Parser, Subcommand};

// Import command modules
mod commands;

use commands::*;

#[derive(Parser, Debug)]
#[clap(
    name = "blink",
    version,
    about = "Fetch, inspect, and execute remote action descriptors.",
    long_about = "blink interprets declarative action descriptors: it fetches and validates a descriptor, resolves its invocable actions, binds user-supplied parameters into endpoint templates, and invokes the resulting endpoint with a signer account."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch an action descriptor and display its metadata and actions.
    Inspect(inspect::InspectArgs),

    /// Fetch a descriptor, bind parameters, and execute one of its actions.
    Run(run::RunArgs),

    /// Look up a host's standing in an action registry.
    Registry(registry::RegistryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize basic logging for CLI output
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match cli.command {
        Commands::Inspect(args) => inspect::run(args).await,
        Commands::Run(args) => run::run(args).await,
        Commands::Registry(args) => registry::run(args).await,
    }
}
