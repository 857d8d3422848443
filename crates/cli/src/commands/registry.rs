// Path: crates/cli/src/commands/registry.rs

use anyhow::{Context, Result};
use blink_client::{ActionClient, Url};
use clap::Parser;

#[derive(Parser, Debug)]
pub struct RegistryArgs {
    /// The registry URL.
    pub url: String,

    /// The host name to look up.
    pub host: String,
}

pub async fn run(args: RegistryArgs) -> Result<()> {
    let endpoint = Url::parse(&args.url).context("Invalid registry URL")?;
    let client = ActionClient::new();
    let registry = client
        .fetch_registry(&endpoint)
        .await
        .context("Failed to fetch action registry")?;

    match registry.host_state(&args.host) {
        Some(state) => println!("{}: {}", args.host, state),
        None => println!("{}: not registered", args.host),
    }
    Ok(())
}
