// Path: crates/cli/src/commands/run.rs

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD as B64, Engine as _};
use blink_client::{bind, resolve_actions, ActionClient, Url};
use blink_types::action::ExecutionRequest;
use blink_types::registry::HostState;
use clap::Parser;
use std::collections::HashMap;

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// The action descriptor URL.
    pub url: String,

    /// Signer account identifier sent in the execution request (base58).
    #[clap(long)]
    pub account: String,

    /// Index of the action to invoke, as listed by `inspect`.
    #[clap(long, default_value_t = 0)]
    pub action: usize,

    /// A parameter value as `name=value`; repeatable.
    #[clap(long = "param", value_name = "NAME=VALUE")]
    pub params: Vec<String>,

    /// Registry URL to consult before executing.
    #[clap(long)]
    pub registry: Option<String>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let endpoint = Url::parse(&args.url).context("Invalid descriptor URL")?;
    let client = ActionClient::new();

    if let Some(registry_url) = &args.registry {
        check_registry(&client, registry_url, &endpoint).await?;
    }

    let descriptor = client
        .fetch_descriptor(&endpoint)
        .await
        .context("Failed to fetch action descriptor")?;
    if let Some(advisory) = &descriptor.error {
        println!("Advisory: {}", advisory.message);
    }

    let actions = resolve_actions(&descriptor, &endpoint);
    let action = actions.get(args.action).with_context(|| {
        format!(
            "No action at index {} (descriptor declares {})",
            args.action,
            actions.len()
        )
    })?;
    if action.disabled {
        bail!("Action `{}` is disabled by its descriptor", action.label);
    }

    let values = parse_params(&args.params)?;
    let bound = bind(action, &values, &endpoint).context("Failed to bind action endpoint")?;
    println!("Invoking `{}` at {}", action.label, bound);

    let request = ExecutionRequest {
        account: args.account,
    };
    let result = client
        .execute(&bound, &request)
        .await
        .context("Execution failed")?;

    println!("Transaction: {}", result.transaction);
    if let Ok(bytes) = B64.decode(&result.transaction) {
        println!("  ({} bytes, base64)", bytes.len());
    }
    if let Some(message) = &result.message {
        println!("Message: {}", message);
    }
    Ok(())
}

fn parse_params(pairs: &[String]) -> Result<HashMap<String, String>> {
    let mut values = HashMap::new();
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .with_context(|| format!("Parameter `{}` is not of the form name=value", pair))?;
        values.insert(name.to_string(), value.to_string());
    }
    Ok(values)
}

/// Refuses blocked hosts and flags unregistered ones before execution.
async fn check_registry(client: &ActionClient, registry_url: &str, endpoint: &Url) -> Result<()> {
    let registry_endpoint = Url::parse(registry_url).context("Invalid registry URL")?;
    let registry = client
        .fetch_registry(&registry_endpoint)
        .await
        .context("Failed to fetch action registry")?;

    let host = endpoint.host_str().unwrap_or_default();
    match registry.host_state(host) {
        Some(HostState::Blocked) => bail!("Host `{}` is blocked by the registry", host),
        Some(HostState::Trusted) => println!("Registry: `{}` is trusted", host),
        Some(HostState::Node) => println!("Registry: `{}` is registered", host),
        None => log::warn!("Host `{}` is not present in the registry", host),
    }
    Ok(())
}
