// Path: crates/cli/src/commands/inspect.rs

use anyhow::{Context, Result};
use blink_client::{resolve_actions, ActionClient, Url};
use clap::Parser;

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// The action descriptor URL.
    pub url: String,
}

pub async fn run(args: InspectArgs) -> Result<()> {
    let endpoint = Url::parse(&args.url).context("Invalid descriptor URL")?;
    let client = ActionClient::new();
    let descriptor = client
        .fetch_descriptor(&endpoint)
        .await
        .context("Failed to fetch action descriptor")?;

    println!("Title:       {}", descriptor.title);
    println!("Description: {}", descriptor.description);
    println!("Icon:        {}", descriptor.icon);
    if descriptor.is_disabled() {
        println!("State:       disabled");
    }
    if let Some(advisory) = &descriptor.error {
        println!("Advisory:    {}", advisory.message);
    }

    let actions = resolve_actions(&descriptor, &endpoint);
    println!("Actions:");
    for (i, action) in actions.iter().enumerate() {
        println!("  [{}] {} -> {}", i, action.label, action.href);
        for parameter in &action.parameters {
            let label = parameter
                .label
                .as_deref()
                .map(|l| format!(" ({})", l))
                .unwrap_or_default();
            let required = if parameter.required { " [required]" } else { "" };
            println!("      param `{}`{}{}", parameter.name, label, required);
        }
    }
    Ok(())
}
