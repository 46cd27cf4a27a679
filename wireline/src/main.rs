#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::path::Path;

use args::{Args, Command};
use clap::Parser;
use tokio::io::AsyncReadExt;
use wireline_config::Config;
use wireline_executor::ExecutorRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Initialize logging
    wireline_telemetry::init(config.telemetry.as_ref(), "info")?;

    tracing::debug!(config_path = %args.config.display(), "starting wireline");

    let registry = ExecutorRegistry::from_config(&config)?;

    match args.command {
        Command::Targets { provider } => print_targets(&registry, provider.as_deref()),
        Command::Send { provider, body } => send(&registry, &provider, body.as_deref()).await,
    }
}

/// Print `<provider>\t<wire api>\t<url>` per provider
fn print_targets(registry: &ExecutorRegistry, only: Option<&str>) -> anyhow::Result<()> {
    if let Some(name) = only {
        let entry = registry.get(name)?;
        println!("{name}\t{}\t{}", entry.wire_api(), entry.request_url()?);
        return Ok(());
    }

    for (name, entry) in registry.providers() {
        println!("{name}\t{}\t{}", entry.wire_api(), entry.request_url()?);
    }

    Ok(())
}

/// Dispatch one request body and print the upstream response
async fn send(registry: &ExecutorRegistry, provider: &str, body: Option<&Path>) -> anyhow::Result<()> {
    let entry = registry.get(provider)?;

    let raw = match body {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow::anyhow!("failed to read request body {}: {e}", path.display()))?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let payload: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| anyhow::anyhow!("request body is not valid JSON: {e}"))?;

    let response = entry.executor.execute(Some(&entry.auth), &payload).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
