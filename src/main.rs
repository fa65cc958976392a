// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use kn_sources::config::Config;
use kn_sources::kubernetes::{ClientFactory, RequestContext};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let client = ClientFactory::new()
        .resolve(&config.client_params())
        .await
        .context("Failed to create IntegrationSource client")?;
    info!("Listing IntegrationSources in namespace {}", client.namespace());

    let ctx = RequestContext::with_timeout(config.request_timeout);
    let sources = client.list(&ctx).await?;

    print!("{}", serde_yaml::to_string(&sources)?);
    Ok(())
}
