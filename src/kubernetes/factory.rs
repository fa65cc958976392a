// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace and connection resolution for IntegrationSource clients

use crate::constants::DEFAULT_NAMESPACE;
use crate::error::{Result, SourcesError};
use crate::kubernetes::client::{IntegrationSourcesClient, SourcesClient};
use async_trait::async_trait;
use kube::config::{KubeConfigOptions, Kubeconfig, KubeconfigError};
use kube::Client;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Caller-supplied connection parameters
#[derive(Debug, Clone, Default)]
pub struct ClientParams {
    /// Explicit namespace; falls back to the kubeconfig context's namespace
    pub namespace: Option<String>,
    /// Kubeconfig file to use instead of the inferred one
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of the current one
    pub context: Option<String>,
}

/// Replaces the production client construction, e.g. with a fake in tests
#[async_trait]
pub trait ClientStrategy: Send + Sync {
    async fn create_client(
        &self,
        params: &ClientParams,
        namespace: &str,
    ) -> Result<Box<dyn IntegrationSourcesClient>>;
}

/// Produces namespace-bound IntegrationSource clients
#[derive(Clone, Default)]
pub struct ClientFactory {
    strategy: Option<Arc<dyn ClientStrategy>>,
}

impl ClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Arc<dyn ClientStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, params: &ClientParams) -> Result<Box<dyn IntegrationSourcesClient>> {
        let namespace = resolve_namespace(params)?;

        if let Some(strategy) = &self.strategy {
            debug!("Using injected client strategy for namespace {}", namespace);
            return strategy.create_client(params, &namespace).await;
        }

        let config = load_config(params).await?;
        let client = Client::try_from(config)
            .map_err(|e| SourcesError::config(format!("Failed to create client: {}", e)))?;

        info!("Connected to Kubernetes cluster, using namespace {}", namespace);
        Ok(Box::new(
            SourcesClient::new(client, &namespace).integration_sources_client(),
        ))
    }
}

/// Determine the namespace to bind to: the explicit one, else the one of the
/// selected kubeconfig context, else `default`
pub fn resolve_namespace(params: &ClientParams) -> Result<String> {
    if let Some(namespace) = &params.namespace {
        if namespace.trim().is_empty() {
            return Err(SourcesError::config("namespace must not be empty"));
        }
        return Ok(namespace.clone());
    }

    let kubeconfig = match (&params.kubeconfig, &params.context) {
        (Some(path), _) => Some(read_kubeconfig(path)?),
        (None, Some(_)) => Some(
            Kubeconfig::read()
                .map_err(|e| SourcesError::config(format!("Failed to load kubeconfig: {}", e)))?,
        ),
        (None, None) => absent_kubeconfig_is_none(Kubeconfig::read())?,
    };

    match kubeconfig {
        Some(kubeconfig) => namespace_from_kubeconfig(&kubeconfig, params.context.as_deref()),
        None => Ok(DEFAULT_NAMESPACE.to_string()),
    }
}

/// Namespace of `context` (or the current context) in `kubeconfig`
pub fn namespace_from_kubeconfig(kubeconfig: &Kubeconfig, context: Option<&str>) -> Result<String> {
    let Some(context_name) = context.or(kubeconfig.current_context.as_deref()) else {
        return Ok(DEFAULT_NAMESPACE.to_string());
    };

    let named = kubeconfig
        .contexts
        .iter()
        .find(|c| c.name == context_name)
        .ok_or_else(|| {
            SourcesError::config(format!("context '{}' not found in kubeconfig", context_name))
        })?;

    Ok(named
        .context
        .as_ref()
        .and_then(|c| c.namespace.clone())
        .filter(|ns| !ns.is_empty())
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()))
}

/// Treat a kubeconfig that does not exist as absent, e.g. in-cluster. Any
/// other failure to load it is an error.
fn absent_kubeconfig_is_none(
    result: std::result::Result<Kubeconfig, KubeconfigError>,
) -> Result<Option<Kubeconfig>> {
    match result {
        Ok(kubeconfig) => Ok(Some(kubeconfig)),
        Err(KubeconfigError::FindPath) => Ok(None),
        Err(KubeconfigError::ReadConfig(e, path)) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No kubeconfig at {}, using the default namespace", path.display());
            Ok(None)
        }
        Err(e) => Err(SourcesError::config(format!("Failed to load kubeconfig: {}", e))),
    }
}

fn read_kubeconfig(path: &Path) -> Result<Kubeconfig> {
    Kubeconfig::read_from(path).map_err(|e| {
        SourcesError::config(format!(
            "Failed to load kubeconfig {}: {}",
            path.display(),
            e
        ))
    })
}

async fn load_config(params: &ClientParams) -> Result<kube::Config> {
    let options = KubeConfigOptions {
        context: params.context.clone(),
        cluster: None,
        user: None,
    };

    match &params.kubeconfig {
        Some(path) => {
            let kubeconfig = read_kubeconfig(path)?;
            kube::Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(|e| SourcesError::config(format!("Failed to create config: {}", e)))
        }
        None if params.context.is_some() => kube::Config::from_kubeconfig(&options)
            .await
            .map_err(|e| SourcesError::config(format!("Failed to create config: {}", e))),
        None => kube::Config::infer()
            .await
            .map_err(|e| SourcesError::config(format!("Failed to infer config: {}", e))),
    }
}
