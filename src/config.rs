// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use crate::kubernetes::ClientParams;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace to operate in; the kubeconfig context decides when unset
    pub namespace: Option<String>,
    /// Single kubeconfig file; `KUBECONFIG` itself is left to kube's own loading
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    /// Deadline applied to each API call
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let request_timeout = match lookup("KN_REQUEST_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .context("KN_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Config {
            namespace: lookup("KN_NAMESPACE"),
            kubeconfig: lookup("KN_KUBECONFIG").map(PathBuf::from),
            context: lookup("KN_CONTEXT"),
            request_timeout: Duration::from_secs(request_timeout),
        })
    }

    pub fn client_params(&self) -> ClientParams {
        ClientParams {
            namespace: self.namespace.clone(),
            kubeconfig: self.kubeconfig.clone(),
            context: self.context.clone(),
        }
    }
}
