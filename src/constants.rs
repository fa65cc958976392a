// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API coordinates of the IntegrationSource resource
pub mod integration_source {
    pub const GROUP: &str = "sources.knative.dev";
    pub const VERSION: &str = "v1alpha1";
    pub const KIND: &str = "IntegrationSource";
    pub const PLURAL: &str = "integrationsources";
}

/// Namespace used when neither the caller nor the kubeconfig names one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Per-request deadline applied by the binary when none is configured
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Timer period in milliseconds when none is given
pub const DEFAULT_TIMER_PERIOD_MS: u64 = 1000;
