// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes access for IntegrationSources: client, factory, and type stamping.

pub mod client;
pub mod context;
pub mod factory;
pub mod scheme;

pub use client::{IntegrationSourcesClient, KubeIntegrationSourcesClient, SourcesClient};
pub use context::RequestContext;
pub use factory::{ClientFactory, ClientParams, ClientStrategy};
pub use scheme::{stamp, stamp_list, Scheme, TypeResolver};
