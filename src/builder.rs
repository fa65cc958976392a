// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fluent construction of IntegrationSource objects.

use crate::types::{Aws, CloudEventOverrides, Destination, IntegrationSource, Timer};
use kube::api::ObjectMeta;

/// Accumulates an IntegrationSource through chained setters.
///
/// Setters take their arguments by value, so nothing the caller keeps can
/// reach into the builder; `build` hands out a fresh copy every time.
#[derive(Debug, Clone)]
pub struct IntegrationSourceBuilder {
    source: IntegrationSource,
}

impl IntegrationSourceBuilder {
    /// Start a new source with only its name set
    pub fn new(name: &str) -> Self {
        Self {
            source: IntegrationSource {
                metadata: ObjectMeta {
                    name: Some(name.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    /// Start from a copy of an existing source
    pub fn from_existing(source: &IntegrationSource) -> Self {
        Self {
            source: source.clone(),
        }
    }

    pub fn namespace(&mut self, namespace: &str) -> &mut Self {
        self.source.metadata.namespace = Some(namespace.to_string());
        self
    }

    pub fn sink(&mut self, sink: Destination) -> &mut Self {
        self.source.spec.sink = sink;
        self
    }

    pub fn ce_overrides(&mut self, overrides: CloudEventOverrides) -> &mut Self {
        self.source.spec.ce_overrides = Some(overrides);
        self
    }

    pub fn aws(&mut self, aws: Aws) -> &mut Self {
        self.source.spec.aws = Some(aws);
        self
    }

    pub fn timer(&mut self, timer: Timer) -> &mut Self {
        self.source.spec.timer = Some(timer);
        self
    }

    pub fn build(&self) -> IntegrationSource {
        self.source.clone()
    }
}
