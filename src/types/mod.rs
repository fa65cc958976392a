// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Wire types for the `sources.knative.dev/v1alpha1` IntegrationSource.

pub mod destination;
pub mod integration_source;
pub mod providers;

pub use destination::{CloudEventOverrides, Destination, KReference};
pub use integration_source::{
    Condition, IntegrationSource, IntegrationSourceList, IntegrationSourceSpec,
    IntegrationSourceStatus,
};
pub use providers::{Aws, AwsAuth, AwsCommon, AwsDdbStreams, AwsS3, AwsSqs, Timer};
