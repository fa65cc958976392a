// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Provider-specific configuration blocks of an IntegrationSource.

use crate::constants::DEFAULT_TIMER_PERIOD_MS;
use serde::{Deserialize, Serialize};

fn default_period() -> u64 {
    DEFAULT_TIMER_PERIOD_MS
}

/// Emits a fixed message on an interval
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    /// Interval in milliseconds
    #[serde(default = "default_period")]
    pub period: u64,
    #[serde(default)]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_count: Option<u32>,
}

impl Default for Timer {
    fn default() -> Self {
        Timer {
            period: DEFAULT_TIMER_PERIOD_MS,
            message: String::new(),
            content_type: None,
            repeat_count: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Aws {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3: Option<AwsS3>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqs: Option<AwsSqs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddb_streams: Option<AwsDdbStreams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AwsAuth>,
}

/// Connection settings shared by every AWS service block
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwsCommon {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_credentials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_endpoint_override: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_endpoint: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwsS3 {
    #[serde(flatten)]
    pub common: AwsCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_after_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_bucket_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_bucket_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create_bucket: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_body: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_path_style: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_messages_per_poll: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwsSqs {
    #[serde(flatten)]
    pub common: AwsCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after_read: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_create_queue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(rename = "queueURL", skip_serializing_if = "Option::is_none")]
    pub queue_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greedy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_messages_per_poll: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_time_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwsDdbStreams {
    #[serde(flatten)]
    pub common: AwsCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_iterator_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
}

/// Credentials for AWS, either inline or through a Secret
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwsAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<AwsSecret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AwsSecret {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<SecretReference>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SecretReference {
    pub name: String,
}
