// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Addressable destinations and CloudEvent overrides shared by sources.

use crate::error::{Result, SourcesError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a source delivers its events: a reference to an addressable
/// object, a literal URI, or both (the URI is then resolved against the
/// reference).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Destination {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<KReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "CACerts", skip_serializing_if = "Option::is_none")]
    pub ca_certs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

impl Destination {
    /// Destination pointing at a literal URI, which must be absolute
    pub fn from_uri(uri: &str) -> Result<Self> {
        url::Url::parse(uri)
            .map_err(|e| SourcesError::Validation(format!("invalid sink URI '{}': {}", uri, e)))?;

        Ok(Destination {
            uri: Some(uri.to_string()),
            ..Default::default()
        })
    }

    pub fn from_ref(reference: KReference) -> Self {
        Destination {
            reference: Some(reference),
            ..Default::default()
        }
    }

    /// True when either a reference or a URI is present
    pub fn is_set(&self) -> bool {
        self.reference.is_some() || self.uri.is_some()
    }
}

/// Reference to an addressable Kubernetes object
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KReference {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CloudEventOverrides {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, String>,
}
