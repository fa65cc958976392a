// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use thiserror::Error;

/// Client operation an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Create,
    Update,
    Delete,
    List,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::List => "list",
        };
        f.write_str(verb)
    }
}

#[derive(Error, Debug)]
pub enum SourcesError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Failed to {operation} IntegrationSource '{name}' in namespace '{namespace}': not found")]
    NotFound {
        operation: Operation,
        name: String,
        namespace: String,
    },

    #[error("Failed to {operation} IntegrationSource '{name}' in namespace '{namespace}': conflict: {message}")]
    Conflict {
        operation: Operation,
        name: String,
        namespace: String,
        message: String,
    },

    #[error("Failed to {operation} IntegrationSource '{name}' in namespace '{namespace}': {source}")]
    Transport {
        operation: Operation,
        name: String,
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("Failed to {operation} IntegrationSource '{name}' in namespace '{namespace}': deadline exceeded")]
    Timeout {
        operation: Operation,
        name: String,
        namespace: String,
    },

    #[error("No type identity registered for {type_name}")]
    SchemeLookup { type_name: String },

    #[error("Failed to {operation} IntegrationSource '{name}' in namespace '{namespace}': no type identity registered for {type_name}")]
    UnregisteredType {
        operation: Operation,
        name: String,
        namespace: String,
        type_name: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SourcesError {
    /// Translate a transport failure into the client error taxonomy.
    ///
    /// `name` is empty for collection-level operations such as list.
    pub fn from_kube(err: kube::Error, operation: Operation, name: &str, namespace: &str) -> Self {
        match err {
            kube::Error::Api(resp) if resp.code == 404 => SourcesError::NotFound {
                operation,
                name: name.to_string(),
                namespace: namespace.to_string(),
            },
            kube::Error::Api(resp) if resp.code == 409 => SourcesError::Conflict {
                operation,
                name: name.to_string(),
                namespace: namespace.to_string(),
                message: resp.message,
            },
            source => SourcesError::Transport {
                operation,
                name: name.to_string(),
                namespace: namespace.to_string(),
                source,
            },
        }
    }

    /// Attach the client operation to a type identity lookup failure
    pub fn in_operation(self, operation: Operation, name: &str, namespace: &str) -> Self {
        match self {
            SourcesError::SchemeLookup { type_name } => SourcesError::UnregisteredType {
                operation,
                name: name.to_string(),
                namespace: namespace.to_string(),
                type_name,
            },
            other => other,
        }
    }

    pub fn config(context: impl Into<String>) -> Self {
        SourcesError::Config(context.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SourcesError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, SourcesError>;
