// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace-scoped CRUD client for IntegrationSources

use crate::error::{Operation, Result, SourcesError};
use crate::kubernetes::context::RequestContext;
use crate::kubernetes::scheme::{stamp, stamp_list, Scheme, TypeResolver};
use crate::types::{IntegrationSource, IntegrationSourceList};
use async_trait::async_trait;
use kube::{
    api::{DeleteParams, ListParams, PostParams},
    Api, Client, ResourceExt,
};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Operations on IntegrationSources within the namespace the client is bound to.
///
/// Every returned object is owned by the caller and carries its type identity.
#[async_trait]
pub trait IntegrationSourcesClient: Send + Sync {
    async fn get(&self, ctx: &RequestContext, name: &str) -> Result<IntegrationSource>;

    /// Fails with a validation error, without contacting the server, when
    /// the sink has neither a reference nor a URI.
    async fn create(&self, ctx: &RequestContext, source: &IntegrationSource) -> Result<()>;

    async fn update(&self, ctx: &RequestContext, source: &IntegrationSource) -> Result<()>;

    async fn delete(&self, ctx: &RequestContext, name: &str) -> Result<()>;

    async fn list(&self, ctx: &RequestContext) -> Result<IntegrationSourceList>;

    fn namespace(&self) -> &str;
}

/// Client for the sources API group, bound to one namespace
#[derive(Clone)]
pub struct SourcesClient {
    client: Client,
    namespace: String,
}

impl SourcesClient {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
        }
    }

    pub fn integration_sources_client(&self) -> KubeIntegrationSourcesClient {
        KubeIntegrationSourcesClient::new(self.client.clone(), &self.namespace)
    }
}

/// [`IntegrationSourcesClient`] backed by the Kubernetes API
#[derive(Clone)]
pub struct KubeIntegrationSourcesClient {
    api: Api<IntegrationSource>,
    namespace: String,
    resolver: Arc<dyn TypeResolver>,
}

impl KubeIntegrationSourcesClient {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self::with_resolver(client, namespace, Arc::new(Scheme::sources()))
    }

    pub fn with_resolver(client: Client, namespace: &str, resolver: Arc<dyn TypeResolver>) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            namespace: namespace.to_string(),
            resolver,
        }
    }

    /// Await a single transport call under the context deadline and
    /// translate its failure
    async fn call<T, F>(
        &self,
        ctx: &RequestContext,
        operation: Operation,
        name: &str,
        request: F,
    ) -> Result<T>
    where
        F: Future<Output = kube::Result<T>> + Send,
    {
        match ctx.run(request).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(SourcesError::from_kube(e, operation, name, &self.namespace)),
            Err(_) => Err(SourcesError::Timeout {
                operation,
                name: name.to_string(),
                namespace: self.namespace.clone(),
            }),
        }
    }

    /// Copy of `source` carrying its type identity, ready to be sent
    fn outgoing(
        &self,
        operation: Operation,
        name: &str,
        source: &IntegrationSource,
    ) -> Result<IntegrationSource> {
        let mut payload = source.clone();
        stamp(&mut payload, self.resolver.as_ref())
            .map_err(|e| e.in_operation(operation, name, &self.namespace))?;
        Ok(payload)
    }
}

#[async_trait]
impl IntegrationSourcesClient for KubeIntegrationSourcesClient {
    #[instrument(skip(self, ctx), fields(namespace = %self.namespace))]
    async fn get(&self, ctx: &RequestContext, name: &str) -> Result<IntegrationSource> {
        let mut source = self
            .call(ctx, Operation::Get, name, self.api.get(name))
            .await?;
        stamp(&mut source, self.resolver.as_ref())
            .map_err(|e| e.in_operation(Operation::Get, name, &self.namespace))?;

        debug!("Fetched IntegrationSource {}/{}", self.namespace, name);
        Ok(source)
    }

    #[instrument(skip(self, ctx, source), fields(namespace = %self.namespace, name = %source.name_any()))]
    async fn create(&self, ctx: &RequestContext, source: &IntegrationSource) -> Result<()> {
        let name = source.name_any();
        if !source.has_sink() {
            return Err(SourcesError::Validation(format!(
                "a sink is required for creating IntegrationSource '{}' in namespace '{}'",
                name, self.namespace
            )));
        }

        let payload = self.outgoing(Operation::Create, &name, source)?;
        self.call(
            ctx,
            Operation::Create,
            &name,
            self.api.create(&PostParams::default(), &payload),
        )
        .await?;

        info!("Created IntegrationSource {}/{}", self.namespace, name);
        Ok(())
    }

    #[instrument(skip(self, ctx, source), fields(namespace = %self.namespace, name = %source.name_any()))]
    async fn update(&self, ctx: &RequestContext, source: &IntegrationSource) -> Result<()> {
        let Some(name) = source.metadata.name.as_deref() else {
            return Err(SourcesError::Validation(format!(
                "a name is required for updating an IntegrationSource in namespace '{}'",
                self.namespace
            )));
        };

        let payload = self.outgoing(Operation::Update, name, source)?;
        self.call(
            ctx,
            Operation::Update,
            name,
            self.api.replace(name, &PostParams::default(), &payload),
        )
        .await?;

        info!("Updated IntegrationSource {}/{}", self.namespace, name);
        Ok(())
    }

    #[instrument(skip(self, ctx), fields(namespace = %self.namespace))]
    async fn delete(&self, ctx: &RequestContext, name: &str) -> Result<()> {
        self.call(
            ctx,
            Operation::Delete,
            name,
            self.api.delete(name, &DeleteParams::default()),
        )
        .await?;

        info!("Deleted IntegrationSource {}/{}", self.namespace, name);
        Ok(())
    }

    #[instrument(skip(self, ctx), fields(namespace = %self.namespace))]
    async fn list(&self, ctx: &RequestContext) -> Result<IntegrationSourceList> {
        let objects = self
            .call(ctx, Operation::List, "", self.api.list(&ListParams::default()))
            .await?;

        let mut list = IntegrationSourceList {
            types: None,
            metadata: objects.metadata,
            items: objects.items,
        };
        stamp_list(&mut list, self.resolver.as_ref())
            .map_err(|e| e.in_operation(Operation::List, "", &self.namespace))?;

        debug!(
            "Listed {} IntegrationSources in namespace {}",
            list.items.len(),
            self.namespace
        );
        Ok(list)
    }

    fn namespace(&self) -> &str {
        &self.namespace
    }
}
