// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Type identity registry and stamping of `apiVersion`/`kind` onto objects.
//!
//! Objects decoded from the API server are not guaranteed to carry their
//! type identity. Before such an object is printed, serialized, or used as
//! an owner reference it is stamped from a [`TypeResolver`].

use crate::error::{Result, SourcesError};
use crate::types::{IntegrationSource, IntegrationSourceList};
use kube::core::{GroupVersionKind, TypeMeta};
use kube::Resource;
use std::any::{type_name, TypeId};
use std::collections::HashMap;

/// Looks up the canonical group/version/kind of a concrete Rust type
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, type_id: TypeId, type_name: &'static str) -> Result<GroupVersionKind>;
}

/// Objects whose type identity can be written
pub trait Stamp: 'static {
    fn type_meta_mut(&mut self) -> &mut Option<TypeMeta>;
}

/// List wrappers whose items are stamped along with the list
pub trait StampList: Stamp {
    type Item: Stamp;

    fn items_mut(&mut self) -> &mut [Self::Item];
}

impl Stamp for IntegrationSource {
    fn type_meta_mut(&mut self) -> &mut Option<TypeMeta> {
        &mut self.types
    }
}

impl Stamp for IntegrationSourceList {
    fn type_meta_mut(&mut self) -> &mut Option<TypeMeta> {
        &mut self.types
    }
}

impl StampList for IntegrationSourceList {
    type Item = IntegrationSource;

    fn items_mut(&mut self) -> &mut [IntegrationSource] {
        &mut self.items
    }
}

/// In-memory registry keyed by Rust type
#[derive(Debug, Clone, Default)]
pub struct Scheme {
    kinds: HashMap<TypeId, GroupVersionKind>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheme with the IntegrationSource types registered
    pub fn sources() -> Self {
        Self::new()
            .register::<IntegrationSource>()
            .register_list::<IntegrationSourceList, IntegrationSource>()
    }

    pub fn register<K>(mut self) -> Self
    where
        K: Resource<DynamicType = ()> + 'static,
    {
        let gvk = GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()));
        self.kinds.insert(TypeId::of::<K>(), gvk);
        self
    }

    /// Register `L` as the list type of `K`, with kind `<Kind>List`
    pub fn register_list<L, K>(mut self) -> Self
    where
        L: 'static,
        K: Resource<DynamicType = ()>,
    {
        let kind = format!("{}List", K::kind(&()));
        let gvk = GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &kind);
        self.kinds.insert(TypeId::of::<L>(), gvk);
        self
    }
}

impl TypeResolver for Scheme {
    fn resolve(&self, type_id: TypeId, type_name: &'static str) -> Result<GroupVersionKind> {
        self.kinds
            .get(&type_id)
            .cloned()
            .ok_or_else(|| SourcesError::SchemeLookup {
                type_name: type_name.to_string(),
            })
    }
}

fn resolve_type_meta<T: 'static>(resolver: &dyn TypeResolver) -> Result<TypeMeta> {
    let gvk = resolver.resolve(TypeId::of::<T>(), type_name::<T>())?;
    Ok(TypeMeta {
        api_version: gvk.api_version(),
        kind: gvk.kind,
    })
}

/// Write the registered type identity onto `obj`
pub fn stamp<T: Stamp>(obj: &mut T, resolver: &dyn TypeResolver) -> Result<()> {
    let types = resolve_type_meta::<T>(resolver)?;
    *obj.type_meta_mut() = Some(types);
    Ok(())
}

/// Stamp a list wrapper and each of its items.
///
/// Both identities are resolved before anything is written, so a lookup
/// failure leaves the list untouched.
pub fn stamp_list<L: StampList>(list: &mut L, resolver: &dyn TypeResolver) -> Result<()> {
    let list_types = resolve_type_meta::<L>(resolver)?;
    let item_types = resolve_type_meta::<L::Item>(resolver)?;

    *list.type_meta_mut() = Some(list_types);
    for item in list.items_mut() {
        *item.type_meta_mut() = Some(item_types.clone());
    }
    Ok(())
}
