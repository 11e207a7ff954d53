//! Compiled-in node catalog
//!
//! Node kinds register themselves with [`register_node_kind!`] under their
//! `(module_path!(), type ident)` pair. Catalog entries refer to kinds by that
//! same pair, so a descriptor can be resolved without the catalog holding the
//! implementation itself.

use crate::descriptor::{NodeDescriptor, StaticLocator};
use crate::implementation::NodeImplementation;
use crate::node::{NodeDefinition, NodeKind, NodeKindWrapper};
use indexmap::IndexMap;
use nodereg_core::{NodeGroup, NodeRegistryError, Result};
use serde::Deserialize;
use std::sync::Arc;

pub struct NodeKindRegistration {
    pub module: &'static str,
    pub symbol: &'static str,
    pub build: fn() -> Arc<dyn NodeDefinition>,
}

inventory::collect!(NodeKindRegistration);

pub fn build_kind<T: NodeKind + Default>() -> Arc<dyn NodeDefinition> {
    Arc::new(NodeKindWrapper::new(T::default()))
}

#[macro_export]
macro_rules! register_node_kind {
    ($kind:ident) => {
        $crate::inventory::submit! {
            $crate::node_catalog::NodeKindRegistration {
                module: module_path!(),
                symbol: stringify!($kind),
                build: $crate::node_catalog::build_kind::<$kind>,
            }
        }
    };
}

pub fn registrations() -> impl Iterator<Item = &'static NodeKindRegistration> {
    inventory::iter::<NodeKindRegistration>.into_iter()
}

/// Load the compiled-in kind a locator points at.
pub fn load_implementation(locator: &StaticLocator) -> Result<NodeImplementation> {
    registrations()
        .find(|registration| {
            registration.module == locator.module && registration.symbol == locator.symbol
        })
        .map(|registration| NodeImplementation::Builtin((registration.build)()))
        .ok_or_else(|| NodeRegistryError::ImplementationNotFound {
            module: locator.module.clone(),
            symbol: locator.symbol.clone(),
        })
}

/// One catalog line: a type name and where its implementation lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub node_type_name: String,
    pub class_name: String,
    #[serde(default)]
    pub module: Option<String>,
}

impl CatalogEntry {
    pub fn new(node_type_name: &str, class_name: &str, module: &str) -> Self {
        Self {
            node_type_name: node_type_name.to_string(),
            class_name: class_name.to_string(),
            module: Some(module.to_string()),
        }
    }

    /// Entries without a module produce a descriptor that fails resolution.
    pub fn into_descriptor(self) -> NodeDescriptor {
        match self.module {
            Some(module) => NodeDescriptor::located(
                self.node_type_name,
                self.class_name.clone(),
                StaticLocator::new(module, self.class_name),
            ),
            None => NodeDescriptor {
                type_name: self.node_type_name.into(),
                implementation_name: self.class_name,
                static_locator: None,
                dynamic_resolver: None,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    groups: IndexMap<String, Vec<CatalogEntry>>,
    #[serde(default)]
    deprecated: Vec<CatalogEntry>,
}

/// Ordered group -> descriptor mapping plus the deprecated list.
#[derive(Debug, Clone, Default)]
pub struct NodeCatalog {
    groups: IndexMap<NodeGroup, Vec<NodeDescriptor>>,
    deprecated: Vec<NodeDescriptor>,
}

impl NodeCatalog {
    /// Catalog of the kinds compiled into this crate
    pub fn builtin() -> Self {
        crate::builtin::catalog()
    }

    pub fn from_entries(
        groups: impl IntoIterator<Item = (String, Vec<CatalogEntry>)>,
        deprecated: impl IntoIterator<Item = CatalogEntry>,
    ) -> Self {
        let groups = groups
            .into_iter()
            .map(|(name, entries)| {
                let descriptors = entries.into_iter().map(CatalogEntry::into_descriptor).collect();
                (NodeGroup::new(name), descriptors)
            })
            .collect();
        let deprecated = deprecated
            .into_iter()
            .map(CatalogEntry::into_descriptor)
            .collect();
        Self { groups, deprecated }
    }

    /// Parse `{"groups": {name: [entry, ...]}, "deprecated": [entry, ...]}`; group order follows the document.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::from_entries(document.groups, document.deprecated))
    }

    pub fn groups(&self) -> &IndexMap<NodeGroup, Vec<NodeDescriptor>> {
        &self.groups
    }

    pub fn deprecated(&self) -> &[NodeDescriptor] {
        &self.deprecated
    }

    /// First listed descriptor named `name`, in group order
    pub fn find_listed(&self, name: &str) -> Option<&NodeDescriptor> {
        self.groups
            .values()
            .flatten()
            .find(|descriptor| descriptor.type_name == name)
    }

    pub fn find_deprecated(&self, name: &str) -> Option<&NodeDescriptor> {
        self.deprecated
            .iter()
            .find(|descriptor| descriptor.type_name == name)
    }
}
