//! Lazily resolved references to node implementations.

use crate::implementation::NodeImplementation;
use crate::node_catalog::load_implementation;
use nodereg_core::{NodeRegistryError, NodeTypeName, Result};
use std::fmt;
use std::sync::Arc;

/// Module path plus symbol of a compiled-in node kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaticLocator {
    pub module: String,
    pub symbol: String,
}

impl StaticLocator {
    pub fn new(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for StaticLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.symbol)
    }
}

/// Generator bound to a runtime-discovered resource; every call builds a fresh implementation.
pub type DynamicResolver = Arc<dyn Fn() -> Result<NodeImplementation> + Send + Sync>;

#[derive(Clone)]
pub struct NodeDescriptor {
    pub type_name: NodeTypeName,
    pub implementation_name: String,
    pub static_locator: Option<StaticLocator>,
    pub dynamic_resolver: Option<DynamicResolver>,
}

impl NodeDescriptor {
    /// Descriptor for a compiled-in kind
    pub fn located(
        type_name: impl Into<NodeTypeName>,
        implementation_name: impl Into<String>,
        locator: StaticLocator,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            implementation_name: implementation_name.into(),
            static_locator: Some(locator),
            dynamic_resolver: None,
        }
    }

    /// Descriptor for a runtime-synthesized implementation
    pub fn generated(
        type_name: impl Into<NodeTypeName>,
        implementation_name: impl Into<String>,
        resolver: DynamicResolver,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            implementation_name: implementation_name.into(),
            static_locator: None,
            dynamic_resolver: Some(resolver),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic_resolver.is_some()
    }

    /// Resolve to the concrete implementation.
    ///
    /// Exactly one of the locator and resolver must be set. Resolution has no
    /// effect on which descriptors exist; repeated calls yield equivalent
    /// implementations.
    pub fn resolve(&self) -> Result<NodeImplementation> {
        match (&self.static_locator, &self.dynamic_resolver) {
            (Some(locator), None) => load_implementation(locator),
            (None, Some(resolver)) => {
                resolver().map_err(|source| NodeRegistryError::ResolutionFailed {
                    type_name: self.type_name.to_string(),
                    source: Box::new(source),
                })
            }
            (None, None) => Err(NodeRegistryError::DescriptorIntegrity {
                type_name: self.type_name.to_string(),
                problem: "has neither a static locator nor a dynamic resolver".to_string(),
            }),
            (Some(_), Some(_)) => Err(NodeRegistryError::DescriptorIntegrity {
                type_name: self.type_name.to_string(),
                problem: "has both a static locator and a dynamic resolver".to_string(),
            }),
        }
    }
}

impl fmt::Debug for NodeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeDescriptor")
            .field("type_name", &self.type_name)
            .field("implementation_name", &self.implementation_name)
            .field("static_locator", &self.static_locator)
            .field("dynamic_resolver", &self.dynamic_resolver.as_ref().map(|_| "<resolver>"))
            .finish()
    }
}
