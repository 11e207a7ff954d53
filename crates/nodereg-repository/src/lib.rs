//! Repository abstraction over node descriptors
//!
//! A repository enumerates node groups and resolves node type names to
//! descriptors. [`StaticNodeRepository`] serves the compiled-in catalog and
//! [`CompositeNodeRepository`] merges several repositories by group ownership.

pub mod composite;
pub mod repository;
pub mod static_repo;

pub use composite::CompositeNodeRepository;
pub use repository::{GroupedDescriptors, NodeRepository};
pub use static_repo::StaticNodeRepository;
