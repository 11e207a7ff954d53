//! Merge of several repositories, partitioned by group ownership.

use crate::repository::{GroupedDescriptors, NodeRepository};
use async_trait::async_trait;
use indexmap::IndexMap;
use nodereg_core::{NodeGroup, NodeRegistryError, NodeTypeName, Result};
use nodereg_nodes::NodeDescriptor;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Every group is owned by exactly one member.
///
/// Group-keyed reads go to the owner. Name lookups probe members in list
/// order and the first member reporting the name as valid answers, regardless
/// of which group the name is listed under.
pub struct CompositeNodeRepository {
    members: Vec<Arc<dyn NodeRepository>>,
    owners: IndexMap<NodeGroup, usize>,
}

impl CompositeNodeRepository {
    /// Collect group ownership from every member; fails on the first group claimed twice.
    pub async fn new(members: Vec<Arc<dyn NodeRepository>>) -> Result<Self> {
        let mut owners = IndexMap::new();
        for (index, member) in members.iter().enumerate() {
            for group in member.get_node_groups().await? {
                if owners.contains_key(&group) {
                    warn!(group = %group, "Node group claimed by two repositories");
                    return Err(NodeRegistryError::DuplicateGroup(group.to_string()));
                }
                owners.insert(group, index);
            }
        }
        warn_shadowed_types(&members).await?;
        debug!(
            members = members.len(),
            groups = owners.len(),
            "Composite node repository ready"
        );
        Ok(Self { members, owners })
    }

    fn owner(&self, group: &NodeGroup) -> Result<&Arc<dyn NodeRepository>> {
        self.owners
            .get(group)
            .map(|index| &self.members[*index])
            .ok_or_else(|| NodeRegistryError::UnknownGroup(group.to_string()))
    }

    /// First member that reports `name` as valid
    async fn claimant(&self, name: &str) -> Result<Option<&Arc<dyn NodeRepository>>> {
        for member in &self.members {
            if member.is_valid_node_type(name).await? {
                return Ok(Some(member));
            }
        }
        Ok(None)
    }
}

/// Names listed by a later member resolve to the earliest member listing them.
async fn warn_shadowed_types(members: &[Arc<dyn NodeRepository>]) -> Result<()> {
    let mut seen: HashMap<NodeTypeName, NodeGroup> = HashMap::new();
    for member in members {
        for (group, descriptors) in member.get_all_node_types_by_group().await? {
            for descriptor in descriptors {
                match seen.get(&descriptor.type_name) {
                    Some(winner) => warn!(
                        node_type = %descriptor.type_name,
                        group = %group,
                        resolved_from = %winner,
                        "Node type shadowed by an earlier repository"
                    ),
                    None => {
                        seen.insert(descriptor.type_name.clone(), group.clone());
                    }
                }
            }
        }
    }
    Ok(())
}

#[async_trait]
impl NodeRepository for CompositeNodeRepository {
    async fn get_node_groups(&self) -> Result<Vec<NodeGroup>> {
        Ok(self.owners.keys().cloned().collect())
    }

    async fn get_node_types_for_group(&self, group: &NodeGroup) -> Result<Vec<NodeDescriptor>> {
        self.owner(group)?.get_node_types_for_group(group).await
    }

    async fn get_all_node_types_by_group(&self) -> Result<GroupedDescriptors> {
        let mut grouped = GroupedDescriptors::with_capacity(self.owners.len());
        for group in self.owners.keys() {
            let descriptors = self.owner(group)?.get_node_types_for_group(group).await?;
            grouped.insert(group.clone(), descriptors);
        }
        Ok(grouped)
    }

    async fn get_node_type(&self, name: &str) -> Result<NodeDescriptor> {
        match self.claimant(name).await? {
            Some(member) => member.get_node_type(name).await,
            None => Err(NodeRegistryError::NodeTypeNotFound(name.to_string())),
        }
    }

    async fn is_valid_node_type(&self, name: &str) -> Result<bool> {
        Ok(self.claimant(name).await?.is_some())
    }
}
