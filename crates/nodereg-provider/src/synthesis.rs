//! Descriptor synthesis for discovered tools.

use crate::naming;
use nodereg_core::NodeGroup;
use nodereg_nodes::model_schema::{json_schema_value, with_description, with_title};
use nodereg_nodes::{
    DynamicResolver, NodeDescriptor, NodeImplementation, ProviderBackedNode, ProviderNodeConfig,
    ProviderNodeInput, ProviderNodeOutput, ProviderSchemas, ToolResource,
};
use std::sync::Arc;

/// Schema triple for one tool, built from the shared provider-backed base shapes.
pub fn synthesize_schemas(resource: &dyn ToolResource) -> ProviderSchemas {
    let type_name = naming::dynamic_type_name(resource.tool_name());
    let config = json_schema_value::<ProviderNodeConfig>();
    let config = with_description(
        with_title(config, resource.display_name()),
        resource.description(),
    );
    ProviderSchemas {
        config,
        input: with_title(
            json_schema_value::<ProviderNodeInput>(),
            &format!("{}NodeInput", type_name),
        ),
        output: with_title(
            json_schema_value::<ProviderNodeOutput>(),
            &format!("{}NodeOutput", type_name),
        ),
    }
}

/// Resolver that builds a fresh implementation bound to `resource` on every call.
pub fn resolver_for(resource: Arc<dyn ToolResource>) -> DynamicResolver {
    Arc::new(move || {
        let tool_name = resource.tool_name();
        let node = ProviderBackedNode::new(
            naming::implementation_name(tool_name),
            naming::class_name(tool_name),
            synthesize_schemas(resource.as_ref()),
            resource.clone(),
        );
        Ok(NodeImplementation::ProviderBacked(Arc::new(node)))
    })
}

/// Group and descriptor for one discovered tool.
pub fn describe_resource(resource: Arc<dyn ToolResource>) -> (NodeGroup, NodeDescriptor) {
    let group = NodeGroup::new(naming::group_name(resource.remote_source()));
    let descriptor = NodeDescriptor::generated(
        naming::dynamic_type_name(resource.tool_name()),
        naming::implementation_name(resource.tool_name()),
        resolver_for(resource),
    );
    (group, descriptor)
}
