//! Static repository over the builtin catalog

use nodereg_core::{NodeGroup, NodeRegistryError};
use nodereg_nodes::{CatalogEntry, NodeCatalog};
use nodereg_repository::{NodeRepository, StaticNodeRepository};
use tokio_test::block_on;

#[test]
fn test_every_listed_type_is_valid_and_resolves() {
    let repo = StaticNodeRepository::new();
    let grouped = block_on(repo.get_all_node_types_by_group()).expect("listing succeeds");
    assert!(!grouped.is_empty());

    for descriptor in grouped.values().flatten() {
        let name = descriptor.type_name.as_str();
        assert!(block_on(repo.is_valid_node_type(name)).unwrap(), "{} should be valid", name);
        let found = block_on(repo.get_node_type(name)).expect("lookup succeeds");
        assert_eq!(found.type_name, name);
        found.resolve().expect("descriptor resolves");
    }
}

#[test]
fn test_deprecated_type_is_valid_but_not_listed() {
    let repo = StaticNodeRepository::new();
    assert!(block_on(repo.is_valid_node_type("StaticValueNode")).unwrap());

    let grouped = block_on(repo.get_all_node_types_by_group()).unwrap();
    assert!(grouped
        .values()
        .flatten()
        .all(|descriptor| descriptor.type_name != "StaticValueNode"));

    let descriptor = block_on(repo.get_node_type("StaticValueNode")).expect("still resolvable");
    assert_eq!(descriptor.type_name, "StaticValueNode");
}

#[test]
fn test_unknown_type() {
    let repo = StaticNodeRepository::new();
    assert!(!block_on(repo.is_valid_node_type("NoSuchNode")).unwrap());
    let err = block_on(repo.get_node_type("NoSuchNode")).unwrap_err();
    assert!(matches!(err, NodeRegistryError::NodeTypeNotFound(ref name) if name == "NoSuchNode"));
    assert!(err.is_not_found());
}

#[test]
fn test_groups_follow_catalog_order() {
    let catalog = NodeCatalog::from_entries(
        vec![
            (
                "Second".to_string(),
                vec![CatalogEntry::new("RouterNode", "RouterNode", "nodereg_nodes::builtin::logic")],
            ),
            (
                "First".to_string(),
                vec![CatalogEntry::new("ExampleNode", "ExampleNode", "nodereg_nodes::builtin::example")],
            ),
        ],
        Vec::new(),
    );
    let repo = StaticNodeRepository::from_catalog(catalog);
    let groups = block_on(repo.get_node_groups()).unwrap();
    assert_eq!(groups, vec![NodeGroup::new("Second"), NodeGroup::new("First")]);

    let first = block_on(repo.get_node_types_for_group(&NodeGroup::new("First"))).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].type_name, "ExampleNode");

    let err = block_on(repo.get_node_types_for_group(&NodeGroup::new("Third"))).unwrap_err();
    assert!(matches!(err, NodeRegistryError::UnknownGroup(_)));
}
