//! Tests for TreeSpec validation and loading.

use std::io::Write;

use super::{build_tree, Topology, Tree, TreeSpec, MAX_TREE_DEPTH};
use crate::engine::{StepOutcome, TraversalEngine};
use crate::tree::TreeCatalog;
use crate::view::Layout;
use crate::error::Error;
use crate::Algorithm;

#[test]
fn test_spec_builds_tree_with_implicit_leaves() {
    let spec = TreeSpec::new(1).with_node(1, vec![2, 3]).with_node(2, vec![4]);
    let tree = spec.build().unwrap();

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.children(1), &[2, 3]);
    assert_eq!(tree.children(2), &[4]);
    assert!(tree.children(3).is_empty());
}

#[test]
fn test_spec_root_only() {
    let tree = Tree::from_spec(&TreeSpec::new(42)).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.root_id(), 42);
}

#[test]
fn test_spec_rejects_duplicate_declaration() {
    let spec = TreeSpec::new(1).with_node(1, vec![2]).with_node(1, vec![3]);
    assert!(matches!(spec.build(), Err(Error::DuplicateNodeId(1))));
}

#[test]
fn test_spec_rejects_shared_child() {
    // Diamond: 4 has two parents.
    let spec = TreeSpec::new(1)
        .with_node(1, vec![2, 3])
        .with_node(2, vec![4])
        .with_node(3, vec![4]);
    let err = spec.build().unwrap_err();
    assert!(matches!(
        err,
        Error::MultipleParents {
            child: 4,
            first: 2,
            second: 3
        }
    ));
}

#[test]
fn test_spec_rejects_cycle_through_root() {
    let spec = TreeSpec::new(1).with_node(1, vec![2]).with_node(2, vec![1]);
    assert!(matches!(spec.build(), Err(Error::RootHasParent(1))));
}

#[test]
fn test_spec_rejects_detached_cycle() {
    let spec = TreeSpec::new(1)
        .with_node(1, vec![2])
        .with_node(5, vec![6])
        .with_node(6, vec![5]);
    assert!(matches!(spec.build(), Err(Error::Unreachable(5))));
}

#[test]
fn test_spec_rejects_self_loop() {
    let spec = TreeSpec::new(1).with_node(1, vec![2]).with_node(3, vec![3]);
    assert!(matches!(spec.build(), Err(Error::Unreachable(3))));
}

#[test]
fn test_spec_round_trips_reference_tree() {
    let tree = build_tree(Algorithm::Bfs);
    let spec = TreeSpec::from(&tree);
    assert_eq!(spec.root, 1);
    // Only internal nodes are declared.
    assert_eq!(spec.nodes.len(), 8);
    assert_eq!(spec.build().unwrap(), tree);
}

#[test]
fn test_spec_from_toml_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "root = 10\n\n[[nodes]]\nid = 10\nchildren = [20, 30]\n\n[[nodes]]\nid = 30\nchildren = [40]"
    )
    .unwrap();

    let spec = TreeSpec::from_path(file.path()).unwrap();
    let tree = spec.build().unwrap();
    assert_eq!(tree.node_ids(), &[10, 20, 30, 40]);
}

#[test]
fn test_spec_from_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"root": 1, "nodes": [{{"id": 1, "children": [2]}}, {{"id": 2}}]}}"#
    )
    .unwrap();

    let spec = TreeSpec::from_path(file.path()).unwrap();
    assert_eq!(spec.nodes[1].children, Vec::<u64>::new());
    assert_eq!(spec.build().unwrap().len(), 2);
}

#[test]
fn test_spec_from_path_reports_parse_errors() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "root = \"not a number\"").unwrap();
    assert!(matches!(
        TreeSpec::from_path(file.path()),
        Err(Error::Toml(_))
    ));
}

#[test]
fn test_spec_from_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(TreeSpec::from_path(missing), Err(Error::Io(_))));
}

// ── Depth limit ────────────────────────────────────────────────────

fn chain(len: u64) -> TreeSpec {
    (1..len).fold(TreeSpec::new(1), |spec, id| spec.with_node(id, vec![id + 1]))
}

#[test]
fn test_spec_rejects_deep_chain() {
    let spec = chain(200_000);
    match spec.build() {
        Err(Error::TooDeep { node, max }) => {
            assert_eq!(max, MAX_TREE_DEPTH);
            assert_eq!(node, MAX_TREE_DEPTH as u64 + 2);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_spec_accepts_chain_at_depth_limit() {
    let len = MAX_TREE_DEPTH as u64 + 1;
    let tree = chain(len).build().unwrap();
    assert_eq!(tree.len(), MAX_TREE_DEPTH + 1);
    assert_eq!(tree.depth(len), Some(MAX_TREE_DEPTH));
    assert_eq!(tree.preorder().len(), tree.len());

    let layout = Layout::compute(&tree);
    assert_eq!(layout.len(), tree.len());

    let catalog = TreeCatalog::new(tree.clone(), tree);
    let mut engine = TraversalEngine::with_catalog(catalog, Algorithm::Dfs);
    engine.start();
    let mut last = StepOutcome::Ignored;
    while let outcome @ (StepOutcome::Advanced(_) | StepOutcome::Completed(_)) = engine.step() {
        last = outcome;
    }
    assert_eq!(last, StepOutcome::Completed(len));
}

#[test]
fn test_too_deep_display() {
    let err = Error::TooDeep { node: 1026, max: 1024 };
    assert_eq!(
        err.to_string(),
        "Node 1026 lies deeper than the maximum tree depth of 1024"
    );
}
