//! The two reference trees shown by the teaching tool.
//!
//! Each call builds a fresh, independent value; nothing is cached or shared.

use crate::algorithm::Algorithm;

use super::{Node, Tree};

/// Builds the reference tree for an algorithm.
///
/// ```rust
/// use treewalk_core::tree::build_tree;
/// use treewalk_core::Algorithm;
///
/// assert_eq!(build_tree(Algorithm::Bfs).len(), 14);
/// assert_eq!(build_tree(Algorithm::Dfs).len(), 9);
/// ```
#[must_use]
pub fn build_tree(variant: Algorithm) -> Tree {
    match variant {
        Algorithm::Bfs => bfs_reference_tree(),
        Algorithm::Dfs => dfs_reference_tree(),
    }
}

/// 14 nodes, three levels below the root:
///
/// ```text
///              1
///        /     |     \
///       2      3      4
///      / \     |     / \
///     5   6    7    8   9
///     |   |         |  / \
///    10  11        12 13 14
/// ```
#[must_use]
pub fn bfs_reference_tree() -> Tree {
    let root = Node::new(1).with_children(vec![
        Node::new(2).with_children(vec![
            Node::new(5).with_children(vec![Node::leaf(10)]),
            Node::new(6).with_children(vec![Node::leaf(11)]),
        ]),
        Node::new(3).with_children(vec![Node::leaf(7)]),
        Node::new(4).with_children(vec![
            Node::new(8).with_children(vec![Node::leaf(12)]),
            Node::new(9).with_children(vec![Node::leaf(13), Node::leaf(14)]),
        ]),
    ]);
    Tree::from_trusted(root)
}

/// 9 nodes:
///
/// ```text
///          1
///       /  |  \
///      2   6   8
///     / \  |   |
///    3   4 7   9
///    |
///    5
/// ```
#[must_use]
pub fn dfs_reference_tree() -> Tree {
    let root = Node::new(1).with_children(vec![
        Node::new(2).with_children(vec![
            Node::new(3).with_children(vec![Node::leaf(5)]),
            Node::leaf(4),
        ]),
        Node::new(6).with_children(vec![Node::leaf(7)]),
        Node::new(8).with_children(vec![Node::leaf(9)]),
    ]);
    Tree::from_trusted(root)
}
