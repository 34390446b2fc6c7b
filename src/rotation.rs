use log::trace;

use crate::balance::{Skew, balance_factor, skew};
use crate::node::Node;

/// Single right rotation.
///
/// ```text
///       n            l
///      / \          / \
///     l   c   =>   a   n
///    / \              / \
///   a   b            b   c
/// ```
///
/// Returns `node` untouched if it has no left child.
pub fn rotate_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.take_left() else {
        return node;
    };
    node.set_left(pivot.take_right());
    pivot.set_right(Some(node));
    trace!("rotate right: new local root at height {}", pivot.height());
    pivot
}

/// Single left rotation, the mirror of [`rotate_right`].
///
/// Returns `node` untouched if it has no right child.
pub fn rotate_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut pivot) = node.take_right() else {
        return node;
    };
    node.set_right(pivot.take_left());
    pivot.set_left(Some(node));
    trace!("rotate left: new local root at height {}", pivot.height());
    pivot
}

/// Double left-right rotation: repairs a right-heavy node whose right child
/// leans left. The right child is rotated right first, then the node left.
pub fn double_left_right<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    if let Some(right) = node.take_right() {
        node.set_right(Some(rotate_right(right)));
    }
    rotate_left(node)
}

/// Double right-left rotation: repairs a left-heavy node whose left child
/// leans right. The left child is rotated left first, then the node right.
pub fn double_right_left<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    if let Some(left) = node.take_left() {
        node.set_left(Some(rotate_left(left)));
    }
    rotate_right(node)
}

/// The rotation that repairs a node, picked from the node's skew and the
/// lean of its heavy child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
    LeftRight,
    RightLeft,
}

impl Rotation {
    /// Picks the repair for `node`, or `None` if its balance factor is
    /// already within [-1, 1].
    pub fn select<K>(node: &Node<K>) -> Option<Self> {
        match skew(node) {
            Skew::Balanced => None,
            Skew::RightHeavy => {
                if node.right_child().is_some_and(|r| balance_factor(r) > 0) {
                    Some(Rotation::LeftRight)
                } else {
                    Some(Rotation::Left)
                }
            }
            Skew::LeftHeavy => {
                if node.left_child().is_some_and(|l| balance_factor(l) < 0) {
                    Some(Rotation::RightLeft)
                } else {
                    Some(Rotation::Right)
                }
            }
        }
    }

    pub fn apply<K>(self, node: Box<Node<K>>) -> Box<Node<K>> {
        match self {
            Rotation::Left => rotate_left(node),
            Rotation::Right => rotate_right(node),
            Rotation::LeftRight => double_left_right(node),
            Rotation::RightLeft => double_right_left(node),
        }
    }
}
