//! Plain binary search tree mutations. Nothing here rebalances; heights are
//! kept correct along every path that is touched so the balancing code can
//! trust them afterwards.

use std::cmp::Ordering;

use crate::node::{Link, Node};

/// Inserts `key` without rebalancing. Keys equal to an existing key go to
/// its right.
pub fn insert_raw<K: Ord>(link: Link<K>, key: K) -> Link<K> {
    match link {
        None => Some(Node::boxed(key)),
        Some(mut node) => {
            if key < *node.key() {
                let left = node.take_left();
                node.set_left(insert_raw(left, key));
            } else {
                let right = node.take_right();
                node.set_right(insert_raw(right, key));
            }
            Some(node)
        }
    }
}

/// Removes one node holding `key` without rebalancing, returning the new
/// subtree root and the removed key. A node with two children is replaced by
/// its in-order successor.
pub fn remove_raw<K: Ord>(link: Link<K>, key: &K) -> (Link<K>, Option<K>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    match key.cmp(node.key()) {
        Ordering::Less => {
            let (left, removed) = remove_raw(node.take_left(), key);
            node.set_left(left);
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove_raw(node.take_right(), key);
            node.set_right(right);
            (Some(node), removed)
        }
        Ordering::Equal => {
            let left = node.take_left();
            let right = node.take_right();
            let replacement = match (left, right) {
                (None, None) => None,
                (Some(only), None) | (None, Some(only)) => Some(only),
                (Some(left), Some(right)) => {
                    let (rest, mut successor) = take_min(right);
                    successor.set_children(Some(left), rest);
                    Some(successor)
                }
            };
            (replacement, Some(node.into_key()))
        }
    }
}

/// Splits off the leftmost node of a subtree, returning what remains and the
/// detached node.
fn take_min<K>(mut node: Box<Node<K>>) -> (Link<K>, Box<Node<K>>) {
    match node.take_left() {
        None => {
            let rest = node.take_right();
            node.update_height();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.set_left(rest);
            (Some(node), min)
        }
    }
}

pub fn contains<K: Ord>(mut node: Option<&Node<K>>, key: &K) -> bool {
    while let Some(n) = node {
        node = match key.cmp(n.key()) {
            Ordering::Less => n.left_child(),
            Ordering::Greater => n.right_child(),
            Ordering::Equal => return true,
        };
    }
    false
}

/// Keys of the subtree in sorted order.
pub fn in_order<K>(node: Option<&Node<K>>) -> Vec<&K> {
    let mut keys = Vec::new();
    collect_keys(node, &mut keys);
    keys
}

fn collect_keys<'a, K>(node: Option<&'a Node<K>>, keys: &mut Vec<&'a K>) {
    if let Some(n) = node {
        collect_keys(n.left_child(), keys);
        keys.push(n.key());
        collect_keys(n.right_child(), keys);
    }
}
