use std::fmt;

use log::debug;

use crate::balance::is_balanced;
use crate::bst;
use crate::error::{Error, Result};
use crate::node::{Link, Node, height};
use crate::rebalance::repair;

/// Binary search tree that restores the AVL invariant after every insert and
/// removal.
pub struct AvlTree<K> {
    root: Link<K>,
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<K: Ord> AvlTree<K> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree seeded with a single entry.
    pub fn with_root(key: K) -> Self {
        Self {
            root: Some(Node::boxed(key)),
        }
    }

    #[inline]
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, -1 for an empty tree.
    #[inline]
    pub fn height(&self) -> i32 {
        height(self.root())
    }

    pub fn is_balanced(&self) -> bool {
        is_balanced(self.root())
    }

    pub fn contains(&self, key: &K) -> bool {
        bst::contains(self.root(), key)
    }

    pub fn in_order(&self) -> Vec<&K> {
        bst::in_order(self.root())
    }

    /// Removes one entry equal to `key` and returns it.
    pub fn remove(&mut self, key: &K) -> Result<K> {
        let (root, removed) = bst::remove_raw(self.root.take(), key);
        self.root = root;
        let removed = removed.ok_or(Error::KeyNotFound)?;
        self.restore();
        Ok(removed)
    }

    /// Runs repair passes until every node verifies balanced.
    fn restore(&mut self) {
        let mut passes = 0;
        while !self.is_balanced() {
            passes += 1;
            debug!("repair pass {passes} at tree height {}", self.height());
            self.root = repair(self.root.take());
        }
    }
}

impl<K: Ord + Clone> AvlTree<K> {
    /// Inserts `key` and returns it. Keys equal to an existing key are kept
    /// alongside it.
    pub fn insert(&mut self, key: K) -> K {
        self.root = bst::insert_raw(self.root.take(), key.clone());
        self.restore();
        key
    }
}

impl<K: fmt::Debug> fmt::Debug for AvlTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => write!(f, "Empty tree"),
            Some(root) => fmt_node(f, root, 0),
        }
    }
}

fn fmt_node<K: fmt::Debug>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K>,
    indent: usize,
) -> fmt::Result {
    writeln!(
        f,
        "{:indent$}Node({:?}, height={})",
        "",
        node.key(),
        node.height(),
        indent = indent
    )?;
    if let Some(left) = node.left_child() {
        fmt_node(f, left, indent + 2)?;
    }
    if let Some(right) = node.right_child() {
        fmt_node(f, right, indent + 2)?;
    }
    Ok(())
}
