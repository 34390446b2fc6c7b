use crate::node::{Node, height};

/// Balance factor of a node: left height minus right height, an empty child
/// counting as height -1.
#[inline]
pub fn balance_factor<K>(node: &Node<K>) -> i32 {
    if node.is_leaf() {
        return 0;
    }
    height(node.left_child()) - height(node.right_child())
}

/// Balance factor of a subtree that may not exist.
///
/// An absent node reports -1 so that a missing neighbour reads as leaning
/// right. Only use this to probe a child whose existence is not known; real
/// decisions about a node go through [`balance_factor`].
#[inline]
pub fn probe_balance<K>(node: Option<&Node<K>>) -> i32 {
    node.map_or(-1, balance_factor)
}

/// How a node stands relative to the AVL invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skew {
    /// Balance factor within [-1, 1].
    Balanced,
    /// Balance factor above 1.
    LeftHeavy,
    /// Balance factor below -1.
    RightHeavy,
}

impl Skew {
    #[inline]
    pub fn of(factor: i32) -> Self {
        match factor {
            f if f > 1 => Skew::LeftHeavy,
            f if f < -1 => Skew::RightHeavy,
            _ => Skew::Balanced,
        }
    }

    #[inline]
    pub fn is_balanced(self) -> bool {
        self == Skew::Balanced
    }
}

#[inline]
pub fn skew<K>(node: &Node<K>) -> Skew {
    Skew::of(balance_factor(node))
}

/// Checks the balance factor of every node in the subtree.
pub fn is_balanced<K>(node: Option<&Node<K>>) -> bool {
    match node {
        None => true,
        Some(n) => {
            skew(n).is_balanced()
                && is_balanced(n.left_child())
                && is_balanced(n.right_child())
        }
    }
}
