use log::trace;

use crate::balance::skew;
use crate::node::{Link, Node};
use crate::rotation::Rotation;

/// Restores the AVL invariant over a whole subtree and returns its new root.
///
/// The walk is post-order, so the first rotation at any node happens only
/// once both of its subtrees already satisfy the invariant: the lowest
/// violation is always repaired before the ones above it. In-order key
/// sequence is preserved and a subtree that is already balanced comes back
/// with the same shape and heights.
pub fn repair<K>(link: Link<K>) -> Link<K> {
    link.map(repair_node)
}

fn repair_node<K>(mut node: Box<Node<K>>) -> Box<Node<K>> {
    let left = repair(node.take_left());
    let right = repair(node.take_right());
    node.set_children(left, right);
    settle(node)
}

/// Rebalances `node` given that both of its subtrees are balanced.
///
/// After an ordinary insert or removal a single rotation is enough. A node
/// skewed by more than two levels leaves the demoted node still leaning
/// after the rotation, so both new children are settled and the new root is
/// checked again. Every recursive call either works on a strictly smaller
/// subtree or on a root whose skew has dropped to two.
fn settle<K>(node: Box<Node<K>>) -> Box<Node<K>> {
    let Some(rotation) = Rotation::select(&node) else {
        return node;
    };
    trace!("{rotation:?} rotation at height {}", node.height());

    let mut top = rotation.apply(node);
    let left = top.take_left().map(settle);
    let right = top.take_right().map(settle);
    top.set_children(left, right);

    if skew(&top).is_balanced() {
        top
    } else {
        settle(top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::{balance_factor, is_balanced};
    use crate::bst;
    use crate::node::height;
    use quickcheck_macros::quickcheck;

    fn raw(keys: impl IntoIterator<Item = u32>) -> Link<u32> {
        keys.into_iter().fold(None, bst::insert_raw)
    }

    /// Checks cached heights against a from-scratch recount and the balance
    /// factor of every node. Returns the recounted height.
    fn validate(node: Option<&Node<u32>>) -> Result<i32, String> {
        let Some(n) = node else {
            return Ok(-1);
        };
        let l = validate(n.left_child())?;
        let r = validate(n.right_child())?;
        let expected = l.max(r) + 1;
        if n.height() != expected {
            return Err(format!(
                "Height mismatch at {}: expected {}, got {}",
                n.key(),
                expected,
                n.height()
            ));
        }
        if (l - r).abs() > 1 {
            return Err(format!("Node {} has balance factor {}", n.key(), l - r));
        }
        Ok(expected)
    }

    fn heights(node: Option<&Node<u32>>, out: &mut Vec<(u32, i32, i32)>) {
        if let Some(n) = node {
            heights(n.left_child(), out);
            out.push((*n.key(), n.height(), balance_factor(n)));
            heights(n.right_child(), out);
        }
    }

    #[test]
    fn test_empty_tree() {
        assert!(repair::<u32>(None).is_none());
    }

    #[test]
    fn test_single_insert_violation() {
        let root = repair(raw([30, 20, 10])).unwrap();
        assert_eq!(root.key(), &20);
        assert_eq!(validate(Some(&*root)), Ok(1));
    }

    #[test]
    fn test_violation_below_root() {
        // the root stays balanced enough, the violation sits at 70
        let root = raw([50, 30, 70, 20, 80, 90]);
        assert!(!is_balanced(root.as_deref()));

        let root = repair(root);
        assert_eq!(root.as_deref().map(Node::key), Some(&50));
        assert_eq!(validate(root.as_deref()), Ok(2));
        assert_eq!(
            bst::in_order(root.as_deref()),
            vec![&20, &30, &50, &70, &80, &90]
        );
    }

    #[test]
    fn test_repair_balanced_is_identity() {
        let root = repair(raw([4, 2, 6, 1, 3, 5, 7]));
        let mut before = Vec::new();
        heights(root.as_deref(), &mut before);

        let root = repair(root);
        let mut after = Vec::new();
        heights(root.as_deref(), &mut after);
        assert_eq!(before, after);
        assert_eq!(root.as_deref().map(Node::key), Some(&4));
    }

    #[test]
    fn test_degenerate_chains() {
        for n in [3u32, 10, 64, 200] {
            let ascending = repair(raw(1..=n));
            assert_eq!(validate(ascending.as_deref()).map(|_| ()), Ok(()));
            assert_eq!(
                bst::in_order(ascending.as_deref()),
                (1..=n).collect::<Vec<_>>().iter().collect::<Vec<_>>()
            );

            let descending = repair(raw((1..=n).rev()));
            assert_eq!(validate(descending.as_deref()).map(|_| ()), Ok(()));

            // a zig-zag chain only double rotations can fix locally
            let zigzag = (0..n).map(|i| if i % 2 == 0 { i / 2 } else { 1000 - i / 2 });
            let zigzag = repair(raw(zigzag));
            assert!(is_balanced(zigzag.as_deref()));
            assert!(validate(zigzag.as_deref()).is_ok());
        }
    }

    #[quickcheck]
    fn prop_repair_arbitrary_raw_tree(keys: Vec<u32>) -> bool {
        let root = raw(keys.iter().copied());
        let mut expected: Vec<u32> = keys.clone();
        expected.sort();

        let root = repair(root);
        let got: Vec<u32> = bst::in_order(root.as_deref()).into_iter().copied().collect();
        validate(root.as_deref()).is_ok() && got == expected
    }

    #[quickcheck]
    fn prop_repair_never_grows_height(keys: Vec<u16>) -> bool {
        let root = keys
            .iter()
            .map(|k| *k as u32)
            .fold(None, bst::insert_raw);
        let before = height(root.as_deref());
        height(repair(root).as_deref()) <= before
    }
}
