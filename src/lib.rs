pub mod avl_tree;
pub mod balance;
pub mod bst;
pub mod error;
pub mod node;
pub mod rebalance;
pub mod rotation;

pub use self::avl_tree::AvlTree;
pub use self::balance::{Skew, balance_factor, is_balanced, probe_balance};
pub use self::error::{Error, Result};
pub use self::node::{Link, Node};
pub use self::rebalance::repair;
pub use self::rotation::Rotation;
