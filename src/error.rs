use thiserror::Error;

use crate::node::Key;

/// A broken structural invariant reported by [`AvlTree::validate`](crate::AvlTree::validate).
///
/// None of these can be produced through the public API; seeing one means the
/// balancing code has a bug.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("key {key} is out of order under its ancestors")]
    Unordered { key: Key },
    #[error("node {key} has balance factor {balance}")]
    Unbalanced { key: Key, balance: isize },
    #[error("node {key} stores height {stored} but its subtree is {actual} tall")]
    HeightMismatch {
        key: Key,
        stored: usize,
        actual: usize,
    },
    #[error("tree tracks {tracked} keys but holds {actual}")]
    LengthMismatch { tracked: usize, actual: usize },
}
