use std::cmp::max;

use log::trace;

/// Keys stored in the tree.
pub type Key = i32;

pub(crate) type Link = Option<Box<Node>>;

/// A single tree element together with the height of the subtree it roots.
///
/// Children are uniquely owned boxes, so every node has exactly one parent link
/// (or the tree itself, for the root). Rotations move boxes between links and
/// never duplicate a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) key: Key,
    pub(crate) height: usize,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// Height of the subtree rooted here, a leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height(self.left()), height(self.right()));
    }

    pub(crate) fn balance(&self) -> isize {
        height(self.left()) as isize - height(self.right()) as isize
    }
}

/// Stored height of `node`, 0 when absent. Never walks the subtree.
#[inline]
pub fn height(node: Option<&Node>) -> usize {
    node.map_or(0, |n| n.height)
}

/// `height(left) - height(right)`, 0 when absent.
///
/// Anything above 1 is left-heavy and anything below -1 is right-heavy.
#[inline]
pub fn balance_factor(node: Option<&Node>) -> isize {
    node.map_or(0, Node::balance)
}

/// Rotates `y` to the right around its left child and returns the new subtree root.
///
/// ```text
///        y            x
///       / \          / \
///      x   C   =>   A   y
///     / \              / \
///    A   B            B   C
/// ```
pub(crate) fn rotate_right(mut y: Box<Node>, rotations: &mut u64) -> Box<Node> {
    debug_assert!(y.left.is_some(), "right rotation at {} has no left child", y.key);
    let Some(mut x) = y.left.take() else {
        return y;
    };
    *rotations += 1;
    trace!("rotate right at {} (pivot {})", y.key, x.key);

    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

/// Mirror of [`rotate_right`]: pivots on the right child of `x`.
pub(crate) fn rotate_left(mut x: Box<Node>, rotations: &mut u64) -> Box<Node> {
    debug_assert!(x.right.is_some(), "left rotation at {} has no right child", x.key);
    let Some(mut y) = x.right.take() else {
        return x;
    };
    *rotations += 1;
    trace!("rotate left at {} (pivot {})", x.key, y.key);

    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}
