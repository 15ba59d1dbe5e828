use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::dump::write_structure;
use crate::error::InvariantError;
use crate::node::{Key, Link, Node, balance_factor, rotate_left, rotate_right};
use crate::pre_order::PreOrder;

/// Height-balanced binary search tree over distinct [`Key`]s.
///
/// After every insert or remove, each node's subtrees differ in height by at
/// most one. The tree counts every primitive rotation it performs over its
/// lifetime.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AvlTree {
    root: Link,
    len: usize,
    rotations: u64,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree, 0 when empty.
    pub fn height(&self) -> usize {
        crate::node::height(self.root())
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of single rotations performed since the tree was created.
    pub fn rotation_count(&self) -> u64 {
        self.rotations
    }

    /// Adds `key`, returning `false` and leaving the tree untouched if it is already present.
    pub fn insert(&mut self, key: Key) -> bool {
        let mut added = false;
        let root = insert_at(self.root.take(), key, &mut self.rotations, &mut added);
        self.root = Some(root);

        if added {
            self.len += 1;
        } else {
            debug!("Ignoring insert of already present key {key}");
        }
        added
    }

    /// Removes `key`, returning `false` if it was not in the tree.
    pub fn remove(&mut self, key: Key) -> bool {
        let mut removed = false;
        self.root = remove_at(self.root.take(), key, &mut self.rotations, &mut removed);

        if removed {
            self.len -= 1;
        } else {
            debug!("Ignoring remove of missing key {key}");
        }
        removed
    }

    pub fn contains(&self, key: Key) -> bool {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn min(&self) -> Option<Key> {
        self.root().map(min_key)
    }

    pub fn max(&self) -> Option<Key> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.key)
    }

    /// Keys in pre-order (node, left, right).
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder::new(self.root())
    }

    /// Renders the current shape of the tree, see the [`Display`](fmt::Display) impl.
    pub fn dump_structure(&self) -> String {
        self.to_string()
    }

    /// Checks ordering, balance and stored heights of every node, and the tracked length.
    pub fn validate(&self) -> Result<(), InvariantError> {
        let mut count = 0;
        validate_at(self.root(), None, None, &mut count)?;
        if count != self.len {
            return Err(InvariantError::LengthMismatch {
                tracked: self.len,
                actual: count,
            });
        }
        Ok(())
    }
}

fn insert_at(node: Link, key: Key, rotations: &mut u64, added: &mut bool) -> Box<Node> {
    let Some(mut node) = node else {
        *added = true;
        return Box::new(Node::new(key));
    };

    match key.cmp(&node.key) {
        Ordering::Less => node.left = Some(insert_at(node.left.take(), key, rotations, added)),
        Ordering::Greater => node.right = Some(insert_at(node.right.take(), key, rotations, added)),
        Ordering::Equal => return node,
    }

    node.update_height();
    let balance = node.balance();
    let left = node.left().map(|l| key.cmp(&l.key));
    let right = node.right().map(|r| key.cmp(&r.key));

    // the inserted key's position tells which side grew
    if balance > 1 && left == Some(Ordering::Less) {
        // left-left
        rotate_right(node, rotations)
    } else if balance < -1 && right == Some(Ordering::Greater) {
        // right-right
        rotate_left(node, rotations)
    } else if balance > 1 && left == Some(Ordering::Greater) {
        // left-right
        node.left = node.left.take().map(|l| rotate_left(l, rotations));
        rotate_right(node, rotations)
    } else if balance < -1 && right == Some(Ordering::Less) {
        // right-left
        node.right = node.right.take().map(|r| rotate_right(r, rotations));
        rotate_left(node, rotations)
    } else {
        node
    }
}

fn remove_at(node: Link, key: Key, rotations: &mut u64, removed: &mut bool) -> Link {
    let mut node = node?;

    match key.cmp(&node.key) {
        Ordering::Less => node.left = remove_at(node.left.take(), key, rotations, removed),
        Ordering::Greater => node.right = remove_at(node.right.take(), key, rotations, removed),
        Ordering::Equal => {
            *removed = true;
            node = match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => child,
                (left, Some(right)) => {
                    // copy the in-order successor's key up, then unlink the successor itself
                    let successor = min_key(&right);
                    node.key = successor;
                    node.left = left;
                    node.right = remove_at(Some(right), successor, rotations, removed);
                    node
                }
            };
        }
    }

    node.update_height();
    let balance = node.balance();

    // the key is gone, so the heavier child's own balance picks the case
    Some(if balance > 1 && balance_factor(node.left()) >= 0 {
        // left-left
        rotate_right(node, rotations)
    } else if balance > 1 {
        // left-right
        node.left = node.left.take().map(|l| rotate_left(l, rotations));
        rotate_right(node, rotations)
    } else if balance < -1 && balance_factor(node.right()) <= 0 {
        // right-right
        rotate_left(node, rotations)
    } else if balance < -1 {
        // right-left
        node.right = node.right.take().map(|r| rotate_right(r, rotations));
        rotate_left(node, rotations)
    } else {
        node
    })
}

fn min_key(mut node: &Node) -> Key {
    while let Some(left) = node.left() {
        node = left;
    }
    node.key
}

/// Returns the recomputed height of the subtree, counting its nodes into `count`.
fn validate_at(
    node: Option<&Node>,
    lower: Option<Key>,
    upper: Option<Key>,
    count: &mut usize,
) -> Result<usize, InvariantError> {
    let Some(node) = node else {
        return Ok(0);
    };
    *count += 1;

    if lower.is_some_and(|lo| node.key <= lo) || upper.is_some_and(|hi| node.key >= hi) {
        return Err(InvariantError::Unordered { key: node.key });
    }

    let left = validate_at(node.left(), lower, Some(node.key), count)?;
    let right = validate_at(node.right(), Some(node.key), upper, count)?;

    let actual = 1 + left.max(right);
    if node.height != actual {
        return Err(InvariantError::HeightMismatch {
            key: node.key,
            stored: node.height,
            actual,
        });
    }

    let balance = left as isize - right as isize;
    if balance.abs() > 1 {
        return Err(InvariantError::Unbalanced {
            key: node.key,
            balance,
        });
    }

    Ok(actual)
}

impl fmt::Display for AvlTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_structure(f, self.root())
    }
}

impl<'a> IntoIterator for &'a AvlTree {
    type Item = Key;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> PreOrder<'a> {
        self.pre_order()
    }
}

impl Extend<Key> for AvlTree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for AvlTree {
    fn from_iter<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(keys);
        tree
    }
}
