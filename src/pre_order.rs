use crate::node::{Key, Node};

/// Lazy pre-order walk: node, then left subtree, then right subtree.
///
/// Single pass; ask the tree for a fresh one to walk again.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl Iterator for PreOrder<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let node = self.stack.pop()?;
        // right goes on first so the left subtree is drained before it
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

impl std::iter::FusedIterator for PreOrder<'_> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(PreOrder::new(None).next(), None);
    }

    #[test]
    fn test_node_left_right_order() {
        let mut root = Node::new(2);
        root.left = Some(Box::new(Node::new(1)));
        root.right = Some(Box::new(Node::new(3)));

        let keys: Vec<Key> = PreOrder::new(Some(&root)).collect();
        assert_eq!(keys, vec![2, 1, 3]);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let root = Node::new(7);
        let mut iter = PreOrder::new(Some(&root));
        assert_eq!(iter.next(), Some(7));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
