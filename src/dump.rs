use std::fmt;

use crate::node::Node;

const LAST: &str = "└── ";
const OTHER: &str = "├── ";
const BLANK: &str = "    ";
const PIPE: &str = "│   ";

/// Writes the subtree under `root` one key per line with box-drawing branches.
///
/// The right child is drawn before the left one. The root and left children hang
/// off a `└── ` branch, right children off a `├── ` branch, so the picture reads
/// as the tree rotated a quarter turn.
pub(crate) fn write_structure(f: &mut impl fmt::Write, root: Option<&Node>) -> fmt::Result {
    match root {
        Some(node) => write_branch(f, node, "", true),
        None => Ok(()),
    }
}

fn write_branch(f: &mut impl fmt::Write, node: &Node, prefix: &str, last: bool) -> fmt::Result {
    writeln!(f, "{prefix}{}{}", if last { LAST } else { OTHER }, node.key())?;

    let child_prefix = format!("{prefix}{}", if last { BLANK } else { PIPE });
    if let Some(right) = node.right() {
        write_branch(f, right, &child_prefix, false)?;
    }
    if let Some(left) = node.left() {
        write_branch(f, left, &child_prefix, true)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn render(root: Option<&Node>) -> String {
        let mut out = String::new();
        write_structure(&mut out, root).unwrap();
        out
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render(None), "");
    }

    #[test]
    fn test_single_node() {
        assert_eq!(render(Some(&Node::new(42))), "└── 42\n");
    }

    #[test]
    fn test_pipes_under_right_children() {
        let mut right = Node::new(3);
        right.left = Some(Box::new(Node::new(4)));
        let mut root = Node::new(1);
        root.right = Some(Box::new(right));
        root.left = Some(Box::new(Node::new(0)));

        assert_eq!(
            render(Some(&root)),
            "└── 1\n    ├── 3\n    │   └── 4\n    └── 0\n"
        );
    }
}
