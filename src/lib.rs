pub mod dump;
pub mod error;
pub mod node;
pub mod pre_order;
pub mod tree;

pub use self::error::InvariantError;
pub use self::node::{Key, Node, balance_factor, height};
pub use self::pre_order::PreOrder;
pub use self::tree::AvlTree;
