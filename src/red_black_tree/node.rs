use crate::arena::NodeId;

/// A link to a node in the arena. `None` is the shared nil leaf, which is always black.
pub type Link = Option<NodeId>;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// A struct representing an internal node of a red black tree.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl<T> Node<T> {
    pub fn new(key: T, parent: Link) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }
}
