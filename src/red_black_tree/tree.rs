use crate::arena::{Arena, NodeId};
use crate::red_black_tree::node::{Color, Link, Node};
use std::cmp::{self, Ordering};

/// A red black tree whose nodes live in an arena and link to each other by `NodeId`.
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: Link,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            arena: Arena::new(),
            root: None,
        }
    }

    pub fn root(&self) -> Link {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.arena[id]
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn into_arena(self) -> Arena<Node<T>> {
        self.arena
    }

    fn color(&self, link: Link) -> Color {
        link.map_or(Color::Black, |id| self.arena[id].color)
    }

    fn set_color(&mut self, link: Link, color: Color) {
        if let Some(id) = link {
            self.arena[id].color = color;
        }
    }

    fn parent(&self, id: NodeId) -> Link {
        self.arena[id].parent
    }

    fn left(&self, id: NodeId) -> Link {
        self.arena[id].left
    }

    fn right(&self, id: NodeId) -> Link {
        self.arena[id].right
    }

    // Points whichever slot of `parent` held `old` at `new`. A missing parent means `old` was the
    // root.
    fn replace_child(&mut self, parent: Link, old: NodeId, new: Link) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                if self.left(parent) == Some(old) {
                    self.arena[parent].left = new;
                } else {
                    self.arena[parent].right = new;
                }
            },
        }
    }

    fn rotate_left(&mut self, id: NodeId) {
        let child = self
            .right(id)
            .expect("Expected right child node to be `Some`.");
        let inner = self.left(child);

        self.arena[id].right = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(id);
        }

        let parent = self.parent(id);
        self.arena[child].parent = parent;
        self.replace_child(parent, id, Some(child));

        self.arena[child].left = Some(id);
        self.arena[id].parent = Some(child);
    }

    fn rotate_right(&mut self, id: NodeId) {
        let child = self
            .left(id)
            .expect("Expected left child node to be `Some`.");
        let inner = self.right(child);

        self.arena[id].left = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(id);
        }

        let parent = self.parent(id);
        self.arena[child].parent = parent;
        self.replace_child(parent, id, Some(child));

        self.arena[child].right = Some(id);
        self.arena[id].parent = Some(child);
    }

    // Replaces the subtree rooted at `old` with the subtree rooted at `new` in the eyes of `old`'s
    // parent. The children of `new` are left alone.
    fn transplant(&mut self, old: NodeId, new: Link) {
        let parent = self.parent(old);
        self.replace_child(parent, old, new);
        if let Some(new) = new {
            self.arena[new].parent = parent;
        }
    }

    pub fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.left(id) {
            id = left;
        }
        id
    }

    pub fn maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.right(id) {
            id = right;
        }
        id
    }

    /// Returns the in-order successor of a node by walking parent links.
    pub fn successor(&self, id: NodeId) -> Link {
        if let Some(right) = self.right(id) {
            return Some(self.minimum(right));
        }

        let mut curr = id;
        let mut parent = self.parent(curr);
        while let Some(next) = parent {
            if self.right(next) != Some(curr) {
                break;
            }
            curr = next;
            parent = self.parent(next);
        }
        parent
    }

    fn link_height(&self, link: Link) -> isize {
        match link {
            None => 0,
            Some(id) => {
                let left_height = self.link_height(self.left(id));
                let right_height = self.link_height(self.right(id));
                cmp::max(left_height, right_height) + 1
            },
        }
    }

    /// Returns the number of nodes on the longest path from the root to a nil leaf.
    pub fn height(&self) -> isize {
        self.link_height(self.root)
    }

    fn insert_fixup(&mut self, mut id: NodeId) {
        while let Some(parent) = self.parent(id) {
            if self.arena[parent].color == Color::Black {
                break;
            }
            let grandparent = self
                .parent(parent)
                .expect("Expected a red node to have a parent.");

            if self.left(grandparent) == Some(parent) {
                let uncle = self.right(grandparent);
                if self.color(uncle) == Color::Red {
                    self.arena[parent].color = Color::Black;
                    self.set_color(uncle, Color::Black);
                    self.arena[grandparent].color = Color::Red;
                    id = grandparent;
                } else {
                    if self.right(parent) == Some(id) {
                        id = parent;
                        self.rotate_left(id);
                    }
                    let parent = self.parent(id).expect("Expected node to have a parent.");
                    let grandparent = self
                        .parent(parent)
                        .expect("Expected node to have a grandparent.");
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.left(grandparent);
                if self.color(uncle) == Color::Red {
                    self.arena[parent].color = Color::Black;
                    self.set_color(uncle, Color::Black);
                    self.arena[grandparent].color = Color::Red;
                    id = grandparent;
                } else {
                    if self.left(parent) == Some(id) {
                        id = parent;
                        self.rotate_right(id);
                    }
                    let parent = self.parent(id).expect("Expected node to have a parent.");
                    let grandparent = self
                        .parent(parent)
                        .expect("Expected node to have a grandparent.");
                    self.arena[parent].color = Color::Black;
                    self.arena[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    // `node` carries one extra unit of blackness. It may be nil, so its parent is passed along
    // explicitly.
    fn remove_fixup(&mut self, mut node: Link, mut parent: Link) {
        while node != self.root && self.color(node) == Color::Black {
            let curr_parent = match parent {
                Some(parent) => parent,
                None => break,
            };

            if self.left(curr_parent) == node {
                let mut sibling = self
                    .right(curr_parent)
                    .expect("Expected a doubly black node to have a sibling.");

                if self.arena[sibling].color == Color::Red {
                    self.arena[sibling].color = Color::Black;
                    self.arena[curr_parent].color = Color::Red;
                    self.rotate_left(curr_parent);
                    sibling = self
                        .right(curr_parent)
                        .expect("Expected a doubly black node to have a sibling.");
                }

                if self.color(self.left(sibling)) == Color::Black
                    && self.color(self.right(sibling)) == Color::Black
                {
                    self.arena[sibling].color = Color::Red;
                    node = Some(curr_parent);
                    parent = self.parent(curr_parent);
                } else {
                    if self.color(self.right(sibling)) == Color::Black {
                        let near = self.left(sibling);
                        self.set_color(near, Color::Black);
                        self.arena[sibling].color = Color::Red;
                        self.rotate_right(sibling);
                        sibling = self
                            .right(curr_parent)
                            .expect("Expected a doubly black node to have a sibling.");
                    }
                    self.arena[sibling].color = self.arena[curr_parent].color;
                    self.arena[curr_parent].color = Color::Black;
                    let far = self.right(sibling);
                    self.set_color(far, Color::Black);
                    self.rotate_left(curr_parent);
                    node = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = self
                    .left(curr_parent)
                    .expect("Expected a doubly black node to have a sibling.");

                if self.arena[sibling].color == Color::Red {
                    self.arena[sibling].color = Color::Black;
                    self.arena[curr_parent].color = Color::Red;
                    self.rotate_right(curr_parent);
                    sibling = self
                        .left(curr_parent)
                        .expect("Expected a doubly black node to have a sibling.");
                }

                if self.color(self.right(sibling)) == Color::Black
                    && self.color(self.left(sibling)) == Color::Black
                {
                    self.arena[sibling].color = Color::Red;
                    node = Some(curr_parent);
                    parent = self.parent(curr_parent);
                } else {
                    if self.color(self.left(sibling)) == Color::Black {
                        let near = self.right(sibling);
                        self.set_color(near, Color::Black);
                        self.arena[sibling].color = Color::Red;
                        self.rotate_left(sibling);
                        sibling = self
                            .left(curr_parent)
                            .expect("Expected a doubly black node to have a sibling.");
                    }
                    self.arena[sibling].color = self.arena[curr_parent].color;
                    self.arena[curr_parent].color = Color::Black;
                    let far = self.left(sibling);
                    self.set_color(far, Color::Black);
                    self.rotate_right(curr_parent);
                    node = self.root;
                    parent = None;
                }
            }
        }

        self.set_color(node, Color::Black);
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    pub fn find(&self, key: &T) -> Link {
        let mut curr = self.root;
        while let Some(id) = curr {
            curr = match key.cmp(&self.arena[id].key) {
                Ordering::Less => self.left(id),
                Ordering::Greater => self.right(id),
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    pub fn insert(&mut self, key: T) -> bool {
        let mut parent = None;
        let mut dir = Ordering::Equal;
        let mut curr = self.root;
        while let Some(id) = curr {
            dir = key.cmp(&self.arena[id].key);
            parent = curr;
            curr = match dir {
                Ordering::Less => self.left(id),
                Ordering::Greater => self.right(id),
                Ordering::Equal => return false,
            };
        }

        let id = self.arena.allocate(Node::new(key, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) => {
                if dir == Ordering::Less {
                    self.arena[parent].left = Some(id);
                } else {
                    self.arena[parent].right = Some(id);
                }
            },
        }

        self.insert_fixup(id);
        true
    }

    pub fn remove(&mut self, key: &T) -> bool {
        let target = match self.find(key) {
            Some(target) => target,
            None => return false,
        };

        let mut removed_color = self.arena[target].color;
        let replacement;
        let replacement_parent;

        match (self.left(target), self.right(target)) {
            (None, right) => {
                replacement = right;
                replacement_parent = self.parent(target);
                self.transplant(target, right);
            },
            (left, None) => {
                replacement = left;
                replacement_parent = self.parent(target);
                self.transplant(target, left);
            },
            (Some(left), Some(right)) => {
                let successor = self.minimum(right);
                removed_color = self.arena[successor].color;
                replacement = self.right(successor);

                if self.parent(successor) == Some(target) {
                    replacement_parent = Some(successor);
                } else {
                    replacement_parent = self.parent(successor);
                    self.transplant(successor, replacement);
                    self.arena[successor].right = Some(right);
                    self.arena[right].parent = Some(successor);
                }

                self.transplant(target, Some(successor));
                self.arena[successor].left = Some(left);
                self.arena[left].parent = Some(successor);
                self.arena[successor].color = self.arena[target].color;
            },
        }

        self.arena.free(target);

        if removed_color == Color::Black {
            self.remove_fixup(replacement, replacement_parent);
        }
        true
    }

    // Returns the black height of the subtree at `link`, counting the nil leaf, or `None` if any
    // ordering, coloring or parent-link invariant fails inside it.
    fn checked_black_height(
        &self,
        link: Link,
        parent: Link,
        lower: Option<&T>,
        upper: Option<&T>,
        count: &mut usize,
    ) -> Option<usize> {
        let id = match link {
            None => return Some(1),
            Some(id) => id,
        };
        let node = &self.arena[id];

        if node.parent != parent
            || lower.map_or(false, |lower| *lower >= node.key)
            || upper.map_or(false, |upper| *upper <= node.key)
        {
            return None;
        }
        if node.color == Color::Red
            && (self.color(node.left) == Color::Red || self.color(node.right) == Color::Red)
        {
            return None;
        }

        *count += 1;
        let left_height =
            self.checked_black_height(node.left, link, lower, Some(&node.key), count)?;
        let right_height =
            self.checked_black_height(node.right, link, Some(&node.key), upper, count)?;

        if left_height != right_height {
            return None;
        }
        match node.color {
            Color::Black => Some(left_height + 1),
            Color::Red => Some(left_height),
        }
    }

    /// Returns the black height of the tree if every red black invariant holds.
    pub fn checked_root_black_height(&self) -> Option<usize> {
        if self.color(self.root) == Color::Red {
            return None;
        }
        let mut count = 0;
        let black_height = self.checked_black_height(self.root, None, None, None, &mut count)?;
        if count != self.arena.len() {
            return None;
        }
        Some(black_height)
    }
}
