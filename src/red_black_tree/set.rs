use crate::arena::{Arena, NodeId};
use crate::ordered_set::OrderedSet;
use crate::red_black_tree::node::{Link, Node};
use crate::red_black_tree::tree;
use std::iter::FromIterator;
use std::vec;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black,
/// keeps red nodes from having red children and keeps the number of black nodes equal on every
/// path from the root to a leaf. Nodes are stored in an arena and refer to their parent and
/// children by index.
///
/// # Examples
///
/// ```
/// use balanced_sets::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.size(), 2);
/// assert_eq!(set.min(), Some(&0));
///
/// assert!(set.delete(&0));
/// assert!(!set.delete(&1));
/// ```
pub struct RedBlackSet<T> {
    tree: tree::Tree<T>,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        RedBlackSet {
            tree: tree::Tree::new(),
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key already
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.tree.insert(key)
    }

    /// Deletes a key from the set. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.delete(&1));
    /// assert!(!set.delete(&1));
    /// ```
    pub fn delete(&mut self, key: &T) -> bool {
        self.tree.remove(key)
    }

    /// Checks if a key exists in the set.
    pub fn search(&self, key: &T) -> bool {
        self.tree.find(key).is_some()
    }

    /// Returns the number of keys in the set.
    pub fn size(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.len() == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf. An empty set has
    /// height `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.height(), 0);
    /// set.insert(10);
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        self.tree.height()
    }

    /// Clears the set, removing all keys.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.tree
            .root()
            .map(|root| &self.tree.node(self.tree.minimum(root)).key)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        self.tree
            .root()
            .map(|root| &self.tree.node(self.tree.maximum(root)).key)
    }

    /// Verifies the structural invariants of the tree: keys are strictly increasing in-order, the
    /// root is black, no red node has a red child, every path to a leaf holds the same number of
    /// black nodes and every parent link is consistent. Runs in linear time.
    pub fn is_valid(&self) -> bool {
        self.tree.checked_root_black_height().is_some()
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<T> {
        RedBlackSetIter {
            tree: &self.tree,
            next: self.tree.root().map(|root| self.tree.minimum(root)),
        }
    }
}

impl<T> OrderedSet<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        RedBlackSet::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> bool {
        RedBlackSet::delete(self, key)
    }

    fn search(&self, key: &T) -> bool {
        RedBlackSet::search(self, key)
    }

    fn size(&self) -> usize {
        RedBlackSet::size(self)
    }

    fn height(&self) -> isize {
        RedBlackSet::height(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(self.iter())
    }
}

impl<T> IntoIterator for RedBlackSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = RedBlackSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut order = Vec::with_capacity(self.tree.len());
        let mut curr = self.tree.root().map(|root| self.tree.minimum(root));
        while let Some(id) = curr {
            order.push(id);
            curr = self.tree.successor(id);
        }
        Self::IntoIter {
            arena: self.tree.into_arena(),
            order: order.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = RedBlackSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    arena: Arena<Node<T>>,
    order: vec::IntoIter<NodeId>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = &mut self.arena;
        self.order.next().map(|id| arena.free(id).key)
    }
}

/// An iterator for `RedBlackSet<T>`.
///
/// This iterator walks parent links from one in-order successor to the next, so it needs no
/// auxiliary stack.
pub struct RedBlackSetIter<'a, T>
where
    T: 'a,
{
    tree: &'a tree::Tree<T>,
    next: Link,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.successor(id);
        Some(&self.tree.node(id).key)
    }
}

impl<T> Default for RedBlackSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for RedBlackSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}
