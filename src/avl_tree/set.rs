use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::ordered_set::OrderedSet;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
///
/// ```
/// use balanced_sets::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.size(), 2);
/// assert_eq!(set.min(), Some(&0));
///
/// assert!(set.delete(&0));
/// assert!(!set.delete(&1));
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            tree: None,
            len: 0,
        }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set unchanged if the key already
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Deletes a key from the set. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(set.delete(&1));
    /// assert!(!set.delete(&1));
    /// ```
    pub fn delete(&mut self, key: &T) -> bool {
        let removed = tree::remove(&mut self.tree, key);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.search(&0));
    /// assert!(set.search(&1));
    /// ```
    pub fn search(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of keys in the set.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of edges on the longest path from the root to a leaf. An empty set has
    /// height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    /// set.insert(1);
    /// assert_eq!(set.height(), 0);
    /// set.insert(2);
    /// set.insert(3);
    /// assert_eq!(set.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        tree::height(&self.tree)
    }

    /// Clears the set, removing all keys.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Verifies the structural invariants of the tree: keys are strictly increasing in-order,
    /// every cached height is exact, every node is balanced and the tracked size matches. Runs
    /// in linear time.
    pub fn is_valid(&self) -> bool {
        tree::checked_height(&self.tree, None, None).is_some() && tree::len(&self.tree) == self.len
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> OrderedSet<T> for AvlSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        AvlSet::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> bool {
        AvlSet::delete(self, key)
    }

    fn search(&self, key: &T) -> bool {
        AvlSet::search(self, key)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn height(&self) -> isize {
        AvlSet::height(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(self.iter())
    }
}

impl<T> IntoIterator for AvlSet<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `AvlSet<T>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}
