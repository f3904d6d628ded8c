//! The operations shared by every balancing engine.

/// An ordered set of unique keys backed by a self-balancing binary search tree.
///
/// Every engine answers the same queries the same way, with one deliberate exception: `height`
/// follows each engine's own convention. An empty `AvlSet` has height `-1` and a single node has
/// height `0`, while an empty `RedBlackSet` has height `0` and a single node has height `1`.
///
/// # Examples
///
/// ```
/// use balanced_sets::avl_tree::AvlSet;
/// use balanced_sets::red_black_tree::RedBlackSet;
/// use balanced_sets::OrderedSet;
///
/// fn fill<S: OrderedSet<u32>>(set: &mut S) {
///     for key in &[5, 1, 3, 1] {
///         set.insert(*key);
///     }
/// }
///
/// let mut avl = AvlSet::new();
/// let mut rbt = RedBlackSet::new();
/// fill(&mut avl);
/// fill(&mut rbt);
///
/// assert_eq!(avl.size(), 3);
/// assert!(avl.keys().eq(rbt.keys()));
/// ```
pub trait OrderedSet<T>
where
    T: Ord,
{
    /// Inserts a key. Returns `false` and leaves the set untouched if the key is already present.
    fn insert(&mut self, key: T) -> bool;

    /// Deletes a key. Returns `false` if the key was not present.
    fn delete(&mut self, key: &T) -> bool;

    /// Returns `true` if the key is present.
    fn search(&self, key: &T) -> bool;

    /// Returns the number of keys in the set.
    fn size(&self) -> usize;

    /// Returns the height of the underlying tree using the engine's convention.
    fn height(&self) -> isize;

    /// Returns the keys in ascending order.
    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a>;

    /// Returns `true` if the set holds no keys.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
