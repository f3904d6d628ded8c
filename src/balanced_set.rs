//! Runtime choice between the two balancing engines.

use crate::avl_tree::{AvlSet, AvlSetIter};
use crate::error::{Error, Result};
use crate::ordered_set::OrderedSet;
use crate::red_black_tree::{RedBlackSet, RedBlackSetIter};
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The balancing scheme behind a `BalancedSet`.
///
/// Serializes as `"height-balanced"` or `"color-balanced"`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    /// An avl tree.
    HeightBalanced,
    /// A red black tree.
    ColorBalanced,
}

impl Engine {
    /// Returns the canonical name of the engine.
    pub fn name(self) -> &'static str {
        match self {
            Engine::HeightBalanced => "height-balanced",
            Engine::ColorBalanced => "color-balanced",
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::HeightBalanced
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = Error;

    /// Parses an engine name. Accepts the canonical names as well as `avl` and `red-black`,
    /// ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_sets::Engine;
    ///
    /// assert_eq!("color-balanced".parse::<Engine>().unwrap(), Engine::ColorBalanced);
    /// assert_eq!("AVL".parse::<Engine>().unwrap(), Engine::HeightBalanced);
    /// assert!("splay".parse::<Engine>().is_err());
    /// ```
    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "height-balanced" | "avl" => Ok(Engine::HeightBalanced),
            "color-balanced" | "red-black" => Ok(Engine::ColorBalanced),
            _ => Err(Error::UnknownEngine(name.to_string())),
        }
    }
}

/// An ordered set whose balancing engine is chosen once, at construction.
///
/// # Examples
///
/// ```
/// use balanced_sets::{BalancedSet, Engine};
///
/// let mut set = BalancedSet::new(Engine::ColorBalanced);
/// assert!(set.insert(2));
/// assert!(set.insert(1));
/// assert!(!set.insert(2));
///
/// assert_eq!(set.engine(), Engine::ColorBalanced);
/// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&1, &2]);
/// ```
pub enum BalancedSet<T> {
    HeightBalanced(AvlSet<T>),
    ColorBalanced(RedBlackSet<T>),
}

impl<T> BalancedSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BalancedSet<T>` backed by `engine`.
    pub fn new(engine: Engine) -> Self {
        match engine {
            Engine::HeightBalanced => BalancedSet::HeightBalanced(AvlSet::new()),
            Engine::ColorBalanced => BalancedSet::ColorBalanced(RedBlackSet::new()),
        }
    }

    /// Returns the engine backing the set.
    pub fn engine(&self) -> Engine {
        match self {
            BalancedSet::HeightBalanced(_) => Engine::HeightBalanced,
            BalancedSet::ColorBalanced(_) => Engine::ColorBalanced,
        }
    }

    /// Inserts a key. Returns `false` if the key was already present.
    pub fn insert(&mut self, key: T) -> bool {
        match self {
            BalancedSet::HeightBalanced(set) => set.insert(key),
            BalancedSet::ColorBalanced(set) => set.insert(key),
        }
    }

    /// Deletes a key. Returns `false` if the key was not present.
    pub fn delete(&mut self, key: &T) -> bool {
        match self {
            BalancedSet::HeightBalanced(set) => set.delete(key),
            BalancedSet::ColorBalanced(set) => set.delete(key),
        }
    }

    /// Checks if a key exists in the set.
    pub fn search(&self, key: &T) -> bool {
        match self {
            BalancedSet::HeightBalanced(set) => set.search(key),
            BalancedSet::ColorBalanced(set) => set.search(key),
        }
    }

    /// Returns the number of keys in the set.
    pub fn size(&self) -> usize {
        match self {
            BalancedSet::HeightBalanced(set) => set.size(),
            BalancedSet::ColorBalanced(set) => set.size(),
        }
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns the tree height using the engine's convention: `-1` for an empty avl tree and `0`
    /// for an empty red black tree.
    pub fn height(&self) -> isize {
        match self {
            BalancedSet::HeightBalanced(set) => set.height(),
            BalancedSet::ColorBalanced(set) => set.height(),
        }
    }

    /// Clears the set, removing all keys. The engine is kept.
    pub fn clear(&mut self) {
        match self {
            BalancedSet::HeightBalanced(set) => set.clear(),
            BalancedSet::ColorBalanced(set) => set.clear(),
        }
    }

    /// Verifies the structural invariants of the underlying engine.
    pub fn is_valid(&self) -> bool {
        match self {
            BalancedSet::HeightBalanced(set) => set.is_valid(),
            BalancedSet::ColorBalanced(set) => set.is_valid(),
        }
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> BalancedSetIter<T> {
        match self {
            BalancedSet::HeightBalanced(set) => BalancedSetIter::HeightBalanced(set.iter()),
            BalancedSet::ColorBalanced(set) => BalancedSetIter::ColorBalanced(set.iter()),
        }
    }
}

impl<T> OrderedSet<T> for BalancedSet<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> bool {
        BalancedSet::insert(self, key)
    }

    fn delete(&mut self, key: &T) -> bool {
        BalancedSet::delete(self, key)
    }

    fn search(&self, key: &T) -> bool {
        BalancedSet::search(self, key)
    }

    fn size(&self) -> usize {
        BalancedSet::size(self)
    }

    fn height(&self) -> isize {
        BalancedSet::height(self)
    }

    fn keys<'a>(&'a self) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        Box::new(self.iter())
    }
}

impl<T> Default for BalancedSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new(Engine::default())
    }
}

impl<'a, T> IntoIterator for &'a BalancedSet<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = BalancedSetIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `BalancedSet<T>`.
pub enum BalancedSetIter<'a, T>
where
    T: 'a,
{
    HeightBalanced(AvlSetIter<'a, T>),
    ColorBalanced(RedBlackSetIter<'a, T>),
}

impl<'a, T> Iterator for BalancedSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            BalancedSetIter::HeightBalanced(iter) => iter.next(),
            BalancedSetIter::ColorBalanced(iter) => iter.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BalancedSet, Engine};
    use crate::error::Error;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_engine_tokens() {
        assert_tokens(
            &Engine::HeightBalanced,
            &[Token::UnitVariant {
                name: "Engine",
                variant: "height-balanced",
            }],
        );
        assert_tokens(
            &Engine::ColorBalanced,
            &[Token::UnitVariant {
                name: "Engine",
                variant: "color-balanced",
            }],
        );
    }

    #[test]
    fn test_engine_unknown_variant() {
        assert_de_tokens_error::<Engine>(
            &[Token::UnitVariant {
                name: "Engine",
                variant: "splay",
            }],
            "unknown variant `splay`, expected `height-balanced` or `color-balanced`",
        );
    }

    #[test]
    fn test_engine_from_str() {
        assert_eq!("height-balanced".parse::<Engine>().unwrap(), Engine::HeightBalanced);
        assert_eq!(" Red-Black ".parse::<Engine>().unwrap(), Engine::ColorBalanced);
        match "treap".parse::<Engine>() {
            Err(Error::UnknownEngine(name)) => assert_eq!(name, "treap"),
            _ => panic!("Expected an unknown engine error."),
        }
    }

    #[test]
    fn test_engine_display_round_trips() {
        for engine in &[Engine::HeightBalanced, Engine::ColorBalanced] {
            assert_eq!(engine.to_string().parse::<Engine>().unwrap(), *engine);
        }
    }

    #[test]
    fn test_default_engine() {
        let set: BalancedSet<u32> = BalancedSet::default();
        assert_eq!(set.engine(), Engine::HeightBalanced);
        assert_eq!(set.height(), -1);
    }

    #[test]
    fn test_empty_heights_differ_per_engine() {
        let avl: BalancedSet<u32> = BalancedSet::new(Engine::HeightBalanced);
        let rbt: BalancedSet<u32> = BalancedSet::new(Engine::ColorBalanced);
        assert_eq!(avl.height(), -1);
        assert_eq!(rbt.height(), 0);
    }

    #[test]
    fn test_delegation() {
        for engine in &[Engine::HeightBalanced, Engine::ColorBalanced] {
            let mut set = BalancedSet::new(*engine);
            assert!(set.insert(3));
            assert!(set.insert(1));
            assert!(set.insert(2));
            assert!(!set.insert(2));
            assert!(set.delete(&1));
            assert!(!set.delete(&1));
            assert!(set.search(&3));
            assert_eq!(set.size(), 2);
            assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
            assert!(set.is_valid());
            set.clear();
            assert!(set.is_empty());
            assert_eq!(set.engine(), *engine);
        }
    }
}
