//! Ordered sets backed by interchangeable self-balancing binary search trees.
//!
//! Two engines implement the same `OrderedSet` operations:
//!
//! - `avl_tree::AvlSet` keeps the heights of sibling subtrees within one of each other.
//! - `red_black_tree::RedBlackSet` colors nodes and keeps black heights equal.
//!
//! `BalancedSet` picks one of them at runtime from an `Engine`, and `Dictionary` wraps a
//! `BalancedSet<String>` with key validation and line-delimited batch loading.
//!
//! # Examples
//!
//! ```
//! use balanced_sets::{BalancedSet, Engine};
//!
//! let mut set = BalancedSet::new(Engine::HeightBalanced);
//! for key in &[41, 38, 31, 12, 19, 8] {
//!     set.insert(*key);
//! }
//!
//! assert_eq!(set.height(), 2);
//! assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), vec![8, 12, 19, 31, 38, 41]);
//! ```

pub mod arena;
pub mod avl_tree;
pub mod balanced_set;
pub mod dictionary;
mod error;
mod ordered_set;
pub mod red_black_tree;

pub use crate::balanced_set::{BalancedSet, Engine};
pub use crate::dictionary::{BatchReport, Dictionary};
pub use crate::error::{Error, Result};
pub use crate::ordered_set::OrderedSet;
