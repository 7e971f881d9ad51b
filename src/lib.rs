//! # `AaSet`
//!
//! An ordered-set container backed by an AA-tree.
//!
//! An AA-tree is a self-balancing binary search tree: a simplified
//! red-black variant that encodes balance as an integer *level* per node
//! and restores it with two local moves, Skew and Split. Compared to a
//! full red-black tree the deletion rebalance collapses to one fixed
//! five-step pattern, which keeps the engine small without giving up the
//! logarithmic height bound.
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `insert` | O(log n) | duplicate insert is a no-op |
//! | `remove` | O(log n) | absent remove is a no-op |
//! | `contains` / `find` / `lower_bound` | O(log n) | |
//! | `iter` / cursor step | O(1) amortized | parent-pointer navigation |
//! | `clone` | O(n) | deep structural copy |
//!
//! ## Usage
//!
//! ```rust
//! use aaset::AaSet;
//!
//! let mut set: AaSet<i32> = [7, 1, 5, 3].into();
//! set.insert(4);
//! set.remove(&1);
//!
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 4, 5, 7]);
//!
//! // The smallest element not less than the query:
//! assert_eq!(set.lower_bound(&6).get(), Some(&7));
//!
//! // Bidirectional cursor navigation:
//! let mut cur = set.find(&5);
//! cur.move_prev();
//! assert_eq!(cur.get(), Some(&4));
//! ```
//!
//! ## Ordering
//!
//! Elements are ordered by their [`Ord`] impl; one element is kept per
//! equivalence class. No separate comparator is supported. Removal and
//! deep copy additionally require [`Clone`], because two-child deletion
//! copies a neighbor's value over the doomed node.
//!
//! ## Mutation and cursors
//!
//! Cursors and iterators borrow the set, so the borrow checker rules out
//! structural mutation while any of them is alive. Within a single
//! `&mut self` call, rotations rewire nodes in place; a node is freed only
//! when it is actually spliced out of the tree.
//!
//! `AaSet<T>` is `Send` when `T: Send` and `Sync` when `T: Sync`; a set
//! still admits no concurrent mutation (all mutation goes through
//! `&mut self`).

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod cursor;
pub mod tree;
pub mod validate;

mod balance;
mod node;
mod tracing_helpers;

// Re-export main types for convenience
pub use cursor::{Cursor, Iter};
pub use tree::AaSet;
pub use validate::{InvariantError, TreeStats};
