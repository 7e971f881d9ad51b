//! Structural validation and statistics for diagnostics and tests.
//!
//! [`AaSet::check_invariants`] walks the whole tree and verifies every
//! structural invariant the mutating operations promise to uphold; tests
//! call it after operation batches. [`AaSet::stats`] collects shape
//! metrics, which the balance-bound tests and the debug binary report.

use std::error::Error;
use std::fmt as StdFmt;

use crate::node::Node;
use crate::tree::AaSet;

// ============================================================================
//  InvariantError
// ============================================================================

/// A structural invariant violation found by [`AaSet::check_invariants`].
///
/// A live set never produces these; they exist to make corruption
/// diagnosable in tests and debugging builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// An in-order pair of elements was not strictly increasing.
    OrderViolation,

    /// A left child shares its parent's level.
    LeftHorizontalLink {
        /// The shared level.
        level: usize,
    },

    /// A right child's level exceeds its parent's.
    RightLevelRule {
        /// Parent level.
        parent: usize,
        /// Offending child level.
        child: usize,
    },

    /// A right-right grandchild reaches its grandparent's level (two
    /// consecutive right-horizontal links).
    DoubleRightHorizontal {
        /// The chained level.
        level: usize,
    },

    /// A node with no children whose level is not 1.
    LeafLevel {
        /// The offending level.
        level: usize,
    },

    /// A node's parent back-reference does not name the node that holds
    /// it as a child.
    ParentMismatch,

    /// The tracked length differs from the number of live nodes.
    SizeMismatch {
        /// Tracked length.
        len: usize,
        /// Nodes actually reachable.
        counted: usize,
    },
}

impl StdFmt::Display for InvariantError {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        match self {
            Self::OrderViolation => write!(f, "in-order traversal is not strictly increasing"),

            Self::LeftHorizontalLink { level } => {
                write!(f, "left-horizontal link at level {level}")
            }

            Self::RightLevelRule { parent, child } => {
                write!(f, "right child level {child} exceeds parent level {parent}")
            }

            Self::DoubleRightHorizontal { level } => {
                write!(f, "double right-horizontal chain at level {level}")
            }

            Self::LeafLevel { level } => {
                write!(f, "leaf node has level {level}, expected 1")
            }

            Self::ParentMismatch => write!(f, "parent back-reference out of lockstep"),

            Self::SizeMismatch { len, counted } => {
                write!(f, "tracked len {len} but {counted} live nodes")
            }
        }
    }
}

impl Error for InvariantError {}

// ============================================================================
//  TreeStats
// ============================================================================

/// Shape metrics collected by [`AaSet::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of live nodes.
    pub nodes: usize,

    /// Maximum root-to-leaf edge count; 0 for an empty or single-node
    /// tree.
    pub height: usize,

    /// Level of the root node, 0 for an empty tree.
    pub root_level: usize,
}

// ============================================================================
//  Validation walks
// ============================================================================

impl<T: Ord> AaSet<T> {
    /// Verify every structural invariant of the tree.
    ///
    /// Checks, in one pass plus an in-order sweep:
    /// - BST order (in-order traversal strictly increasing);
    /// - no left-horizontal link; right child level bounded by parent's;
    ///   no double right-horizontal chain;
    /// - childless nodes at level exactly 1;
    /// - every parent back-reference in lockstep with child links;
    /// - tracked length equal to the live node count.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut counted: usize = 0;

        if !self.root.is_null() {
            // SAFETY: root is this set's live owned subtree; its parent is
            // null by invariant.
            unsafe {
                if !(*self.root).parent.is_null() {
                    return Err(InvariantError::ParentMismatch);
                }
                Self::check_structure(self.root, &mut counted)?;
            }
        }

        if counted != self.len {
            return Err(InvariantError::SizeMismatch {
                len: self.len,
                counted,
            });
        }

        // In-order sweep for strict BST order.
        let mut prev: Option<&T> = None;
        for value in self.iter() {
            if let Some(p) = prev
                && p >= value
            {
                return Err(InvariantError::OrderViolation);
            }
            prev = Some(value);
        }

        Ok(())
    }

    /// Recursive structure check: levels and parent lockstep.
    ///
    /// # Safety
    ///
    /// `node` must point to a live node of this set.
    unsafe fn check_structure(
        node: *mut Node<T>,
        counted: &mut usize,
    ) -> Result<(), InvariantError> {
        *counted += 1;

        // SAFETY: node is live; children are live or null.
        unsafe {
            let level: usize = (*node).level;
            let left: *mut Node<T> = (*node).left;
            let right: *mut Node<T> = (*node).right;

            if left.is_null() && right.is_null() && level != 1 {
                return Err(InvariantError::LeafLevel { level });
            }

            if !left.is_null() {
                if !std::ptr::eq((*left).parent, node) {
                    return Err(InvariantError::ParentMismatch);
                }
                if (*left).level >= level {
                    return Err(InvariantError::LeftHorizontalLink { level });
                }
                Self::check_structure(left, counted)?;
            }

            if !right.is_null() {
                if !std::ptr::eq((*right).parent, node) {
                    return Err(InvariantError::ParentMismatch);
                }
                if (*right).level > level {
                    return Err(InvariantError::RightLevelRule {
                        parent: level,
                        child: (*right).level,
                    });
                }
                if !(*right).right.is_null() && (*(*right).right).level >= level {
                    return Err(InvariantError::DoubleRightHorizontal { level });
                }
                Self::check_structure(right, counted)?;
            }
        }

        Ok(())
    }
}

impl<T> AaSet<T> {
    /// Collect shape metrics by walking the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        if self.root.is_null() {
            return TreeStats::default();
        }

        // SAFETY: root is live and exclusively owned.
        unsafe {
            TreeStats {
                nodes: self.len,
                height: Self::depth_below(self.root),
                root_level: (*self.root).level,
            }
        }
    }

    /// Maximum edge count from `node` down to a leaf.
    ///
    /// # Safety
    ///
    /// `node` must point to a live node.
    unsafe fn depth_below(node: *mut Node<T>) -> usize {
        // SAFETY: children are live or null.
        unsafe {
            let left: usize = if (*node).left.is_null() {
                0
            } else {
                1 + Self::depth_below((*node).left)
            };

            let right: usize = if (*node).right.is_null() {
                0
            } else {
                1 + Self::depth_below((*node).right)
            };

            left.max(right)
        }
    }
}
