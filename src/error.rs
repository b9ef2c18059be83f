//! Error conditions reported by tree operations.
//!
//! Everything here is reported synchronously to the caller and never leaves
//! the tree partially mutated. Conditions that cannot be constructed through
//! the public API (an absent value, an unknown traversal order) have no
//! variant; the type system already rules them out.

use thiserror::Error;

/// The error type for fallible [`Tree`](crate::Tree) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An aggregate such as [`min`](crate::Tree::min) or
    /// [`max`](crate::Tree::max) was requested on a tree with no nodes.
    /// Reducing an empty sequence has no defined result, so it is rejected
    /// rather than defaulted.
    #[error("tree contains no values")]
    Empty,

    /// A floor-indexed access was past the end of the tree. Valid indices
    /// run from 0 (the root) to one below the current node count.
    #[error("index {index} out of range for tree of {len} nodes")]
    OutOfRange {
        /// The breadth-first index that was requested.
        index: usize,
        /// The number of nodes in the tree at the time of the access.
        len: usize,
    },
}
