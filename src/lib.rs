//! A generic, in-memory, unbalanced Binary Search Tree (BST) with
//! duplicate-tolerant insertion, breadth-first ("floor") indexing, and a
//! family of deterministic traversal orders.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores comparable values in a binary tree so that,
//! for every node:
//!
//! 1. Every value in its left subtree compares less than *or equal to* its
//!    own value.
//! 2. Every value in its right subtree compares greater than its own value.
//!
//! The tie-break matters: inserting a value equal to one already present is
//! not rejected, it is pushed into the left subtree. A [`HybridOrder`]
//! (in-order) traversal therefore always yields the stored values in
//! non-decreasing order, duplicates included.
//!
//! The tree is deliberately *unbalanced*: there are no rotations and no
//! height invariant. Inserting a sorted run produces a degenerate chain;
//! that is inherent to the design, not a defect. Removal takes the opposite
//! trade: instead of splicing in a successor it detaches the whole subtree
//! under the removed node and reinserts the surviving values one by one,
//! favoring simplicity over shape stability.
//!
//! Nodes are also addressable by their position in the breadth-first
//! [`FloorsOrder`] (the root is index 0, its children come next, and so on
//! floor by floor), which backs indexed access and the floor-by-floor
//! string rendering.
//!
//! [`HybridOrder`]: Order::HybridOrder
//! [`FloorsOrder`]: Order::FloorsOrder
//!
//! # Examples
//!
//! ```
//! use bstree::{Order, Tree};
//!
//! let mut tree: Tree<i32> = [6, 5, 8, 5].iter().copied().collect();
//!
//! // Sorted view, duplicates kept.
//! assert_eq!(tree.traverse(Order::HybridOrder), [&5, &5, &6, &8]);
//! assert_eq!(tree.min(), Ok(&5));
//!
//! // Breadth-first indexing: the root is index 0.
//! assert_eq!(tree[0], 6);
//!
//! // Removal drops exactly one occurrence.
//! assert!(tree.remove(&5));
//! assert_eq!(tree.len(), 3);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod tree;

pub use error::Error;
pub use tree::{Format, Order, Tree};
