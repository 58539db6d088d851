//! Strongly connected components.
//!
//! # Overview
//!
//! [`strongly_connected_components`] runs the two-pass (Kosaraju)
//! decomposition:
//!
//! 1. Depth-first traversal of the original graph, recording the order in
//!    which vertices finish.
//! 2. [`transpose`] builds a private copy with every arc reversed.
//! 3. Depth-first traversal of the transpose, rooting new trees in strictly
//!    decreasing finish order. Each tree is one component.
//!
//! The result partitions the vertex set: every vertex belongs to exactly
//! one [`Component`].

pub mod kosaraju;
pub mod transpose;

pub use kosaraju::{Component, SccResult, strongly_connected_components};
pub use transpose::transpose;
