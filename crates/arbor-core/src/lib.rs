//! # arbor-core
//!
//! Core layer for Arbor: the read-only graph representations that every
//! algorithm consumes.
//!
//! This crate depends only on `arbor-common`. Representations are built once
//! from caller data and never change afterwards; converting between them
//! always produces a new value.
//!
//! ## Modules
//!
//! - [`graph`] - Adjacency matrices, adjacency lists, and edge lists

pub mod graph;

// Re-export commonly used types
pub use graph::{AdjacencyList, AdjacencyMatrix, EdgeList, WeightMatrix, WeightedAdjacencyList};
