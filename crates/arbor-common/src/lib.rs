//! # arbor-common
//!
//! Foundation layer for Arbor: vertex and weight types, the "infinity"
//! sentinel, and the shared error type.
//!
//! This crate provides the fundamental building blocks used by all other
//! Arbor crates. It has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (VertexId, Weight, Edge, INFINITY)
//! - [`utils`] - Utility functions and helpers (errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{Edge, INFINITY, VertexId, Weight};
pub use utils::error::{Error, Result};
