//! Core type definitions for Arbor.
//!
//! This module contains the fundamental types shared by every algorithm:
//! - Vertex identifiers ([`VertexId`])
//! - Edge weights and the unreachable sentinel ([`Weight`], [`INFINITY`])
//! - Weighted directed edges ([`Edge`])

mod edge;
mod weight;

pub use edge::Edge;
pub use weight::{INFINITY, Weight, is_infinite, saturating_distance};

/// Dense vertex index in `0..n`.
///
/// Vertices have no separate object; every representation addresses them
/// by position.
pub type VertexId = usize;
