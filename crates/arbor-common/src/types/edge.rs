//! Weighted directed edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};

/// A directed, weighted edge `source -> destination`.
///
/// Undirected graphs are expressed as a pair of opposite edges; spanning
/// tree results use `source` for the tree parent and `destination` for the
/// absorbed vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Tail vertex.
    pub source: VertexId,
    /// Head vertex.
    pub destination: VertexId,
    /// Edge weight (1 for unweighted graphs).
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge.
    #[inline]
    #[must_use]
    pub const fn new(source: VertexId, destination: VertexId, weight: Weight) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Creates an edge of weight 1.
    #[inline]
    #[must_use]
    pub const fn unweighted(source: VertexId, destination: VertexId) -> Self {
        Self::new(source, destination, 1)
    }

    /// Returns the same edge pointing the other way.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self::new(self.destination, self.source, self.weight)
    }

    /// Returns the endpoints as a `(source, destination)` pair.
    #[inline]
    #[must_use]
    pub const fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.destination)
    }
}

impl From<(VertexId, VertexId, Weight)> for Edge {
    fn from((source, destination, weight): (VertexId, VertexId, Weight)) -> Self {
        Self::new(source, destination, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.destination, self.weight)
    }
}
