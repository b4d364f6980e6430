//! Adjacency lists.
//!
//! Each vertex owns a small inline buffer of neighbors, which keeps sparse
//! graphs free of per-vertex heap allocations for typical degrees.

use arbor_common::types::{Edge, VertexId, Weight};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity of a neighbor row before it spills to the heap.
const INLINE_DEGREE: usize = 4;

type Row<T> = SmallVec<[T; INLINE_DEGREE]>;

/// Unweighted adjacency list: vertex index to ordered neighbor indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyList {
    rows: Vec<Row<VertexId>>,
}

impl AdjacencyList {
    /// Builds a list from one neighbor sequence per vertex.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = VertexId>,
    {
        Self {
            rows: rows.into_iter().map(|row| row.into_iter().collect()).collect(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the neighbors of `vertex` in their supplied order.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        &self.rows[vertex]
    }

    /// Returns the total number of entries across all rows.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Returns the in-degree of every vertex.
    #[must_use]
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.rows.len()];
        for row in &self.rows {
            for &neighbor in row {
                degrees[neighbor] += 1;
            }
        }
        degrees
    }

    /// Iterates over `(vertex, neighbors)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[VertexId])> {
        self.rows.iter().enumerate().map(|(v, row)| (v, row.as_slice()))
    }
}

/// Weighted adjacency list: vertex index to ordered `(neighbor, weight)`
/// pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedAdjacencyList {
    rows: Vec<Row<(VertexId, Weight)>>,
}

impl WeightedAdjacencyList {
    /// Builds a list from one `(neighbor, weight)` sequence per vertex.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (VertexId, Weight)>,
    {
        Self {
            rows: rows.into_iter().map(|row| row.into_iter().collect()).collect(),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the `(neighbor, weight)` pairs of `vertex`.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[(VertexId, Weight)] {
        &self.rows[vertex]
    }

    /// Returns the total number of entries across all rows.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }

    /// Flattens the list into edges, row by row in supplied order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.rows.iter().enumerate().flat_map(|(source, row)| {
            row.iter()
                .map(move |&(destination, weight)| Edge::new(source, destination, weight))
        })
    }

    /// Drops the weights.
    #[must_use]
    pub fn to_unweighted(&self) -> AdjacencyList {
        AdjacencyList {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|&(neighbor, _)| neighbor).collect())
                .collect(),
        }
    }
}
