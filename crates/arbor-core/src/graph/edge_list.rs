//! Edge-list representation and conversions to the other representations.

use arbor_common::types::{Edge, VertexId, Weight};
use serde::{Deserialize, Serialize};

use super::{AdjacencyList, AdjacencyMatrix, WeightMatrix, WeightedAdjacencyList};

/// An ordered sequence of weighted edges over vertices `0..vertex_count`.
///
/// This is the most general input form; every other representation can be
/// derived from it. When `directed` is false in a conversion, each edge is
/// emitted in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Creates an edge list over `vertex_count` vertices.
    ///
    /// # Panics
    ///
    /// Panics if an edge references a vertex `>= vertex_count`.
    pub fn new(vertex_count: usize, edges: impl IntoIterator<Item = Edge>) -> Self {
        let edges: Vec<Edge> = edges.into_iter().collect();
        for edge in &edges {
            assert!(
                edge.source < vertex_count && edge.destination < vertex_count,
                "edge {edge} outside {vertex_count} vertices"
            );
        }
        Self {
            vertex_count,
            edges,
        }
    }

    /// Creates an edge list from `(source, destination, weight)` triples.
    ///
    /// The vertex count is one more than the largest endpoint.
    pub fn from_triples(triples: impl IntoIterator<Item = (VertexId, VertexId, Weight)>) -> Self {
        let edges: Vec<Edge> = triples.into_iter().map(Edge::from).collect();
        let vertex_count = edges
            .iter()
            .map(|e| e.source.max(e.destination) + 1)
            .max()
            .unwrap_or(0);
        Self {
            vertex_count,
            edges,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if there are no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    /// Returns the edges in their supplied order.
    #[inline]
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns true if any edge has a negative weight.
    #[must_use]
    pub fn has_negative_weight(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0)
    }

    fn oriented(&self, directed: bool) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().flat_map(move |&edge| {
            let back = (!directed).then(|| edge.reversed());
            std::iter::once(edge).chain(back)
        })
    }

    /// Derives an unweighted adjacency list.
    #[must_use]
    pub fn to_adjacency_list(&self, directed: bool) -> AdjacencyList {
        let mut rows: Vec<Vec<VertexId>> = vec![Vec::new(); self.vertex_count];
        for edge in self.oriented(directed) {
            rows[edge.source].push(edge.destination);
        }
        AdjacencyList::from_rows(rows)
    }

    /// Derives a weighted adjacency list.
    #[must_use]
    pub fn to_weighted_adjacency_list(&self, directed: bool) -> WeightedAdjacencyList {
        let mut rows: Vec<Vec<(VertexId, Weight)>> = vec![Vec::new(); self.vertex_count];
        for edge in self.oriented(directed) {
            rows[edge.source].push((edge.destination, edge.weight));
        }
        WeightedAdjacencyList::from_rows(rows)
    }

    /// Derives an unweighted adjacency matrix.
    #[must_use]
    pub fn to_adjacency_matrix(&self, directed: bool) -> AdjacencyMatrix {
        AdjacencyMatrix::from_edges(
            self.vertex_count,
            self.oriented(directed).map(|e| e.endpoints()),
        )
    }

    /// Derives a weighted matrix (`0` diagonal, lightest parallel edge).
    #[must_use]
    pub fn to_weight_matrix(&self, directed: bool) -> WeightMatrix {
        let edges: Vec<Edge> = self.oriented(directed).collect();
        WeightMatrix::from_edges(self.vertex_count, &edges)
    }
}
