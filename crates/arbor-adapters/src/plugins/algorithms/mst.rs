//! Minimum spanning tree algorithms.
//!
//! Both algorithms read an undirected graph given as a
//! [`WeightedAdjacencyList`] in which every edge is listed from both ends.
//! On disconnected input they do not fail:
//!
//! - [`kruskal`] returns a minimum spanning forest, one tree per component.
//! - [`prim`] returns the tree of the component containing `start` only.

use std::collections::BinaryHeap;

use arbor_common::types::{Edge, VertexId, Weight};
use arbor_common::utils::error::Result;
use arbor_core::graph::{EdgeList, WeightedAdjacencyList};
use serde::{Deserialize, Serialize};

use super::traits::{start_parameter, start_vertex};
use super::{DisjointSet, MinScored};
use crate::plugins::{Algorithm, AlgorithmResult, ParameterDef, Parameters};

/// Result of a spanning tree computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Accepted edges as `(parent, absorbed vertex, weight)`, in the order
    /// they were accepted.
    pub edges: Vec<Edge>,
    /// Sum of the accepted edge weights.
    pub total_weight: Weight,
    /// Number of trees in the result (1 for a connected graph).
    pub tree_count: usize,
}

impl MstResult {
    /// Result for a graph with no vertices.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0,
            tree_count: 0,
        }
    }

    /// Returns the number of accepted edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the edges span all `vertex_count` vertices as a
    /// single tree.
    #[must_use]
    pub fn is_spanning_tree(&self, vertex_count: usize) -> bool {
        vertex_count > 0 && self.tree_count == 1 && self.edges.len() == vertex_count - 1
    }
}

impl Default for MstResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Minimum spanning forest by Kruskal's algorithm.
///
/// Edges are sorted by weight with a stable sort, so equal weights keep the
/// order in which the adjacency list lists them. An edge is accepted iff its
/// endpoints are in different components at that moment.
///
/// Time complexity: O(E log E).
#[must_use]
pub fn kruskal(adj: &WeightedAdjacencyList) -> MstResult {
    let n = adj.vertex_count();
    let mut candidates: Vec<Edge> = adj.edges().collect();
    candidates.sort_by_key(|edge| edge.weight);

    let mut sets = DisjointSet::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight: Weight = 0;

    for edge in candidates {
        if sets.union(edge.source, edge.destination) {
            total_weight = total_weight.saturating_add(edge.weight);
            edges.push(edge);
            if edges.len() + 1 == n {
                break;
            }
        }
    }

    let tree_count = sets.set_count();
    tracing::debug!(vertices = n, edges = edges.len(), tree_count, "kruskal complete");
    MstResult {
        edges,
        total_weight,
        tree_count,
    }
}

/// Minimum spanning tree of `start`'s component by Prim's algorithm.
///
/// A min-queue of `(weight, parent, candidate)` entries is seeded with the
/// self-entry `(0, none, start)`. Each popped candidate that is not yet in
/// the tree is absorbed, its edge recorded (except for the seed), and every
/// edge to a vertex outside the tree is queued. The loop ends when the queue
/// is empty.
///
/// Time complexity: O(E log E).
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty graph.
#[must_use]
pub fn prim(adj: &WeightedAdjacencyList, start: VertexId) -> MstResult {
    let n = adj.vertex_count();
    if n == 0 {
        return MstResult::empty();
    }

    let mut absorbed = vec![false; n];
    let mut heap: BinaryHeap<MinScored<Weight, (Option<VertexId>, VertexId)>> = BinaryHeap::new();
    let mut edges = Vec::new();
    let mut total_weight: Weight = 0;

    heap.push(MinScored(0, (None, start)));

    while let Some(MinScored(weight, (parent, vertex))) = heap.pop() {
        if absorbed[vertex] {
            continue;
        }
        absorbed[vertex] = true;
        if let Some(parent) = parent {
            edges.push(Edge::new(parent, vertex, weight));
        }
        total_weight = total_weight.saturating_add(weight);

        for &(neighbor, edge_weight) in adj.neighbors(vertex) {
            if !absorbed[neighbor] {
                heap.push(MinScored(edge_weight, (Some(vertex), neighbor)));
            }
        }
    }

    tracing::debug!(vertices = n, start, edges = edges.len(), "prim complete");
    MstResult {
        edges,
        total_weight,
        tree_count: 1,
    }
}

// ============================================================================
// Algorithm wrappers
// ============================================================================

const NO_PARAMETERS: &[ParameterDef] = &[];

/// Kruskal's algorithm as a registry algorithm. Edges are read as undirected.
#[derive(Default)]
pub struct KruskalAlgorithm;

impl Algorithm for KruskalAlgorithm {
    fn name(&self) -> &str {
        "kruskal"
    }

    fn description(&self) -> &str {
        "Minimum spanning forest by sorted edge insertion"
    }

    fn parameters(&self) -> &[ParameterDef] {
        NO_PARAMETERS
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        params.resolve(self.parameters())?;
        let adj = graph.to_weighted_adjacency_list(false);
        Ok(AlgorithmResult::SpanningTree(kruskal(&adj)))
    }
}

/// Prim's algorithm as a registry algorithm. Edges are read as undirected.
pub struct PrimAlgorithm {
    parameters: Vec<ParameterDef>,
}

impl PrimAlgorithm {
    /// Creates the wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: vec![start_parameter()],
        }
    }
}

impl Default for PrimAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for PrimAlgorithm {
    fn name(&self) -> &str {
        "prim"
    }

    fn description(&self) -> &str {
        "Minimum spanning tree of the start vertex's component"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        let params = params.resolve(&self.parameters)?;
        let start = start_vertex(&params, graph)?;
        let adj = graph.to_weighted_adjacency_list(false);
        Ok(AlgorithmResult::SpanningTree(prim(&adj, start)))
    }
}
