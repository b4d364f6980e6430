//! Breadth-first and depth-first traversal, and undirected cycle detection.
//!
//! Traversals run over an [`AdjacencyMatrix`] and always cover the whole
//! graph: after the pass from `start`, further passes begin at each
//! still-unvisited vertex in increasing index order. The visitor is called
//! exactly once per vertex, at the moment the vertex is first reached.
//!
//! Depth-first code uses explicit stacks of frames rather than recursion, so
//! deep or path-shaped graphs cannot overflow the call stack. Each frame keeps
//! a cursor into its neighbor sequence, which reproduces the recursive
//! visitation order exactly.

use std::collections::VecDeque;

use arbor_common::types::VertexId;
use arbor_common::utils::error::Result;
use arbor_core::graph::{AdjacencyList, AdjacencyMatrix, EdgeList};

use super::traits::{
    directed_parameter, start_parameter, start_vertex, strategy, strategy_parameter,
};
use crate::plugins::{Algorithm, AlgorithmResult, ParameterDef, ParameterType, Parameters};

/// Breadth-first traversal with full coverage of disconnected graphs.
///
/// Within one pass vertices are visited in non-decreasing hop distance from
/// the pass root; ties follow column order.
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty matrix.
pub fn bfs<F>(matrix: &AdjacencyMatrix, start: VertexId, mut visit: F)
where
    F: FnMut(VertexId),
{
    let n = matrix.vertex_count();
    if n == 0 {
        return;
    }

    let mut visited = vec![false; n];
    let mut queue = VecDeque::new();
    let mut passes = 0usize;

    for root in std::iter::once(start).chain(0..n) {
        if visited[root] {
            continue;
        }
        passes += 1;
        visited[root] = true;
        visit(root);
        queue.push_back(root);

        while let Some(vertex) = queue.pop_front() {
            for neighbor in matrix.neighbors(vertex) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    visit(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
    }

    tracing::debug!(vertices = n, passes, "bfs complete");
}

/// Depth-first pre-order traversal with full coverage of disconnected graphs.
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty matrix.
pub fn dfs<F>(matrix: &AdjacencyMatrix, start: VertexId, mut visit: F)
where
    F: FnMut(VertexId),
{
    let n = matrix.vertex_count();
    if n == 0 {
        return;
    }

    let mut visited = vec![false; n];
    // (vertex, next column to inspect)
    let mut stack: Vec<(VertexId, usize)> = Vec::new();
    let mut passes = 0usize;

    for root in std::iter::once(start).chain(0..n) {
        if visited[root] {
            continue;
        }
        passes += 1;
        visited[root] = true;
        visit(root);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let next = (frame.1..n)
                .find(|&column| matrix.has_edge(vertex, column) && !visited[column]);
            match next {
                Some(neighbor) => {
                    frame.1 = neighbor + 1;
                    visited[neighbor] = true;
                    visit(neighbor);
                    stack.push((neighbor, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    tracing::debug!(vertices = n, passes, "dfs complete");
}

/// Returns the breadth-first visitation order.
#[must_use]
pub fn bfs_order(matrix: &AdjacencyMatrix, start: VertexId) -> Vec<VertexId> {
    let mut order = Vec::with_capacity(matrix.vertex_count());
    bfs(matrix, start, |v| order.push(v));
    order
}

/// Returns the depth-first pre-order.
#[must_use]
pub fn dfs_order(matrix: &AdjacencyMatrix, start: VertexId) -> Vec<VertexId> {
    let mut order = Vec::with_capacity(matrix.vertex_count());
    dfs(matrix, start, |v| order.push(v));
    order
}

/// Detects a cycle in the undirected component containing `start`, using BFS.
///
/// Each vertex remembers the vertex it was discovered from. Seeing an
/// already-visited neighbor other than that traversal parent means the
/// component has a cycle. Parallel edges and self-loops count as cycles.
#[must_use]
pub fn is_cyclic_undirected_bfs(adj: &AdjacencyList, start: VertexId) -> bool {
    if adj.is_empty() {
        return false;
    }
    let mut visited = vec![false; adj.vertex_count()];
    component_has_cycle_bfs(adj, start, &mut visited)
}

/// Detects a cycle in the undirected component containing `start`, using DFS.
///
/// Gives the same answer as [`is_cyclic_undirected_bfs`] on every input.
#[must_use]
pub fn is_cyclic_undirected_dfs(adj: &AdjacencyList, start: VertexId) -> bool {
    if adj.is_empty() {
        return false;
    }
    let mut visited = vec![false; adj.vertex_count()];
    component_has_cycle_dfs(adj, start, &mut visited)
}

/// Returns true if any component of the undirected graph has a cycle.
///
/// Each component is searched breadth-first.
#[must_use]
pub fn has_undirected_cycle(adj: &AdjacencyList) -> bool {
    any_component_has_cycle(adj, component_has_cycle_bfs)
}

/// Depth-first counterpart of [`has_undirected_cycle`].
#[must_use]
pub fn has_undirected_cycle_dfs(adj: &AdjacencyList) -> bool {
    any_component_has_cycle(adj, component_has_cycle_dfs)
}

fn any_component_has_cycle(
    adj: &AdjacencyList,
    component_has_cycle: fn(&AdjacencyList, VertexId, &mut [bool]) -> bool,
) -> bool {
    let mut visited = vec![false; adj.vertex_count()];
    for root in 0..adj.vertex_count() {
        if !visited[root] && component_has_cycle(adj, root, &mut visited) {
            tracing::debug!(root, "undirected cycle found");
            return true;
        }
    }
    false
}

fn component_has_cycle_bfs(adj: &AdjacencyList, start: VertexId, visited: &mut [bool]) -> bool {
    let mut queue: VecDeque<(VertexId, Option<VertexId>)> = VecDeque::new();
    visited[start] = true;
    queue.push_back((start, None));

    while let Some((vertex, parent)) = queue.pop_front() {
        for &neighbor in adj.neighbors(vertex) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back((neighbor, Some(vertex)));
            } else if Some(neighbor) != parent {
                return true;
            }
        }
    }
    false
}

fn component_has_cycle_dfs(adj: &AdjacencyList, start: VertexId, visited: &mut [bool]) -> bool {
    // (vertex, traversal parent, index of next neighbor)
    let mut stack: Vec<(VertexId, Option<VertexId>, usize)> = vec![(start, None, 0)];
    visited[start] = true;

    while let Some(frame) = stack.last_mut() {
        let (vertex, parent) = (frame.0, frame.1);
        let Some(&neighbor) = adj.neighbors(vertex).get(frame.2) else {
            stack.pop();
            continue;
        };
        frame.2 += 1;

        if !visited[neighbor] {
            visited[neighbor] = true;
            stack.push((neighbor, Some(vertex), 0));
        } else if Some(neighbor) != parent {
            return true;
        }
    }
    false
}

// ============================================================================
// Algorithm wrappers
// ============================================================================

/// Breadth-first traversal as a registry algorithm.
pub struct BfsAlgorithm {
    parameters: Vec<ParameterDef>,
}

impl BfsAlgorithm {
    /// Creates the wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: vec![start_parameter(), directed_parameter(false)],
        }
    }
}

impl Default for BfsAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for BfsAlgorithm {
    fn name(&self) -> &str {
        "bfs"
    }

    fn description(&self) -> &str {
        "Breadth-first visitation order covering every vertex"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        let params = params.resolve(&self.parameters)?;
        let start = start_vertex(&params, graph)?;
        let matrix = graph.to_adjacency_matrix(params.bool("directed")?);
        Ok(AlgorithmResult::Order {
            order: bfs_order(&matrix, start),
        })
    }
}

/// Depth-first traversal as a registry algorithm.
pub struct DfsAlgorithm {
    parameters: Vec<ParameterDef>,
}

impl DfsAlgorithm {
    /// Creates the wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: vec![start_parameter(), directed_parameter(false)],
        }
    }
}

impl Default for DfsAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for DfsAlgorithm {
    fn name(&self) -> &str {
        "dfs"
    }

    fn description(&self) -> &str {
        "Depth-first pre-order covering every vertex"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        let params = params.resolve(&self.parameters)?;
        let start = start_vertex(&params, graph)?;
        let matrix = graph.to_adjacency_matrix(params.bool("directed")?);
        Ok(AlgorithmResult::Order {
            order: dfs_order(&matrix, start),
        })
    }
}

const CYCLE_STRATEGIES: &[&str] = &["bfs", "dfs"];

/// Undirected cycle detection as a registry algorithm.
///
/// With a `start` vertex only that vertex's component is examined; without
/// one, the whole graph is. `strategy` picks the search in both cases.
pub struct CycleDetectionAlgorithm {
    parameters: Vec<ParameterDef>,
}

impl CycleDetectionAlgorithm {
    /// Creates the wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: vec![
                ParameterDef::optional(
                    "start",
                    "Limit the search to this vertex's component",
                    ParameterType::Int,
                ),
                strategy_parameter(CYCLE_STRATEGIES),
            ],
        }
    }
}

impl Default for CycleDetectionAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for CycleDetectionAlgorithm {
    fn name(&self) -> &str {
        "cycle_detection"
    }

    fn description(&self) -> &str {
        "Whether the undirected graph contains a cycle"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        let params = params.resolve(&self.parameters)?;
        let strategy = strategy(&params, CYCLE_STRATEGIES)?;
        let adj = graph.to_adjacency_list(false);

        let value = match params.vertex("start", graph.vertex_count())? {
            Some(start) if strategy == "dfs" => is_cyclic_undirected_dfs(&adj, start),
            Some(start) => is_cyclic_undirected_bfs(&adj, start),
            None if strategy == "dfs" => has_undirected_cycle_dfs(&adj),
            None => has_undirected_cycle(&adj),
        };
        Ok(AlgorithmResult::Flag { value })
    }
}
