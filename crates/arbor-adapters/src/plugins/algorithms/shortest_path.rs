//! Shortest path algorithms.
//!
//! - [`dijkstra`]: single source, non-negative weights, label-setting.
//! - [`bellman_ford`]: single source, negative weights allowed, detects
//!   negative cycles reachable from the source.
//! - [`floyd_warshall`]: all pairs, negative weights allowed.
//!
//! Distance arrays use [`INFINITY`] for unreachable vertices. Every sum that
//! could involve the sentinel is guarded, so an unreachable vertex never
//! produces a finite distance through overflow.

use std::collections::BinaryHeap;

use arbor_common::types::{INFINITY, VertexId, Weight, is_infinite, saturating_distance};
use arbor_common::utils::error::{Error, Result};
use arbor_core::graph::{EdgeList, WeightMatrix, WeightedAdjacencyList};

use super::MinScored;
use super::traits::{directed_parameter, start_parameter, start_vertex};
use crate::plugins::{Algorithm, AlgorithmResult, ParameterDef, Parameters};

// ============================================================================
// Dijkstra
// ============================================================================

/// Single-source shortest distances for graphs with non-negative weights.
///
/// A min-queue keyed by tentative distance starts with `(0, start)`. Popped
/// entries whose key is larger than the vertex's best known distance are
/// stale and skipped, which stands in for a decrease-key operation. Once a
/// vertex is popped with its current distance, that distance is final.
///
/// Negative weights are not detected and silently give wrong distances;
/// use [`bellman_ford`] for such graphs.
///
/// # Panics
///
/// Panics if `start` is out of range for a non-empty graph.
#[must_use]
pub fn dijkstra(adj: &WeightedAdjacencyList, start: VertexId) -> Vec<Weight> {
    let n = adj.vertex_count();
    let mut distances = vec![INFINITY; n];
    if n == 0 {
        return distances;
    }

    let mut heap = BinaryHeap::new();
    distances[start] = 0;
    heap.push(MinScored(0, start));
    let mut stale = 0usize;

    while let Some(MinScored(distance, vertex)) = heap.pop() {
        if distance > distances[vertex] {
            stale += 1;
            continue;
        }

        for &(neighbor, weight) in adj.neighbors(vertex) {
            let candidate = saturating_distance(distance, weight);
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                heap.push(MinScored(candidate, neighbor));
            }
        }
    }

    tracing::debug!(vertices = n, start, stale, "dijkstra complete");
    distances
}

/// Shortest path from `start` to `target` for non-negative weights.
///
/// Returns the path length and the vertices along it (both endpoints
/// included), or `None` if `target` is unreachable. The search stops as soon
/// as `target` is settled.
///
/// # Panics
///
/// Panics if `start` or `target` is out of range.
#[must_use]
pub fn dijkstra_path(
    adj: &WeightedAdjacencyList,
    start: VertexId,
    target: VertexId,
) -> Option<(Weight, Vec<VertexId>)> {
    let n = adj.vertex_count();
    let mut distances = vec![INFINITY; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    distances[start] = 0;
    heap.push(MinScored(0, start));

    while let Some(MinScored(distance, vertex)) = heap.pop() {
        if distance > distances[vertex] {
            continue;
        }
        if vertex == target {
            break;
        }

        for &(neighbor, weight) in adj.neighbors(vertex) {
            let candidate = saturating_distance(distance, weight);
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                predecessors[neighbor] = Some(vertex);
                heap.push(MinScored(candidate, neighbor));
            }
        }
    }

    if is_infinite(distances[target]) {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(previous) = predecessors[current] {
        path.push(previous);
        current = previous;
    }
    path.reverse();

    Some((distances[target], path))
}

// ============================================================================
// Bellman-Ford
// ============================================================================

/// Single-source shortest distances from vertex `0`, allowing negative
/// weights.
///
/// # Errors
///
/// Returns [`Error::NegativeCycleDetected`] if a negative-weight cycle is
/// reachable from vertex `0`.
pub fn bellman_ford(edges: &EdgeList) -> Result<Vec<Weight>> {
    bellman_ford_from(edges, 0)
}

/// Single-source shortest distances from `source`, allowing negative
/// weights.
///
/// All edges are relaxed in up to `n - 1` passes, which suffices because a
/// shortest simple path has at most `n - 1` edges. Edges leaving a vertex
/// still at [`INFINITY`] are skipped. A pass that changes nothing ends the
/// loop early. One further pass then checks whether any edge can still be
/// relaxed, which happens exactly when a negative cycle is reachable.
///
/// An empty graph yields an empty distance array.
///
/// # Errors
///
/// Returns [`Error::NegativeCycleDetected`] if a negative-weight cycle is
/// reachable from `source`. No distances are returned in that case.
///
/// # Panics
///
/// Panics if `source` is out of range for a non-empty graph.
pub fn bellman_ford_from(edges: &EdgeList, source: VertexId) -> Result<Vec<Weight>> {
    let n = edges.vertex_count();
    let mut distances = vec![INFINITY; n];
    if n == 0 {
        return Ok(distances);
    }
    distances[source] = 0;

    let mut passes = 0usize;
    for _ in 1..n {
        passes += 1;
        if !relax_all(edges, &mut distances) {
            break;
        }
    }
    tracing::trace!(passes, edges = edges.edge_count(), "bellman-ford relaxation finished");

    let still_relaxes = edges.edges().iter().any(|edge| {
        let from = distances[edge.source];
        !is_infinite(from) && saturating_distance(from, edge.weight) < distances[edge.destination]
    });
    if still_relaxes {
        tracing::warn!(source, "negative weight cycle reachable from source");
        return Err(Error::NegativeCycleDetected);
    }

    tracing::debug!(vertices = n, source, passes, "bellman-ford complete");
    Ok(distances)
}

/// Relaxes every edge once, returning true if any distance improved.
fn relax_all(edges: &EdgeList, distances: &mut [Weight]) -> bool {
    let mut changed = false;
    for edge in edges.edges() {
        let from = distances[edge.source];
        if is_infinite(from) {
            continue;
        }
        let candidate = saturating_distance(from, edge.weight);
        if candidate < distances[edge.destination] {
            distances[edge.destination] = candidate;
            changed = true;
        }
    }
    changed
}

// ============================================================================
// Floyd-Warshall
// ============================================================================

/// All-pairs shortest distances produced by [`floyd_warshall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloydWarshallResult {
    cost: Vec<Vec<Weight>>,
}

impl FloydWarshallResult {
    /// Returns the shortest distance `from -> to`, [`INFINITY`] if none.
    #[must_use]
    pub fn distance(&self, from: VertexId, to: VertexId) -> Weight {
        self.cost[from][to]
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.cost.len()
    }

    /// Returns the full distance matrix.
    #[must_use]
    pub fn matrix(&self) -> &[Vec<Weight>] {
        &self.cost
    }

    /// Consumes the result, returning the distance matrix.
    #[must_use]
    pub fn into_matrix(self) -> Vec<Vec<Weight>> {
        self.cost
    }

    /// Returns true if some vertex reaches itself with negative cost, which
    /// happens exactly when the graph has a negative cycle.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.cost.len()).any(|v| self.cost[v][v] < 0)
    }
}

/// All-pairs shortest distances.
///
/// For each intermediate vertex `k`, every pair `(i, j)` takes
/// `min(cost[i][j], cost[i][k] + cost[k][j])`. The update is skipped when
/// either half is [`INFINITY`].
///
/// Negative cycles do not cause a failure; they show up as negative entries
/// on the diagonal, see [`FloydWarshallResult::has_negative_cycle`].
#[must_use]
pub fn floyd_warshall(matrix: &WeightMatrix) -> FloydWarshallResult {
    let n = matrix.vertex_count();
    let mut cost = matrix.to_rows();

    for k in 0..n {
        for i in 0..n {
            if is_infinite(cost[i][k]) {
                continue;
            }
            for j in 0..n {
                let (through_k, onward) = (cost[i][k], cost[k][j]);
                if is_infinite(onward) {
                    continue;
                }
                let candidate = through_k.saturating_add(onward);
                if candidate < cost[i][j] {
                    cost[i][j] = candidate;
                }
            }
        }
    }

    let result = FloydWarshallResult { cost };
    if result.has_negative_cycle() {
        tracing::warn!(vertices = n, "floyd-warshall found a negative cycle");
    } else {
        tracing::debug!(vertices = n, "floyd-warshall complete");
    }
    result
}

// ============================================================================
// Algorithm wrappers
// ============================================================================

/// Dijkstra's algorithm as a registry algorithm.
///
/// Unlike [`dijkstra`] itself, the wrapper rejects graphs with negative
/// weights.
pub struct DijkstraAlgorithm {
    parameters: Vec<ParameterDef>,
}

impl DijkstraAlgorithm {
    /// Creates the wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: vec![start_parameter(), directed_parameter(true)],
        }
    }
}

impl Default for DijkstraAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for DijkstraAlgorithm {
    fn name(&self) -> &str {
        "dijkstra"
    }

    fn description(&self) -> &str {
        "Single-source shortest distances, non-negative weights"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        let params = params.resolve(&self.parameters)?;
        let source = start_vertex(&params, graph)?;
        if graph.has_negative_weight() {
            return Err(Error::invalid_parameter(
                "graph",
                "dijkstra requires non-negative edge weights, use bellman_ford",
            ));
        }
        let adj = graph.to_weighted_adjacency_list(params.bool("directed")?);
        Ok(AlgorithmResult::Distances {
            source,
            distances: dijkstra(&adj, source),
        })
    }
}

/// Bellman-Ford as a registry algorithm. Edges are read as directed.
pub struct BellmanFordAlgorithm {
    parameters: Vec<ParameterDef>,
}

impl BellmanFordAlgorithm {
    /// Creates the wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: vec![start_parameter()],
        }
    }
}

impl Default for BellmanFordAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for BellmanFordAlgorithm {
    fn name(&self) -> &str {
        "bellman_ford"
    }

    fn description(&self) -> &str {
        "Single-source shortest distances with negative cycle detection"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        let params = params.resolve(&self.parameters)?;
        let source = start_vertex(&params, graph)?;
        Ok(AlgorithmResult::Distances {
            source,
            distances: bellman_ford_from(graph, source)?,
        })
    }
}

/// Floyd-Warshall as a registry algorithm.
pub struct FloydWarshallAlgorithm {
    parameters: Vec<ParameterDef>,
}

impl FloydWarshallAlgorithm {
    /// Creates the wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: vec![directed_parameter(true)],
        }
    }
}

impl Default for FloydWarshallAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for FloydWarshallAlgorithm {
    fn name(&self) -> &str {
        "floyd_warshall"
    }

    fn description(&self) -> &str {
        "All-pairs shortest distances"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        let params = params.resolve(&self.parameters)?;
        let result = floyd_warshall(&graph.to_weight_matrix(params.bool("directed")?));
        let negative_cycle = result.has_negative_cycle();
        Ok(AlgorithmResult::DistanceMatrix {
            matrix: result.into_matrix(),
            negative_cycle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_common::Edge;

    fn sample_adjacency() -> WeightedAdjacencyList {
        WeightedAdjacencyList::from_rows(vec![
            vec![(1, 4), (2, 4)],
            vec![(0, 4), (2, 2)],
            vec![(3, 3), (4, 1), (5, 6)],
            vec![(2, 3), (5, 2)],
            vec![(2, 1), (5, 3)],
            vec![(3, 2), (4, 3)],
            vec![],
        ])
    }

    #[test]
    fn test_dijkstra_distances() {
        let distances = dijkstra(&sample_adjacency(), 0);
        assert_eq!(distances, vec![0, 4, 4, 7, 5, 8, INFINITY]);
    }

    #[test]
    fn test_dijkstra_source_is_zero() {
        let adj = sample_adjacency();
        for start in 0..adj.vertex_count() {
            assert_eq!(dijkstra(&adj, start)[start], 0);
        }
    }

    #[test]
    fn test_dijkstra_empty_graph() {
        assert!(dijkstra(&WeightedAdjacencyList::default(), 0).is_empty());
    }

    #[test]
    fn test_dijkstra_huge_weights_do_not_wrap() {
        let adj = WeightedAdjacencyList::from_rows(vec![
            vec![(1, INFINITY - 1)],
            vec![(2, INFINITY - 1)],
            vec![],
        ]);
        let distances = dijkstra(&adj, 0);
        assert_eq!(distances[1], INFINITY - 1);
        assert_eq!(distances[2], INFINITY);
    }

    #[test]
    fn test_dijkstra_path() {
        let adj = sample_adjacency();

        assert_eq!(dijkstra_path(&adj, 0, 5), Some((8, vec![0, 2, 4, 5])));
        assert_eq!(dijkstra_path(&adj, 3, 3), Some((0, vec![3])));
        assert_eq!(dijkstra_path(&adj, 0, 6), None);
    }

    #[test]
    fn test_bellman_ford_with_negative_edges() {
        let edges = EdgeList::from_triples([
            (3, 2, 6),
            (5, 3, 1),
            (0, 1, 5),
            (1, 5, -3),
            (1, 2, -2),
            (3, 4, -2),
            (2, 4, 3),
        ]);
        assert_eq!(bellman_ford(&edges), Ok(vec![0, 5, 3, 3, 1, 2]));
    }

    #[test]
    fn test_bellman_ford_detects_negative_cycle() {
        let edges = EdgeList::from_triples([(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
        assert_eq!(bellman_ford(&edges), Err(Error::NegativeCycleDetected));

        let edges = EdgeList::from_triples([
            (3, 2, 6),
            (5, 3, 1),
            (0, 1, 5),
            (1, 5, -3),
            (2, 1, -5),
            (3, 4, -2),
            (2, 4, 3),
        ]);
        assert_eq!(bellman_ford(&edges), Err(Error::NegativeCycleDetected));
    }

    #[test]
    fn test_bellman_ford_ignores_unreachable_negative_cycle() {
        // Cycle 2 -> 3 -> 2 of weight -2 is not reachable from 0
        let edges = EdgeList::new(
            4,
            [Edge::new(0, 1, 7), Edge::new(2, 3, -1), Edge::new(3, 2, -1)],
        );
        assert_eq!(bellman_ford(&edges), Ok(vec![0, 7, INFINITY, INFINITY]));
    }

    #[test]
    fn test_bellman_ford_from_other_source() {
        let edges = EdgeList::from_triples([(0, 1, 2), (1, 2, 2), (2, 0, 2)]);
        assert_eq!(bellman_ford_from(&edges, 1), Ok(vec![4, 0, 2]));
    }

    #[test]
    fn test_bellman_ford_edge_cases() {
        assert_eq!(bellman_ford(&EdgeList::default()), Ok(vec![]));
        assert_eq!(bellman_ford(&EdgeList::new(1, [])), Ok(vec![0]));
    }

    #[test]
    fn test_floyd_warshall() {
        let matrix = WeightMatrix::from_rows(vec![
            vec![0, 3, INFINITY, 7],
            vec![8, 0, 2, INFINITY],
            vec![5, INFINITY, 0, 1],
            vec![2, INFINITY, INFINITY, 0],
        ]);
        let result = floyd_warshall(&matrix);

        assert_eq!(
            result.matrix(),
            &[
                vec![0, 3, 5, 6],
                vec![5, 0, 2, 3],
                vec![3, 6, 0, 1],
                vec![2, 5, 7, 0],
            ]
        );
        assert_eq!(result.distance(3, 2), 7);
        assert!(!result.has_negative_cycle());
    }

    #[test]
    fn test_floyd_warshall_keeps_unreachable_infinite() {
        let edges = EdgeList::new(3, [Edge::new(0, 1, -4)]);
        let result = floyd_warshall(&edges.to_weight_matrix(true));

        assert_eq!(result.distance(0, 1), -4);
        assert_eq!(result.distance(1, 0), INFINITY);
        assert_eq!(result.distance(2, 0), INFINITY);
        assert_eq!(result.distance(0, 2), INFINITY);
    }

    #[test]
    fn test_floyd_warshall_flags_negative_cycle() {
        let edges = EdgeList::from_triples([(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
        let result = floyd_warshall(&edges.to_weight_matrix(true));

        assert!(result.has_negative_cycle());
        assert_eq!(result.vertex_count(), 3);
    }

    #[test]
    fn test_single_source_wrappers() {
        let graph = EdgeList::from_triples([(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)]);
        let expected = Ok(AlgorithmResult::Distances {
            source: 0,
            distances: vec![0, 3, 1, 4],
        });

        assert_eq!(DijkstraAlgorithm::new().execute(&graph, &Parameters::new()), expected);
        assert_eq!(BellmanFordAlgorithm::new().execute(&graph, &Parameters::new()), expected);

        let from_three = Parameters::new().with("start", 3_i64).with("directed", false);
        assert_eq!(
            DijkstraAlgorithm::new().execute(&graph, &from_three),
            Ok(AlgorithmResult::Distances {
                source: 3,
                distances: vec![4, 1, 3, 0],
            })
        );
    }

    #[test]
    fn test_wrappers_surface_negative_weights() {
        let graph = EdgeList::from_triples([(0, 1, 1), (1, 2, -3), (2, 0, 1)]);

        assert!(matches!(
            DijkstraAlgorithm::new().execute(&graph, &Parameters::new()),
            Err(Error::InvalidParameter { .. })
        ));
        assert_eq!(
            BellmanFordAlgorithm::new().execute(&graph, &Parameters::new()),
            Err(Error::NegativeCycleDetected)
        );

        let Ok(AlgorithmResult::DistanceMatrix { negative_cycle, .. }) =
            FloydWarshallAlgorithm::new().execute(&graph, &Parameters::new())
        else {
            panic!("expected a distance matrix");
        };
        assert!(negative_cycle);
    }

    #[test]
    fn test_floyd_warshall_wrapper_undirected() {
        let graph = EdgeList::new(3, [Edge::new(0, 1, 2)]);
        let params = Parameters::new().with("directed", false);

        assert_eq!(
            FloydWarshallAlgorithm::new().execute(&graph, &params),
            Ok(AlgorithmResult::DistanceMatrix {
                matrix: vec![
                    vec![0, 2, INFINITY],
                    vec![2, 0, INFINITY],
                    vec![INFINITY, INFINITY, 0],
                ],
                negative_cycle: false,
            })
        );
    }
}
