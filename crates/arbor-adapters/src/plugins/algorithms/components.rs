//! Union-find, connected components, and topological ordering.

use std::collections::VecDeque;

use arbor_common::types::VertexId;
use arbor_common::utils::error::{Error, Result};
use arbor_core::graph::{AdjacencyList, EdgeList};

use super::traits::{strategy, strategy_parameter};
use crate::plugins::{Algorithm, AlgorithmResult, ParameterDef, Parameters};

// ============================================================================
// Union-Find (Disjoint Set Union)
// ============================================================================

/// Union-find over `0..n` with path compression and union by rank.
///
/// Any sequence of operations runs in near-constant amortized time per
/// operation. Indices must be `< n`; anything else panics on slice access.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    rank: Vec<u32>,
    sets: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the representative of `x`'s set.
    ///
    /// Every node on the path from `x` is re-pointed directly at the root.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v`.
    ///
    /// The lower-rank root goes under the higher-rank one. On equal rank,
    /// `v`'s root goes under `u`'s root and that root's rank grows by one.
    /// Returns true if two different sets were merged.
    pub fn union(&mut self, u: VertexId, v: VertexId) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);
        if root_u == root_v {
            return false;
        }

        match self.rank[root_u].cmp(&self.rank[root_v]) {
            std::cmp::Ordering::Less => self.parent[root_u] = root_v,
            std::cmp::Ordering::Greater => self.parent[root_v] = root_u,
            std::cmp::Ordering::Equal => {
                self.parent[root_v] = root_u;
                self.rank[root_u] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Returns true if `u` and `v` are in the same set.
    pub fn same(&mut self, u: VertexId, v: VertexId) -> bool {
        self.find(u) == self.find(v)
    }
}

// ============================================================================
// Connected Components
// ============================================================================

/// Labels every vertex with its connected component, treating edges as
/// undirected.
///
/// Labels are dense (`0..count`) and assigned in order of each component's
/// lowest vertex index.
#[must_use]
pub fn connected_components(adj: &AdjacencyList) -> Vec<usize> {
    let n = adj.vertex_count();
    let mut sets = DisjointSet::new(n);
    for (vertex, neighbors) in adj.iter() {
        for &neighbor in neighbors {
            sets.union(vertex, neighbor);
        }
    }

    let mut label_of_root = vec![usize::MAX; n];
    let mut next_label = 0;
    let labels: Vec<usize> = (0..n)
        .map(|vertex| {
            let root = sets.find(vertex);
            if label_of_root[root] == usize::MAX {
                label_of_root[root] = next_label;
                next_label += 1;
            }
            label_of_root[root]
        })
        .collect();

    tracing::debug!(vertices = n, components = next_label, "connected components labelled");
    labels
}

/// Returns the number of connected components, treating edges as undirected.
#[must_use]
pub fn connected_component_count(adj: &AdjacencyList) -> usize {
    let mut sets = DisjointSet::new(adj.vertex_count());
    for (vertex, neighbors) in adj.iter() {
        for &neighbor in neighbors {
            sets.union(vertex, neighbor);
        }
    }
    sets.set_count()
}

// ============================================================================
// Topological Sort
// ============================================================================

/// Topological order by depth-first finishing times.
///
/// Every vertex is pushed onto a stack once all of its descendants have
/// been pushed; the order is that stack read from the top. Roots are taken
/// in index order so disconnected parts are all covered.
///
/// The input must be acyclic. No cycle check is made and a cyclic graph
/// yields an arbitrary order; use [`topological_sort_kahn`] when the graph
/// is untrusted.
#[must_use]
pub fn topological_sort_dfs(adj: &AdjacencyList) -> Vec<VertexId> {
    let n = adj.vertex_count();
    let mut visited = vec![false; n];
    let mut finished = Vec::with_capacity(n);
    // (vertex, index of next neighbor)
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            match adj.neighbors(vertex).get(frame.1) {
                Some(&neighbor) => {
                    frame.1 += 1;
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        stack.push((neighbor, 0));
                    }
                }
                None => {
                    finished.push(vertex);
                    stack.pop();
                }
            }
        }
    }

    finished.reverse();
    finished
}

/// Topological order by Kahn's algorithm.
///
/// Vertices with in-degree zero are queued in index order; each dequeued
/// vertex is emitted and its out-edges removed, queueing any neighbor whose
/// in-degree drops to zero.
///
/// # Errors
///
/// Returns [`Error::CycleDetected`] if fewer than `n` vertices could be
/// emitted. No partial order is returned.
pub fn topological_sort_kahn(adj: &AdjacencyList) -> Result<Vec<VertexId>> {
    let n = adj.vertex_count();
    let mut in_degree = adj.in_degrees();

    let mut queue: VecDeque<VertexId> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        for &neighbor in adj.neighbors(vertex) {
            in_degree[neighbor] -= 1;
            if in_degree[neighbor] == 0 {
                queue.push_back(neighbor);
            }
        }
    }

    if order.len() != n {
        tracing::warn!(emitted = order.len(), total = n, "topological sort stalled on a cycle");
        return Err(Error::CycleDetected {
            emitted: order.len(),
            total: n,
        });
    }
    Ok(order)
}

/// Returns true if the directed graph has no cycle.
#[must_use]
pub fn is_dag(adj: &AdjacencyList) -> bool {
    topological_sort_kahn(adj).is_ok()
}

// ============================================================================
// Algorithm wrappers
// ============================================================================

const NO_PARAMETERS: &[ParameterDef] = &[];

/// Connected component labelling as a registry algorithm.
///
/// Edges are read as undirected.
#[derive(Default)]
pub struct ConnectedComponentsAlgorithm;

impl Algorithm for ConnectedComponentsAlgorithm {
    fn name(&self) -> &str {
        "connected_components"
    }

    fn description(&self) -> &str {
        "Component label per vertex, edges read as undirected"
    }

    fn parameters(&self) -> &[ParameterDef] {
        NO_PARAMETERS
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        params.resolve(self.parameters())?;
        let labels = connected_components(&graph.to_adjacency_list(false));
        let count = labels.iter().max().map_or(0, |&max| max + 1);
        Ok(AlgorithmResult::Components { labels, count })
    }
}

const TOPOLOGICAL_STRATEGIES: &[&str] = &["kahn", "dfs"];

/// Topological sort as a registry algorithm.
///
/// Edges are read as directed. The `kahn` strategy fails on a cycle; the
/// `dfs` strategy assumes the graph is acyclic.
pub struct TopologicalSortAlgorithm {
    parameters: Vec<ParameterDef>,
}

impl TopologicalSortAlgorithm {
    /// Creates the wrapper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parameters: vec![strategy_parameter(TOPOLOGICAL_STRATEGIES)],
        }
    }
}

impl Default for TopologicalSortAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for TopologicalSortAlgorithm {
    fn name(&self) -> &str {
        "topological_sort"
    }

    fn description(&self) -> &str {
        "Order of a DAG in which every edge points forward"
    }

    fn parameters(&self) -> &[ParameterDef] {
        &self.parameters
    }

    fn execute(&self, graph: &EdgeList, params: &Parameters) -> Result<AlgorithmResult> {
        let params = params.resolve(&self.parameters)?;
        let adj = graph.to_adjacency_list(true);
        let order = match strategy(&params, TOPOLOGICAL_STRATEGIES)? {
            "dfs" => topological_sort_dfs(&adj),
            _ => topological_sort_kahn(&adj)?,
        };
        Ok(AlgorithmResult::Order { order })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_common::types::Edge;

    fn position(order: &[VertexId], vertex: VertexId) -> usize {
        order.iter().position(|&v| v == vertex).unwrap()
    }

    fn assert_topological(adj: &AdjacencyList, order: &[VertexId]) {
        assert_eq!(order.len(), adj.vertex_count());
        for (vertex, neighbors) in adj.iter() {
            for &neighbor in neighbors {
                assert!(
                    position(order, vertex) < position(order, neighbor),
                    "{vertex} must precede {neighbor} in {order:?}"
                );
            }
        }
    }

    fn diamond() -> AdjacencyList {
        AdjacencyList::from_rows(vec![vec![1, 2], vec![3], vec![3], vec![]])
    }

    #[test]
    fn test_disjoint_set_union_and_find() {
        let mut sets = DisjointSet::new(8);
        assert!(sets.union(1, 2));
        assert!(sets.union(2, 3));
        assert!(sets.union(4, 5));
        assert!(sets.union(6, 7));
        assert!(sets.union(5, 6));

        assert!(sets.same(1, 3));
        assert!(sets.same(4, 7));
        assert!(!sets.same(3, 7));
        assert!(!sets.same(0, 1));
        assert_eq!(sets.set_count(), 3);
    }

    #[test]
    fn test_disjoint_set_redundant_union_is_noop() {
        let mut sets = DisjointSet::new(3);
        assert!(sets.union(0, 1));
        assert!(!sets.union(1, 0));
        assert_eq!(sets.set_count(), 2);
    }

    #[test]
    fn test_disjoint_set_rank_rules() {
        let mut sets = DisjointSet::new(4);

        // Equal ranks: v's root goes under u's root, which gains one rank
        sets.union(0, 1);
        assert_eq!(sets.parent[1], 0);
        assert_eq!(sets.rank[0], 1);

        // Lower rank goes under higher rank, ranks unchanged
        sets.union(2, 0);
        assert_eq!(sets.parent[2], 0);
        assert_eq!(sets.rank[0], 1);
        assert_eq!(sets.rank[2], 0);
    }

    #[test]
    fn test_disjoint_set_path_compression() {
        let mut sets = DisjointSet::new(5);
        // Build the chain 4 -> 3 -> 2 -> 1 -> 0 by hand
        sets.parent = vec![0, 0, 1, 2, 3];

        assert_eq!(sets.find(4), 0);
        assert!(sets.parent.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_disjoint_set_find_is_idempotent() {
        let mut sets = DisjointSet::new(6);
        sets.union(0, 5);
        sets.union(3, 5);
        let root = sets.find(3);
        assert_eq!(sets.find(root), root);
        assert_eq!(sets.find(3), root);
    }

    #[test]
    fn test_connected_components_labels() {
        let adj = AdjacencyList::from_rows(vec![vec![1], vec![0], vec![], vec![4], vec![3]]);

        assert_eq!(connected_components(&adj), vec![0, 0, 1, 2, 2]);
        assert_eq!(connected_component_count(&adj), 3);
    }

    #[test]
    fn test_connected_components_ignore_direction() {
        // 2 -> 0 only; still one component with 0
        let adj = AdjacencyList::from_rows(vec![vec![], vec![], vec![0]]);

        assert_eq!(connected_components(&adj), vec![0, 1, 0]);
        assert_eq!(connected_component_count(&adj), 2);
    }

    #[test]
    fn test_kahn_diamond() {
        let adj = diamond();
        let order = topological_sort_kahn(&adj).unwrap();

        assert_eq!(order, vec![0, 1, 2, 3]);
        assert_topological(&adj, &order);
    }

    #[test]
    fn test_kahn_detects_cycle() {
        let adj = AdjacencyList::from_rows(vec![vec![1], vec![2], vec![0]]);

        assert_eq!(
            topological_sort_kahn(&adj),
            Err(Error::CycleDetected {
                emitted: 0,
                total: 3
            })
        );
        assert!(!is_dag(&adj));
    }

    #[test]
    fn test_kahn_reports_partial_progress_before_cycle() {
        // 0 -> 1 -> 2 -> 1
        let adj = AdjacencyList::from_rows(vec![vec![1], vec![2], vec![1]]);

        assert_eq!(
            topological_sort_kahn(&adj),
            Err(Error::CycleDetected {
                emitted: 1,
                total: 3
            })
        );
    }

    #[test]
    fn test_dfs_order_diamond() {
        let adj = diamond();
        let order = topological_sort_dfs(&adj);

        assert_eq!(order, vec![0, 2, 1, 3]);
        assert_topological(&adj, &order);
    }

    #[test]
    fn test_dfs_order_covers_disconnected_parts() {
        // 5 -> 3 -> 2 -> 4, 0 -> 1 -> 5, 1 -> 2
        let adj = AdjacencyList::from_rows(vec![
            vec![1],
            vec![5, 2],
            vec![4],
            vec![2],
            vec![],
            vec![3],
            vec![],
        ]);
        let order = topological_sort_dfs(&adj);

        assert_topological(&adj, &order);
        assert!(is_dag(&adj));
    }

    #[test]
    fn test_dfs_order_long_chain() {
        let n = 100_000;
        let adj =
            AdjacencyList::from_rows((0..n).map(|v| if v + 1 < n { vec![v + 1] } else { vec![] }));

        let order = topological_sort_dfs(&adj);
        assert_eq!(order, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_graph() {
        let adj = AdjacencyList::default();

        assert!(topological_sort_dfs(&adj).is_empty());
        assert_eq!(topological_sort_kahn(&adj), Ok(vec![]));
        assert!(connected_components(&adj).is_empty());
        assert_eq!(connected_component_count(&adj), 0);
    }

    #[test]
    fn test_components_wrapper() {
        let graph = EdgeList::new(5, [Edge::new(3, 1, 1), Edge::new(4, 2, 1)]);

        assert_eq!(
            ConnectedComponentsAlgorithm.execute(&graph, &Parameters::new()),
            Ok(AlgorithmResult::Components {
                labels: vec![0, 1, 2, 1, 2],
                count: 3
            })
        );
    }

    #[test]
    fn test_topological_sort_wrapper() {
        let diamond = EdgeList::from_triples([(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let algorithm = TopologicalSortAlgorithm::new();

        assert_eq!(
            algorithm.execute(&diamond, &Parameters::new()),
            Ok(AlgorithmResult::Order {
                order: vec![0, 1, 2, 3]
            })
        );
        assert_eq!(
            algorithm.execute(&diamond, &Parameters::new().with("strategy", "dfs")),
            Ok(AlgorithmResult::Order {
                order: vec![0, 2, 1, 3]
            })
        );

        let cycle = EdgeList::from_triples([(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
        assert_eq!(
            algorithm.execute(&cycle, &Parameters::new()),
            Err(Error::CycleDetected {
                emitted: 0,
                total: 3
            })
        );
    }
}
