//! Property tests for the graph algorithms.

use arbor_adapters::plugins::algorithms::{
    DisjointSet, bellman_ford_from, bfs_order, connected_component_count, connected_components,
    dfs_order, dijkstra, floyd_warshall, is_cyclic_undirected_bfs, is_cyclic_undirected_dfs,
    kruskal, prim, topological_sort_dfs, topological_sort_kahn,
};
use arbor_common::Edge;
use arbor_common::types::{VertexId, Weight};
use arbor_common::utils::error::Error;
use arbor_core::graph::{AdjacencyList, EdgeList};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary edge lists, self-loops and parallel edges included.
fn arb_graph(max_vertices: usize, max_weight: Weight) -> impl Strategy<Value = EdgeList> {
    (1..=max_vertices).prop_flat_map(move |n| {
        prop::collection::vec((0..n, 0..n, 0..=max_weight), 0..=n * 3)
            .prop_map(move |triples| EdgeList::new(n, triples.into_iter().map(Edge::from)))
    })
}

/// Connected graphs: a random spanning tree plus extra edges, no self-loops.
fn arb_connected_graph(max_vertices: usize, extra: usize) -> impl Strategy<Value = EdgeList> {
    (2..=max_vertices).prop_flat_map(move |n| {
        let tree = (1..n)
            .map(|child| (0..child, Just(child), -5..=20_i64))
            .collect::<Vec<_>>();
        let extras = prop::collection::vec((0..n, 0..n, -5..=20_i64), 0..=extra);
        (tree, extras).prop_map(move |(tree, extras)| {
            let edges = tree
                .into_iter()
                .chain(extras.into_iter().filter(|&(u, v, _)| u != v))
                .map(Edge::from);
            EdgeList::new(n, edges)
        })
    })
}

/// DAGs: every edge goes from a lower to a higher index, then the vertices
/// are relabelled by a random permutation.
fn arb_dag(max_vertices: usize) -> impl Strategy<Value = AdjacencyList> {
    (1..=max_vertices).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..=n * 2);
        let permutation = Just((0..n).collect::<Vec<_>>()).prop_shuffle();
        (edges, permutation).prop_map(move |(edges, permutation)| {
            let mut rows = vec![Vec::new(); n];
            for (a, b) in edges {
                if a != b {
                    let (low, high) = (a.min(b), a.max(b));
                    rows[permutation[low]].push(permutation[high]);
                }
            }
            AdjacencyList::from_rows(rows)
        })
    })
}

fn assert_topological(adj: &AdjacencyList, order: &[VertexId]) -> Result<(), TestCaseError> {
    let mut position = vec![usize::MAX; adj.vertex_count()];
    for (index, &vertex) in order.iter().enumerate() {
        prop_assert_eq!(position[vertex], usize::MAX, "vertex {} emitted twice", vertex);
        position[vertex] = index;
    }
    prop_assert_eq!(order.len(), adj.vertex_count());
    for (vertex, neighbors) in adj.iter() {
        for &neighbor in neighbors {
            prop_assert!(position[vertex] < position[neighbor]);
        }
    }
    Ok(())
}

/// Minimum spanning tree weight by trying every (n - 1)-edge subset.
fn brute_force_mst_weight(graph: &EdgeList) -> Option<Weight> {
    let n = graph.vertex_count();
    let edges = graph.edges();
    let mut best: Option<Weight> = None;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != n - 1 {
            continue;
        }
        let mut sets = DisjointSet::new(n);
        let mut weight = 0;
        let mut acyclic = true;
        for (index, edge) in edges.iter().enumerate() {
            if mask & (1 << index) != 0 {
                acyclic &= sets.union(edge.source, edge.destination);
                weight += edge.weight;
            }
        }
        if acyclic {
            best = Some(best.map_or(weight, |b| b.min(weight)));
        }
    }
    best
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn traversals_visit_every_vertex_once(
        graph in arb_graph(24, 9),
        directed in any::<bool>(),
        seed in any::<usize>(),
    ) {
        let matrix = graph.to_adjacency_matrix(directed);
        let start = seed % graph.vertex_count();

        let mut bfs = bfs_order(&matrix, start);
        let mut dfs = dfs_order(&matrix, start);
        prop_assert_eq!(bfs[0], start);
        prop_assert_eq!(dfs[0], start);

        bfs.sort_unstable();
        dfs.sort_unstable();
        let all: Vec<VertexId> = (0..graph.vertex_count()).collect();
        prop_assert_eq!(&bfs, &all);
        prop_assert_eq!(&dfs, &all);
    }

    #[test]
    fn cycle_detectors_agree(graph in arb_graph(16, 1), seed in any::<usize>()) {
        let adj = graph.to_adjacency_list(false);
        let start = seed % graph.vertex_count();
        prop_assert_eq!(
            is_cyclic_undirected_bfs(&adj, start),
            is_cyclic_undirected_dfs(&adj, start)
        );
    }

    #[test]
    fn disjoint_set_unions(
        n in 1usize..40,
        pairs in prop::collection::vec((0usize..40, 0usize..40), 0..80),
    ) {
        let mut sets = DisjointSet::new(n);
        for (a, b) in pairs {
            let (a, b) = (a % n, b % n);
            let before = sets.set_count();
            let merged = sets.union(a, b);

            prop_assert!(sets.same(a, b));
            prop_assert_eq!(sets.set_count(), if merged { before - 1 } else { before });
            let root = sets.find(a);
            prop_assert_eq!(sets.find(root), root);
        }
    }

    #[test]
    fn dijkstra_agrees_with_bellman_ford(graph in arb_graph(20, 50), seed in any::<usize>()) {
        let source = seed % graph.vertex_count();
        let distances = dijkstra(&graph.to_weighted_adjacency_list(true), source);

        prop_assert_eq!(distances[source], 0);
        prop_assert_eq!(Ok(distances), bellman_ford_from(&graph, source));
    }

    #[test]
    fn floyd_warshall_rows_match_dijkstra(graph in arb_graph(12, 30)) {
        let all_pairs = floyd_warshall(&graph.to_weight_matrix(true));
        let adj = graph.to_weighted_adjacency_list(true);

        prop_assert!(!all_pairs.has_negative_cycle());
        for source in 0..graph.vertex_count() {
            prop_assert_eq!(&all_pairs.matrix()[source], &dijkstra(&adj, source));
        }
    }

    #[test]
    fn floyd_warshall_diagonal_flags_negative_cycles(graph in arb_graph(8, 6), shift in 0i64..4) {
        let shifted = EdgeList::new(
            graph.vertex_count(),
            graph.edges().iter().map(|e| Edge::new(e.source, e.destination, e.weight - shift)),
        );
        let all_pairs = floyd_warshall(&shifted.to_weight_matrix(true));
        let bellman_ford_fails = (0..shifted.vertex_count())
            .any(|source| bellman_ford_from(&shifted, source) == Err(Error::NegativeCycleDetected));

        prop_assert_eq!(all_pairs.has_negative_cycle(), bellman_ford_fails);
    }

    #[test]
    fn kruskal_is_minimal(graph in arb_connected_graph(5, 3)) {
        let tree = kruskal(&graph.to_weighted_adjacency_list(false));

        prop_assert!(tree.is_spanning_tree(graph.vertex_count()));
        prop_assert_eq!(Some(tree.total_weight), brute_force_mst_weight(&graph));
    }

    #[test]
    fn prim_and_kruskal_agree(graph in arb_connected_graph(30, 40), seed in any::<usize>()) {
        let adj = graph.to_weighted_adjacency_list(false);
        let start = seed % graph.vertex_count();
        let by_prim = prim(&adj, start);

        prop_assert!(by_prim.is_spanning_tree(graph.vertex_count()));
        prop_assert_eq!(by_prim.total_weight, kruskal(&adj).total_weight);
    }

    #[test]
    fn forest_has_one_tree_per_component(graph in arb_graph(20, 9)) {
        let adj = graph.to_weighted_adjacency_list(false);
        let unweighted = adj.to_unweighted();
        let labels = connected_components(&unweighted);
        let count = connected_component_count(&unweighted);

        prop_assert_eq!(labels.iter().max().map_or(0, |&m| m + 1), count);
        let forest = kruskal(&adj);
        prop_assert_eq!(forest.tree_count, count);
        prop_assert_eq!(forest.edge_count() + count, graph.vertex_count());
    }

    #[test]
    fn topological_sorts_respect_edges(dag in arb_dag(25)) {
        let kahn = topological_sort_kahn(&dag);
        prop_assert!(kahn.is_ok());
        assert_topological(&dag, &kahn.unwrap_or_default())?;
        assert_topological(&dag, &topological_sort_dfs(&dag))?;
    }
}

#[test]
fn kahn_fails_on_three_cycle() {
    let cycle = AdjacencyList::from_rows(vec![vec![1], vec![2], vec![0]]);
    assert!(matches!(
        topological_sort_kahn(&cycle),
        Err(Error::CycleDetected { total: 3, .. })
    ));
}

#[test]
fn bellman_ford_fails_on_negative_three_cycle() {
    let graph = EdgeList::from_triples([(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
    assert_eq!(bellman_ford_from(&graph, 0), Err(Error::NegativeCycleDetected));
}
