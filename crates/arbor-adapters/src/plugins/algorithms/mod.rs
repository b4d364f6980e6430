//! Graph algorithms for Arbor.
//!
//! Each algorithm takes the graph representation it is naturally written
//! against; [`EdgeList`](arbor_core::graph::EdgeList) converts to all of
//! them.
//!
//! ## Algorithm Categories
//!
//! - [`traversal`] - BFS, DFS with visitor closures, undirected cycle detection
//! - [`components`] - Union-find, connected components, topological sort
//! - [`shortest_path`] - Dijkstra, Bellman-Ford, Floyd-Warshall
//! - [`mst`] - Kruskal, Prim
//!
//! ## Usage
//!
//! ```
//! use arbor_adapters::plugins::algorithms::{bfs_order, dijkstra, kruskal};
//! use arbor_core::graph::EdgeList;
//!
//! let graph = EdgeList::from_triples([(0, 1, 4), (0, 2, 1), (2, 1, 2)]);
//!
//! let order = bfs_order(&graph.to_adjacency_matrix(false), 0);
//! assert_eq!(order, vec![0, 1, 2]);
//!
//! let distances = dijkstra(&graph.to_weighted_adjacency_list(true), 0);
//! assert_eq!(distances, vec![0, 3, 1]);
//!
//! let tree = kruskal(&graph.to_weighted_adjacency_list(false));
//! assert_eq!(tree.total_weight, 3);
//! ```

mod components;
mod mst;
mod shortest_path;
mod traits;
mod traversal;

// Core traits
pub use traits::{DistanceMap, MinScored};

// Traversal algorithms
pub use traversal::{
    bfs, bfs_order, dfs, dfs_order, has_undirected_cycle, has_undirected_cycle_dfs,
    is_cyclic_undirected_bfs, is_cyclic_undirected_dfs,
};

// Component algorithms
pub use components::{
    DisjointSet, connected_component_count, connected_components, is_dag, topological_sort_dfs,
    topological_sort_kahn,
};

// Shortest path algorithms
pub use shortest_path::{
    FloydWarshallResult, bellman_ford, bellman_ford_from, dijkstra, dijkstra_path, floyd_warshall,
};

// Minimum Spanning Tree algorithms
pub use mst::{MstResult, kruskal, prim};

// Algorithm wrappers (registry integration)
pub use components::{ConnectedComponentsAlgorithm, TopologicalSortAlgorithm};
pub use mst::{KruskalAlgorithm, PrimAlgorithm};
pub use shortest_path::{BellmanFordAlgorithm, DijkstraAlgorithm, FloydWarshallAlgorithm};
pub use traversal::{BfsAlgorithm, CycleDetectionAlgorithm, DfsAlgorithm};
