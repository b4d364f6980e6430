//! # Arbor
//!
//! Classic graph algorithms over read-only graph representations.
//!
//! Pick the representation an algorithm is written against, or start from an
//! [`EdgeList`] and convert. Every algorithm is a plain function in
//! [`algorithms`]; the [`PluginRegistry`] runs the same algorithms by name
//! with typed [`Parameters`].
//!
//! | Algorithm | Input | Output |
//! | --------- | ----- | ------ |
//! | BFS, DFS | [`AdjacencyMatrix`] | visitation order |
//! | Cycle detection | [`AdjacencyList`] | `bool` |
//! | Dijkstra | [`WeightedAdjacencyList`] | distance array |
//! | Bellman-Ford | [`EdgeList`] | distance array or [`Error::NegativeCycleDetected`] |
//! | Floyd-Warshall | [`WeightMatrix`] | distance matrix |
//! | Kruskal, Prim | [`WeightedAdjacencyList`] | edge set and total weight |
//! | Topological sort | [`AdjacencyList`] | order, or [`Error::CycleDetected`] (Kahn) |
//!
//! Unreachable vertices have distance [`INFINITY`].
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor::{EdgeList, INFINITY, Parameters, PluginRegistry, algorithms};
//!
//! let graph = EdgeList::from_triples([(0, 1, 4), (0, 2, 1), (2, 1, 2), (3, 0, 7)]);
//!
//! // Call an algorithm directly
//! let distances = algorithms::dijkstra(&graph.to_weighted_adjacency_list(true), 0);
//! assert_eq!(distances, vec![0, 3, 1, INFINITY]);
//!
//! // Or run it by name
//! let registry = PluginRegistry::with_builtins();
//! let result = registry.run("bellman_ford", &graph, &Parameters::new().with("start", 0_i64))?;
//! assert_eq!(result.kind(), "distances");
//! # Ok::<(), arbor::Error>(())
//! ```

// Re-export the algorithms and the plugin layer
pub use arbor_adapters::plugins::algorithms;
pub use arbor_adapters::plugins::{
    Algorithm, AlgorithmResult, ParameterDef, ParameterType, ParameterValue, Parameters,
    PluginRegistry,
};

// Re-export graph representations
pub use arbor_core::graph::{
    AdjacencyList, AdjacencyMatrix, EdgeList, WeightMatrix, WeightedAdjacencyList,
};

// Re-export core types - you'll need these for weights, sentinels and errors
pub use arbor_common::types::{Edge, INFINITY, VertexId, Weight};
pub use arbor_common::utils::error::{Error, Result};
