//! Graph representations.
//!
//! | Representation | Entry | Used by |
//! |----------------|-------|---------|
//! | [`AdjacencyMatrix`] | `1` = edge, anything else = none | BFS, DFS |
//! | [`WeightMatrix`] | weight, [`INFINITY`](arbor_common::INFINITY) = none | Floyd-Warshall |
//! | [`AdjacencyList`] | neighbor index | cycle detection, topological sort |
//! | [`WeightedAdjacencyList`] | `(neighbor, weight)` | Dijkstra, Kruskal, Prim |
//! | [`EdgeList`] | `(source, destination, weight)` | Bellman-Ford |
//!
//! Neighbor order is kept exactly as supplied. It only influences iteration
//! order and tie-breaking, never correctness.

mod adjacency;
mod edge_list;
mod matrix;

pub use adjacency::{AdjacencyList, WeightedAdjacencyList};
pub use edge_list::EdgeList;
pub use matrix::{AdjacencyMatrix, WeightMatrix};
