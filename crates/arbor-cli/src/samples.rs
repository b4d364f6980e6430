//! Built-in sample graphs.

use arbor_common::types::{Edge, VertexId, Weight};
use arbor_core::graph::EdgeList;
use serde::Serialize;

/// A named graph compiled into the binary.
#[derive(Debug, Serialize)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    /// Whether edges are meant to be read as directed.
    pub directed: bool,
    pub vertex_count: usize,
    #[serde(skip)]
    edges: &'static [(VertexId, VertexId, Weight)],
}

impl Sample {
    /// Returns the number of edges as listed.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds the sample as an edge list.
    pub fn graph(&self) -> EdgeList {
        EdgeList::new(self.vertex_count, self.edges.iter().copied().map(Edge::from))
    }
}

/// Every built-in sample, in listing order.
pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "traversal",
        description: "Two components: a 6-vertex graph with cycles and an isolated pair",
        directed: false,
        vertex_count: 8,
        edges: &[
            (0, 1, 1),
            (0, 2, 1),
            (1, 3, 1),
            (1, 5, 1),
            (2, 4, 1),
            (3, 4, 1),
            (3, 5, 1),
            (6, 7, 1),
        ],
    },
    Sample {
        name: "cyclic",
        description: "Connected 7-vertex graph containing cycles",
        directed: false,
        vertex_count: 7,
        edges: &[
            (0, 1, 1),
            (0, 2, 1),
            (1, 4, 1),
            (2, 3, 1),
            (2, 5, 1),
            (4, 6, 1),
            (5, 6, 1),
        ],
    },
    Sample {
        name: "tree",
        description: "Undirected tree on 6 vertices",
        directed: false,
        vertex_count: 6,
        edges: &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (1, 4, 1), (2, 5, 1)],
    },
    Sample {
        name: "road",
        description: "Weighted road network with an unreachable vertex 6",
        directed: true,
        vertex_count: 7,
        edges: &[
            (0, 1, 4),
            (0, 2, 4),
            (1, 0, 4),
            (1, 2, 2),
            (2, 3, 3),
            (2, 4, 1),
            (2, 5, 6),
            (3, 2, 3),
            (3, 5, 2),
            (4, 2, 1),
            (4, 5, 3),
            (5, 3, 2),
            (5, 4, 3),
        ],
    },
    Sample {
        name: "negative",
        description: "Directed graph with negative weights and no negative cycle",
        directed: true,
        vertex_count: 6,
        edges: &[
            (3, 2, 6),
            (5, 3, 1),
            (0, 1, 5),
            (1, 5, -3),
            (1, 2, -2),
            (3, 4, -2),
            (2, 4, 3),
        ],
    },
    Sample {
        name: "negative-cycle",
        description: "Directed graph with the negative cycle 1 -> 5 -> 3 -> 2 -> 1",
        directed: true,
        vertex_count: 6,
        edges: &[
            (3, 2, 6),
            (5, 3, 1),
            (0, 1, 5),
            (1, 5, -3),
            (2, 1, -5),
            (3, 4, -2),
            (2, 4, 3),
        ],
    },
    Sample {
        name: "all-pairs",
        description: "Dense 4-vertex directed graph",
        directed: true,
        vertex_count: 4,
        edges: &[
            (0, 1, 3),
            (0, 3, 7),
            (1, 0, 8),
            (1, 2, 2),
            (2, 0, 5),
            (2, 3, 1),
            (3, 0, 2),
        ],
    },
    Sample {
        name: "mst",
        description: "Undirected graph with tied weights, minimum spanning weight 5",
        directed: false,
        vertex_count: 5,
        edges: &[(0, 1, 2), (0, 2, 1), (1, 2, 1), (2, 4, 2), (2, 3, 2), (3, 4, 1)],
    },
    Sample {
        name: "dag",
        description: "Diamond DAG 0 -> {1, 2} -> 3",
        directed: true,
        vertex_count: 4,
        edges: &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)],
    },
    Sample {
        name: "cycle",
        description: "Directed 3-cycle 0 -> 1 -> 2 -> 0",
        directed: true,
        vertex_count: 3,
        edges: &[(0, 1, 1), (1, 2, 1), (2, 0, 1)],
    },
];

/// Looks up a sample by name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|sample| sample.name == name)
}

/// Returns all sample names, comma separated.
pub fn names() -> String {
    SAMPLES
        .iter()
        .map(|sample| sample.name)
        .collect::<Vec<_>>()
        .join(", ")
}
