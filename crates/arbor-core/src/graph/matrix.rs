//! Dense `n×n` matrix representations.
//!
//! Both matrices store their cells in a single row-major buffer so a row scan
//! is one contiguous slice.

use arbor_common::types::{Edge, INFINITY, VertexId, Weight};
use serde::{Deserialize, Serialize};

/// Unweighted adjacency matrix.
///
/// A cell equal to `1` marks an edge `row -> column`; every other value means
/// "no edge". Undirected graphs are symmetric matrices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    /// Number of vertices (matrix dimension).
    size: usize,
    /// Row-major presence flags.
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    /// Builds a matrix from integer rows, treating `1` as an edge.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square matrix.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Weight]>,
    {
        let mut cells = Vec::new();
        let mut size = 0;
        let mut width = None;
        for row in rows {
            let row = row.as_ref();
            assert_row_width(&mut width, row.len(), "adjacency");
            cells.extend(row.iter().map(|&cell| cell == 1));
            size += 1;
        }
        assert_eq!(cells.len(), size * size, "adjacency matrix must be square");
        Self { size, cells }
    }

    /// Builds an `n×n` matrix with an edge for every `(row, column)` pair.
    ///
    /// # Panics
    ///
    /// Panics if a pair references a vertex `>= n`.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (VertexId, VertexId)>) -> Self {
        let mut cells = vec![false; n * n];
        for (row, column) in edges {
            assert!(row < n && column < n, "edge ({row}, {column}) outside {n} vertices");
            cells[row * n + column] = true;
        }
        Self { size: n, cells }
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.size
    }

    /// Returns true if the matrix has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if there is an edge `row -> column`.
    #[inline]
    #[must_use]
    pub fn has_edge(&self, row: VertexId, column: VertexId) -> bool {
        self.cells[row * self.size + column]
    }

    /// Returns the neighbors of `vertex` in increasing index order.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let row = &self.cells[vertex * self.size..(vertex + 1) * self.size];
        row.iter()
            .enumerate()
            .filter_map(|(column, &present)| present.then_some(column))
    }

    /// Returns the number of set cells.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&present| present).count()
    }
}

/// Weighted adjacency matrix.
///
/// `cell[i][j]` is the weight of edge `i -> j`, or [`INFINITY`] when there is
/// no such edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightMatrix {
    /// Number of vertices (matrix dimension).
    size: usize,
    /// Row-major weights.
    cells: Vec<Weight>,
}

impl WeightMatrix {
    /// Builds a matrix from weight rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square matrix.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Weight]>,
    {
        let mut cells = Vec::new();
        let mut size = 0;
        let mut width = None;
        for row in rows {
            let row = row.as_ref();
            assert_row_width(&mut width, row.len(), "weight");
            cells.extend_from_slice(row);
            size += 1;
        }
        assert_eq!(cells.len(), size * size, "weight matrix must be square");
        Self { size, cells }
    }

    /// Builds an `n×n` matrix from directed edges.
    ///
    /// The diagonal is `0`, absent edges are [`INFINITY`], and parallel edges
    /// keep their lightest weight.
    ///
    /// # Panics
    ///
    /// Panics if an edge references a vertex `>= n`.
    pub fn from_edges<'a>(n: usize, edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut cells = vec![INFINITY; n * n];
        for i in 0..n {
            cells[i * n + i] = 0;
        }
        for edge in edges {
            assert!(
                edge.source < n && edge.destination < n,
                "edge {edge} outside {n} vertices"
            );
            let cell = &mut cells[edge.source * n + edge.destination];
            *cell = (*cell).min(edge.weight);
        }
        Self { size: n, cells }
    }

    /// Returns the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.size
    }

    /// Returns true if the matrix has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the weight of `row -> column`, [`INFINITY`] if absent.
    #[inline]
    #[must_use]
    pub fn get(&self, row: VertexId, column: VertexId) -> Weight {
        self.cells[row * self.size + column]
    }

    /// Returns one row of weights.
    #[inline]
    #[must_use]
    pub fn row(&self, row: VertexId) -> &[Weight] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Copies the matrix into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        (0..self.size).map(|row| self.row(row).to_vec()).collect()
    }
}

/// Every row must be as wide as the first; together with the total cell count
/// this makes the rows square.
fn assert_row_width(width: &mut Option<usize>, len: usize, kind: &str) {
    let expected = *width.get_or_insert(len);
    assert_eq!(len, expected, "{kind} matrix must be square");
}
