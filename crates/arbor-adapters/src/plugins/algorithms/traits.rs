//! Shared building blocks for the algorithm implementations.

use std::cmp::Ordering;

use arbor_common::types::{INFINITY, VertexId, Weight};
use arbor_common::utils::error::{Error, Result};
use arbor_core::graph::EdgeList;

use crate::plugins::{ParameterDef, ParameterType, ParameterValue, Parameters};

/// Priority-queue entry ordered by key, smallest first.
///
/// `BinaryHeap` is a max-heap; wrapping entries in `MinScored` inverts the
/// comparison on `K` so the heap pops the lowest key. Only the key takes part
/// in the ordering, so entries with equal keys pop in no particular order.
#[derive(Debug, Clone, Copy)]
pub struct MinScored<K, T>(pub K, pub T);

impl<K: Ord, T> PartialEq for MinScored<K, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Ord, T> Eq for MinScored<K, T> {}

impl<K: Ord, T> PartialOrd for MinScored<K, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, T> Ord for MinScored<K, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

/// Read access to a distance array that uses the [`INFINITY`] sentinel.
pub trait DistanceMap {
    /// Returns the distance to `vertex`, or `None` if it is unreachable.
    fn distance(&self, vertex: VertexId) -> Option<Weight>;

    /// Returns true if `vertex` has a finite distance.
    fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Returns the reachable vertices with their distances, in index order.
    fn reachable(&self) -> Vec<(VertexId, Weight)>;
}

impl DistanceMap for [Weight] {
    fn distance(&self, vertex: VertexId) -> Option<Weight> {
        self.get(vertex).copied().filter(|&d| d != INFINITY)
    }

    fn reachable(&self) -> Vec<(VertexId, Weight)> {
        self.iter()
            .enumerate()
            .filter(|&(_, &d)| d != INFINITY)
            .map(|(v, &d)| (v, d))
            .collect()
    }
}

/// The `start` vertex parameter, defaulting to vertex 0.
pub(crate) fn start_parameter() -> ParameterDef {
    ParameterDef::with_default("start", "Start vertex", 0_i64)
}

/// The `directed` flag controlling how the edge list is read.
pub(crate) fn directed_parameter(default: bool) -> ParameterDef {
    ParameterDef::with_default(
        "directed",
        "Read each edge as directed instead of adding its reverse",
        default,
    )
}

/// The `strategy` parameter choosing between `choices`, defaulting to the
/// first one.
pub(crate) fn strategy_parameter(choices: &[&str]) -> ParameterDef {
    ParameterDef {
        name: "strategy".to_owned(),
        description: format!("One of: {}", choices.join(", ")),
        param_type: ParameterType::String,
        required: false,
        default: choices.first().map(|&choice| ParameterValue::from(choice)),
    }
}

/// Reads the resolved `start` parameter and checks it against the graph.
pub(crate) fn start_vertex(params: &Parameters, graph: &EdgeList) -> Result<VertexId> {
    params
        .vertex("start", graph.vertex_count())?
        .ok_or_else(|| Error::MissingParameter("start".to_owned()))
}

/// Reads the resolved `strategy` parameter and checks it against `choices`.
pub(crate) fn strategy<'a>(params: &'a Parameters, choices: &[&str]) -> Result<&'a str> {
    let value = params.string("strategy")?;
    if choices.contains(&value) {
        Ok(value)
    } else {
        Err(Error::invalid_parameter(
            "strategy",
            format!("unknown strategy '{value}', expected one of: {}", choices.join(", ")),
        ))
    }
}
