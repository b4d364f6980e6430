//! Error types shared across Arbor crates.
//!
//! Only two failures are raised by the algorithms themselves:
//! [`Error::NegativeCycleDetected`] (Bellman-Ford) and [`Error::CycleDetected`]
//! (Kahn's topological sort). The remaining variants belong to the plugin
//! layer, which checks parameters before handing them to an algorithm.

use thiserror::Error;

/// Result type alias using the Arbor [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by Arbor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A negative-weight cycle is reachable from the source vertex, so no
    /// shortest distances exist.
    #[error("graph contains a negative weight cycle reachable from the source")]
    NegativeCycleDetected,

    /// A topological order was requested for a graph with a cycle.
    #[error("graph contains a cycle: only {emitted} of {total} vertices could be ordered")]
    CycleDetected {
        /// Vertices emitted before the ordering stalled.
        emitted: usize,
        /// Total vertex count.
        total: usize,
    },

    /// No algorithm is registered under this name.
    #[error("algorithm not found: {0}")]
    AlgorithmNotFound(String),

    /// A required parameter was not supplied.
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    /// A parameter has the wrong type or an out-of-range value.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for failures that describe the graph itself rather than
    /// how it was requested.
    #[must_use]
    pub fn is_graph_property(&self) -> bool {
        matches!(self, Self::NegativeCycleDetected | Self::CycleDetected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::CycleDetected {
                emitted: 1,
                total: 3
            }
            .to_string(),
            "graph contains a cycle: only 1 of 3 vertices could be ordered"
        );
        assert_eq!(
            Error::invalid_parameter("start", "vertex 9 out of range").to_string(),
            "invalid parameter 'start': vertex 9 out of range"
        );
    }

    #[test]
    fn test_graph_property_classification() {
        assert!(Error::NegativeCycleDetected.is_graph_property());
        assert!(!Error::AlgorithmNotFound("x".to_string()).is_graph_property());
        assert!(!Error::MissingParameter("start".to_string()).is_graph_property());
    }
}
