//! Name-based lookup of algorithms.

use std::sync::Arc;

use arbor_common::utils::error::{Error, Result};
use arbor_core::graph::EdgeList;
use hashbrown::HashMap;

use super::algorithms::{
    BellmanFordAlgorithm, BfsAlgorithm, ConnectedComponentsAlgorithm, CycleDetectionAlgorithm,
    DfsAlgorithm, DijkstraAlgorithm, FloydWarshallAlgorithm, KruskalAlgorithm, PrimAlgorithm,
    TopologicalSortAlgorithm,
};
use super::traits::{Algorithm, AlgorithmResult, Parameters};

/// Registry of algorithms keyed by [`Algorithm::name`].
///
/// Algorithms are stored behind `Arc` so a registry can be cloned and
/// shared across threads cheaply.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    algorithms: HashMap<String, Arc<dyn Algorithm>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in algorithm.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(BfsAlgorithm::new());
        registry.register(DfsAlgorithm::new());
        registry.register(CycleDetectionAlgorithm::new());
        registry.register(DijkstraAlgorithm::new());
        registry.register(BellmanFordAlgorithm::new());
        registry.register(FloydWarshallAlgorithm::new());
        registry.register(KruskalAlgorithm);
        registry.register(PrimAlgorithm::new());
        registry.register(TopologicalSortAlgorithm::new());
        registry.register(ConnectedComponentsAlgorithm);
        registry
    }

    /// Registers an algorithm under its name, returning the one it replaced.
    pub fn register<A: Algorithm + 'static>(&mut self, algorithm: A) -> Option<Arc<dyn Algorithm>> {
        let name = algorithm.name().to_owned();
        tracing::trace!(name = %name, "registering algorithm");
        self.algorithms.insert(name, Arc::new(algorithm))
    }

    /// Looks up an algorithm by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Algorithm>> {
        self.algorithms.get(name).cloned()
    }

    /// Returns true if an algorithm with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.algorithms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the registered algorithms sorted by name.
    #[must_use]
    pub fn algorithms(&self) -> Vec<Arc<dyn Algorithm>> {
        let mut algorithms: Vec<_> = self.algorithms.values().cloned().collect();
        algorithms.sort_by(|a, b| a.name().cmp(b.name()));
        algorithms
    }

    /// Returns the number of registered algorithms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Runs the algorithm registered as `name` on `graph`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlgorithmNotFound`] for an unknown name, otherwise
    /// whatever the algorithm returns.
    pub fn run(
        &self,
        name: &str,
        graph: &EdgeList,
        params: &Parameters,
    ) -> Result<AlgorithmResult> {
        let algorithm = self
            .algorithms
            .get(name)
            .ok_or_else(|| Error::AlgorithmNotFound(name.to_owned()))?;

        tracing::debug!(
            algorithm = name,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "running algorithm"
        );
        let result = algorithm.execute(graph, params);
        if let Err(error) = &result {
            tracing::debug!(algorithm = name, %error, "algorithm failed");
        }
        result
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("algorithms", &self.names())
            .finish()
    }
}
