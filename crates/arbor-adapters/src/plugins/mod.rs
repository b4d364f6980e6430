//! Plugin system for Arbor.
//!
//! Algorithms are plain functions in [`algorithms`]. Each one also has a
//! wrapper implementing [`Algorithm`] so it can be registered in a
//! [`PluginRegistry`] and run by name on an edge list with typed
//! [`Parameters`].
//!
//! ## Modules
//!
//! - [`algorithms`] - Graph algorithms (traversal, components, shortest paths, MST)

pub mod algorithms;
mod registry;
mod traits;

pub use registry::PluginRegistry;
pub use traits::{
    Algorithm, AlgorithmResult, ParameterDef, ParameterType, ParameterValue, Parameters,
};
