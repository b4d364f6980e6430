//! # arbor-adapters
//!
//! Algorithm layer for Arbor: the graph algorithms themselves and the plugin
//! interface used to select and run them by name.
//!
//! ## Modules
//!
//! - [`plugins`] - Plugin system and the algorithm implementations

pub mod plugins;
