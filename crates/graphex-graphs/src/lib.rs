//! Graphs for the graphex pathfinders.
//!
//! [`ValueGraph`] is an adjacency-list graph with one value per edge that
//! implements [`graphex_paths::Network`], and [`makers`] builds common
//! graphs from points, grid ranges, random draws and other networks.

mod error;
mod graph;
pub mod makers;

pub use error::GraphError;
pub use graph::ValueGraph;
pub use makers::{Connectivity, from_network, grid, grid_from_points, random_graph, unit_weights};
