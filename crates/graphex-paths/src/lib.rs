//! Heuristic shortest-path search over weighted graphs.
//!
//! This crate finds the cheapest path between two nodes of any graph that
//! implements [`Network`]:
//!
//! - **A\*** best-first search ([`AStar`])
//! - **IDA\*** memory-bounded iterative deepening ([`IdaStar`])
//! - **Dijkstra** uniform-cost search, A* without a heuristic ([`Dijkstra`])
//!
//! Edge values are turned into costs by a caller-supplied weight function,
//! and the remaining distance is estimated by a heuristic function; see
//! [`heuristics`] for the standard planar metrics. Engines keep their search
//! buffers between calls, so repeated queries reuse allocations.
//!
//! # Trait hierarchy
//!
//! | Trait | Implemented by |
//! |---|---|
//! | [`Network`] | graphs, e.g. `graphex_graphs::ValueGraph` |
//! | [`Pathfinder`] | [`AStar`], [`IdaStar`], [`Dijkstra`] |
//! | [`HeuristicPathfinder`] : [`Pathfinder`] | [`AStar`], [`IdaStar`] |

mod astar;
mod builder;
mod dijkstra;
mod distance;
mod error;
pub mod heuristics;
mod idastar;
mod path;
mod search;
mod traits;

#[cfg(test)]
mod test_graph;

pub use astar::AStar;
pub use builder::PathfinderBuilder;
pub use dijkstra::Dijkstra;
pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use error::PathError;
pub use heuristics::Metric;
pub use idastar::IdaStar;
pub use path::{path_cost, reconstruct_path};
pub use search::{HeuristicFn, UNREACHABLE, WeightFn};
pub use traits::{HeuristicPathfinder, Network, Node, Pathfinder};
