use std::fmt::Debug;
use std::hash::Hash;

use crate::error::PathError;

/// Identity of a graph node.
///
/// Nodes are used as map and set keys during a search and are cloned into
/// the returned path. `Debug` is only used to describe offending nodes in
/// errors.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Node for T {}

/// Minimal graph interface consumed by the pathfinders.
///
/// Implementations must not hold more than one edge per ordered pair of
/// nodes. A node the graph does not know about has no successors.
pub trait Network<N> {
    /// Value stored on an edge. Pathfinders turn it into a weight with their
    /// weight function.
    type Edge;

    /// Append the successors of `node` into `buf`. The caller clears `buf`
    /// before calling.
    fn successors(&self, node: &N, buf: &mut Vec<N>);

    /// The edge going from `from` to `to`, if any.
    fn edge_connecting(&self, from: &N, to: &N) -> Option<&Self::Edge>;

    /// Whether this graph may hold several edges between the same ordered
    /// pair. Such graphs are rejected by every pathfinder.
    fn allows_parallel_edges(&self) -> bool {
        false
    }
}

/// A shortest-path search between two nodes.
pub trait Pathfinder<N: Node, E> {
    /// Find the cheapest path from `source` to `destination` in `graph`.
    ///
    /// The path includes both endpoints. An empty path means the destination
    /// is unreachable; `[source]` means source and destination coincide.
    fn find_path<G>(&mut self, graph: &G, source: &N, destination: &N) -> Result<Vec<N>, PathError>
    where
        G: Network<N, Edge = E> + ?Sized;
}

/// Pathfinder guided by a replaceable heuristic.
pub trait HeuristicPathfinder<N: Node, E>: Pathfinder<N, E> {
    /// Replace the function estimating the remaining cost to the destination.
    /// The new heuristic is used from the next search on.
    fn set_heuristic<H>(&mut self, heuristic: H)
    where
        H: Fn(&N, &N) -> f64 + Send + Sync + 'static;
}
