use std::cmp::Ordering;

use crate::error::PathError;
use crate::traits::{Network, Node};

/// Boxed heuristic: estimated cost from a node to the destination.
pub type HeuristicFn<N> = Box<dyn Fn(&N, &N) -> f64 + Send + Sync>;

/// Boxed weight extraction: cost of traversing an edge value.
pub type WeightFn<E> = Box<dyn Fn(&E) -> f64 + Send + Sync>;

/// Cost of a node no search has reached.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// Price the edge from `from` to `to` with `weight`.
///
/// Fails when the graph lists `to` as a successor without an edge value, or
/// when the weight is negative, NaN or infinite.
pub(crate) fn price_edge<N, E, G>(
    graph: &G,
    weight: &dyn Fn(&E) -> f64,
    from: &N,
    to: &N,
) -> Result<f64, PathError>
where
    N: Node,
    G: Network<N, Edge = E> + ?Sized,
{
    let edge = graph
        .edge_connecting(from, to)
        .ok_or_else(|| PathError::missing_edge(from, to))?;
    let w = weight(edge);
    if w.is_finite() && w >= 0.0 {
        Ok(w)
    } else {
        Err(PathError::invalid_weight(from, to, w))
    }
}

/// Reject graphs that may hold parallel edges.
pub(crate) fn ensure_simple<N, G>(graph: &G) -> Result<(), PathError>
where
    G: Network<N> + ?Sized,
{
    if graph.allows_parallel_edges() {
        return Err(PathError::ParallelEdges);
    }
    Ok(())
}

/// Open-set entry, ordered by `f` for use in `BinaryHeap`.
///
/// Entries with equal `f` pop in insertion order (`seq`).
#[derive(Clone, Debug)]
pub(crate) struct OpenEntry<N> {
    pub(crate) node: N,
    pub(crate) f: f64,
    pub(crate) seq: u64,
}

impl<N> Ord for OpenEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for OpenEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> PartialEq for OpenEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for OpenEntry<N> {}
