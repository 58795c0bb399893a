use crate::astar::AStar;
use crate::error::PathError;
use crate::heuristics::zero;
use crate::search::WeightFn;
use crate::traits::{Network, Node, Pathfinder};

/// Dijkstra's shortest-path algorithm.
///
/// An [`AStar`] search whose heuristic is fixed to [`zero`], so every node is
/// expanded in order of its distance from the source. Paths are optimal for
/// any graph with non-negative weights. There is no way to change the
/// heuristic.
pub struct Dijkstra<N, E> {
    astar: AStar<N, E>,
}

impl<N: Node + 'static, E> Dijkstra<N, E> {
    /// Create a search pricing edges with `weight`.
    pub fn new<W>(weight: W) -> Self
    where
        W: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(weight))
    }

    pub(crate) fn from_boxed(weight: WeightFn<E>) -> Self {
        Self {
            astar: AStar::from_boxed(weight, Box::new(zero::<N>)),
        }
    }
}

impl<N: Node, E> Pathfinder<N, E> for Dijkstra<N, E> {
    fn find_path<G>(&mut self, graph: &G, source: &N, destination: &N) -> Result<Vec<N>, PathError>
    where
        G: Network<N, Edge = E> + ?Sized,
    {
        self.astar.find_path(graph, source, destination)
    }
}
