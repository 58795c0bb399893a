use crate::astar::AStar;
use crate::dijkstra::Dijkstra;
use crate::error::PathError;
use crate::idastar::IdaStar;
use crate::search::{HeuristicFn, WeightFn};
use crate::traits::Node;

/// Collects the collaborators of a search and builds any of the engines.
///
/// ```
/// use graphex_paths::{Pathfinder, PathfinderBuilder};
/// use graphex_paths::heuristics::zero;
///
/// # struct Line;
/// # impl graphex_paths::Network<u8> for Line {
/// #     type Edge = f64;
/// #     fn successors(&self, n: &u8, buf: &mut Vec<u8>) { if *n < 3 { buf.push(n + 1) } }
/// #     fn edge_connecting(&self, a: &u8, b: &u8) -> Option<&f64> { (*b == a + 1).then_some(&1.0) }
/// # }
/// let mut astar = PathfinderBuilder::new()
///     .weight(|e: &f64| *e)
///     .heuristic(zero::<u8>)
///     .build_astar()?;
/// assert_eq!(astar.find_path(&Line, &0, &3)?, vec![0, 1, 2, 3]);
/// # Ok::<(), graphex_paths::PathError>(())
/// ```
pub struct PathfinderBuilder<N, E> {
    weight: Option<WeightFn<E>>,
    heuristic: Option<HeuristicFn<N>>,
}

impl<N, E> Default for PathfinderBuilder<N, E> {
    fn default() -> Self {
        Self {
            weight: None,
            heuristic: None,
        }
    }
}

impl<N: Node, E> PathfinderBuilder<N, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the function turning an edge value into a traversal cost.
    pub fn weight<W>(mut self, weight: W) -> Self
    where
        W: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        self.weight = Some(Box::new(weight));
        self
    }

    /// Set the estimate of the remaining cost to the destination.
    pub fn heuristic<H>(mut self, heuristic: H) -> Self
    where
        H: Fn(&N, &N) -> f64 + Send + Sync + 'static,
    {
        self.heuristic = Some(Box::new(heuristic));
        self
    }

    pub fn build_astar(self) -> Result<AStar<N, E>, PathError> {
        let (weight, heuristic) = self.both()?;
        Ok(AStar::from_boxed(weight, heuristic))
    }

    pub fn build_ida_star(self) -> Result<IdaStar<N, E>, PathError> {
        let (weight, heuristic) = self.both()?;
        Ok(IdaStar::from_boxed(weight, heuristic))
    }

    /// Build a [`Dijkstra`] search. A heuristic, if set, is ignored.
    pub fn build_dijkstra(self) -> Result<Dijkstra<N, E>, PathError>
    where
        N: 'static,
    {
        let weight = self.weight.ok_or(PathError::MissingCollaborator("weight"))?;
        Ok(Dijkstra::from_boxed(weight))
    }

    fn both(self) -> Result<(WeightFn<E>, HeuristicFn<N>), PathError> {
        let weight = self.weight.ok_or(PathError::MissingCollaborator("weight"))?;
        let heuristic = self
            .heuristic
            .ok_or(PathError::MissingCollaborator("heuristic"))?;
        Ok((weight, heuristic))
    }
}
