use fxhash::FxHashSet;

use crate::error::PathError;
use crate::search::{HeuristicFn, UNREACHABLE, WeightFn, ensure_simple, price_edge};
use crate::traits::{HeuristicPathfinder, Network, Node, Pathfinder};

/// Result of one depth-limited pass.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    /// The destination is on top of the path stack.
    Found,
    /// Smallest f-cost that exceeded the threshold, [`UNREACHABLE`] if
    /// nothing was pruned.
    Next(f64),
}

/// Iterative Deepening A* (IDA*).
///
/// Repeats depth-first searches bounded by an f-cost threshold, raising the
/// threshold to the smallest cost that exceeded it until the destination is
/// found. Auxiliary memory is proportional to the depth of the path rather
/// than to the size of the graph, at the price of re-expanding nodes on every
/// pass. Depending on the graph this can be extremely slow; prefer
/// [`AStar`](crate::AStar) unless memory is the binding constraint.
///
/// Cycle avoidance only looks at the current branch: a node is never repeated
/// within one path, but may be reached again through another branch.
pub struct IdaStar<N, E> {
    weight: WeightFn<E>,
    heuristic: HeuristicFn<N>,
    path: Vec<N>,
    on_path: FxHashSet<N>,
}

/// Borrowed view of everything a depth-limited pass needs.
struct Pass<'a, N, E, G: ?Sized> {
    graph: &'a G,
    weight: &'a (dyn Fn(&E) -> f64 + Send + Sync),
    heuristic: &'a (dyn Fn(&N, &N) -> f64 + Send + Sync),
    destination: &'a N,
    threshold: f64,
    path: &'a mut Vec<N>,
    on_path: &'a mut FxHashSet<N>,
    visited: usize,
}

impl<N, E, G> Pass<'_, N, E, G>
where
    N: Node,
    G: Network<N, Edge = E> + ?Sized,
{
    /// Explore every extension of the current path whose f-cost stays within
    /// the threshold. `depth` is the cost of the path so far.
    fn search(&mut self, depth: f64) -> Result<Bound, PathError> {
        self.visited += 1;
        let current = match self.path.last() {
            Some(node) => node.clone(),
            None => return Ok(Bound::Next(UNREACHABLE)),
        };
        // Prune before the goal test: a destination reached above the
        // threshold may still have a cheaper route in a later pass.
        let total = depth + (self.heuristic)(&current, self.destination);
        if total > self.threshold {
            return Ok(Bound::Next(total));
        }
        if current == *self.destination {
            return Ok(Bound::Found);
        }

        let mut successors = Vec::new();
        self.graph.successors(&current, &mut successors);

        let mut minimum = UNREACHABLE;
        for successor in successors {
            if self.on_path.contains(&successor) {
                continue;
            }
            let cost = depth + price_edge(self.graph, self.weight, &current, &successor)?;

            self.on_path.insert(successor.clone());
            self.path.push(successor);
            let bound = self.search(cost)?;
            if bound == Bound::Found {
                return Ok(Bound::Found);
            }
            if let Some(popped) = self.path.pop() {
                self.on_path.remove(&popped);
            }

            if let Bound::Next(next) = bound {
                minimum = minimum.min(next);
            }
        }
        Ok(Bound::Next(minimum))
    }
}

impl<N: Node, E> IdaStar<N, E> {
    /// Create a search pricing edges with `weight` and guided by `heuristic`.
    pub fn new<W, H>(weight: W, heuristic: H) -> Self
    where
        W: Fn(&E) -> f64 + Send + Sync + 'static,
        H: Fn(&N, &N) -> f64 + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(weight), Box::new(heuristic))
    }

    pub(crate) fn from_boxed(weight: WeightFn<E>, heuristic: HeuristicFn<N>) -> Self {
        Self {
            weight,
            heuristic,
            path: Vec::new(),
            on_path: FxHashSet::default(),
        }
    }
}

impl<N: Node, E> Pathfinder<N, E> for IdaStar<N, E> {
    fn find_path<G>(&mut self, graph: &G, source: &N, destination: &N) -> Result<Vec<N>, PathError>
    where
        G: Network<N, Edge = E> + ?Sized,
    {
        ensure_simple::<N, G>(graph)?;

        self.path.clear();
        self.on_path.clear();
        self.path.push(source.clone());
        self.on_path.insert(source.clone());

        let mut pass = Pass {
            graph,
            weight: &*self.weight,
            heuristic: &*self.heuristic,
            destination,
            threshold: (self.heuristic)(source, destination),
            path: &mut self.path,
            on_path: &mut self.on_path,
            visited: 0,
        };

        let mut iterations = 0usize;
        loop {
            iterations += 1;
            log::trace!("idastar: pass {iterations} with threshold {}", pass.threshold);
            match pass.search(0.0)? {
                Bound::Found => {
                    log::debug!(
                        "idastar: {source:?} -> {destination:?}: {} nodes, {iterations} passes, {} visits",
                        pass.path.len(),
                        pass.visited
                    );
                    return Ok(pass.path.clone());
                }
                // A threshold that does not grow can only come from an
                // infinite or NaN estimate; nothing new would be explored.
                Bound::Next(next) if next.is_finite() && next > pass.threshold => {
                    pass.threshold = next;
                }
                Bound::Next(_) => {
                    log::debug!(
                        "idastar: {source:?} -> {destination:?}: unreachable, {iterations} passes, {} visits",
                        pass.visited
                    );
                    return Ok(Vec::new());
                }
            }
        }
    }
}

impl<N: Node, E> HeuristicPathfinder<N, E> for IdaStar<N, E> {
    fn set_heuristic<H>(&mut self, heuristic: H)
    where
        H: Fn(&N, &N) -> f64 + Send + Sync + 'static,
    {
        self.heuristic = Box::new(heuristic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AStar;
    use crate::heuristics::{Metric, zero};
    use crate::path::path_cost;
    use crate::test_graph::{TestGraph, diamond, weight};
    use graphex_core::Point;

    fn blind() -> IdaStar<char, f64> {
        IdaStar::new(weight, zero)
    }

    #[test]
    fn prefers_cheaper_path() {
        assert_eq!(blind().find_path(&diamond(), &'A', &'C'), Ok(vec!['A', 'B', 'C']));
    }

    #[test]
    fn falls_back_when_edge_removed() {
        let mut g = diamond();
        g.remove(&'A', &'B');
        assert_eq!(blind().find_path(&g, &'A', &'C'), Ok(vec!['A', 'D', 'C']));
    }

    #[test]
    fn unreachable_is_empty() {
        let mut ida = blind();
        assert_eq!(ida.find_path(&diamond(), &'A', &'E'), Ok(vec![]));
        assert_eq!(ida.find_path(&diamond(), &'C', &'A'), Ok(vec![]));
    }

    #[test]
    fn source_is_destination() {
        let mut ida = blind();
        assert_eq!(ida.find_path(&diamond(), &'A', &'A'), Ok(vec!['A']));
        assert_eq!(ida.find_path(&diamond(), &'E', &'E'), Ok(vec!['E']));
    }

    #[test]
    fn cycles_do_not_recurse_forever() {
        // X <-> Y cycle hanging off the source, destination behind Y.
        let g = TestGraph::directed(&[
            ('S', 'X', 1.0),
            ('X', 'Y', 1.0),
            ('Y', 'X', 1.0),
            ('Y', 'T', 5.0),
        ]);
        let mut ida = blind();
        assert_eq!(ida.find_path(&g, &'S', &'T'), Ok(vec!['S', 'X', 'Y', 'T']));

        // Same cycle, destination unreachable: must terminate with no path.
        let g = TestGraph::directed(&[('S', 'X', 1.0), ('X', 'Y', 1.0), ('Y', 'X', 1.0)]);
        assert_eq!(ida.find_path(&g, &'S', &'T'), Ok(vec![]));
    }

    #[test]
    fn undirected_cycle_terminates() {
        let g = TestGraph::undirected(&[
            ('a', 'b', 1.0),
            ('b', 'c', 1.0),
            ('c', 'a', 1.0),
            ('c', 'd', 1.0),
        ]);
        let mut ida = blind();
        assert_eq!(ida.find_path(&g, &'a', &'d'), Ok(vec!['a', 'c', 'd']));
        assert_eq!(ida.find_path(&g, &'a', &'z'), Ok(vec![]));
    }

    #[test]
    fn repeated_calls_do_not_leak_state() {
        let g = diamond();
        let mut ida = blind();
        let first = ida.find_path(&g, &'A', &'C');
        assert_eq!(ida.find_path(&g, &'A', &'E'), Ok(vec![]));
        assert_eq!(ida.find_path(&g, &'A', &'C'), first);
        assert_eq!(first, Ok(vec!['A', 'B', 'C']));
    }

    #[test]
    fn matches_astar_cost_on_weighted_grid() {
        // 5x5 grid, 4-connected, weight grows with x so paths are not all equal.
        let mut edges = Vec::new();
        for y in 0..5 {
            for x in 0..5 {
                let p = Point::new(x, y);
                let w = 1.0 + f64::from(x) * 0.5;
                if x < 4 {
                    edges.push((p, p.shift(1, 0), w));
                }
                if y < 4 {
                    edges.push((p, p.shift(0, 1), w));
                }
            }
        }
        let g = TestGraph::undirected(&edges);
        let from = Point::new(0, 4);
        let to = Point::new(4, 0);

        let h = Metric::Manhattan.heuristic::<Point>();
        let mut astar = AStar::new(weight, h);
        let mut ida = IdaStar::new(weight, h);
        let a = astar.find_path(&g, &from, &to).unwrap();
        let i = ida.find_path(&g, &from, &to).unwrap();
        let a_cost = path_cost(&g, weight, &a).unwrap();
        let i_cost = path_cost(&g, weight, &i).unwrap();
        assert!((a_cost - i_cost).abs() < 1e-9, "astar {a_cost} vs idastar {i_cost}");
        assert_eq!(i.first(), Some(&from));
        assert_eq!(i.last(), Some(&to));
    }

    #[test]
    fn set_heuristic_applies_to_next_search() {
        let g = diamond();
        let mut ida = IdaStar::new(weight, |n: &char, _: &char| if *n == 'B' { 100.0 } else { 0.0 });
        assert_eq!(ida.find_path(&g, &'A', &'C'), Ok(vec!['A', 'D', 'C']));
        ida.set_heuristic(zero::<char>);
        assert_eq!(ida.find_path(&g, &'A', &'C'), Ok(vec!['A', 'B', 'C']));
    }

    #[test]
    fn expensive_direct_edge_is_not_taken() {
        // The direct edge reaches D in the first pass, but its cost is above
        // the threshold; the detour is found one pass later.
        let g = TestGraph::directed(&[('S', 'D', 10.0), ('S', 'A', 1.0), ('A', 'D', 1.0)]);
        let path = blind().find_path(&g, &'S', &'D').unwrap();
        assert_eq!(path, vec!['S', 'A', 'D']);
        assert_eq!(path_cost(&g, weight, &path), Ok(2.0));

        let mut astar: AStar<char, f64> = AStar::new(weight, zero);
        let reference = astar.find_path(&g, &'S', &'D').unwrap();
        assert_eq!(path_cost(&g, weight, &reference), path_cost(&g, weight, &path));
    }

    #[test]
    fn missing_edge_fails_loudly() {
        // A lists B and then Q, but has no edge to Q. B is cut off by the
        // first threshold, so the dangling successor is priced right away.
        let g = TestGraph::directed(&[('A', 'B', 1.0), ('B', 'C', 1.0)]).with_dangling('A', 'Q');
        assert!(matches!(
            blind().find_path(&g, &'A', &'C'),
            Err(PathError::MissingEdge { .. })
        ));
    }

    #[test]
    fn infinite_estimate_terminates() {
        let mut ida = IdaStar::new(weight, |_: &char, _: &char| f64::INFINITY);
        assert_eq!(ida.find_path(&diamond(), &'A', &'E'), Ok(vec![]));
        assert_eq!(ida.find_path(&diamond(), &'A', &'A'), Ok(vec!['A']));
    }

    #[test]
    fn parallel_edge_graphs_are_rejected() {
        let mut g = diamond();
        g.parallel = true;
        assert_eq!(blind().find_path(&g, &'A', &'C'), Err(PathError::ParallelEdges));
    }
}
