use std::collections::BinaryHeap;

use fxhash::{FxHashMap, FxHashSet};

use crate::error::PathError;
use crate::path::reconstruct_path;
use crate::search::{HeuristicFn, OpenEntry, UNREACHABLE, WeightFn, ensure_simple, price_edge};
use crate::traits::{HeuristicPathfinder, Network, Node, Pathfinder};

/// Search state of one A* run. Kept between runs to reuse allocations and
/// cleared at the start of every search.
struct AStarState<N> {
    open: BinaryHeap<OpenEntry<N>>,
    closed: FxHashSet<N>,
    g_score: FxHashMap<N, f64>,
    parents: FxHashMap<N, N>,
    nbuf: Vec<N>,
    seq: u64,
}

impl<N> Default for AStarState<N> {
    fn default() -> Self {
        Self {
            open: BinaryHeap::new(),
            closed: FxHashSet::default(),
            g_score: FxHashMap::default(),
            parents: FxHashMap::default(),
            nbuf: Vec::new(),
            seq: 0,
        }
    }
}

impl<N: Node> AStarState<N> {
    fn reset(&mut self) {
        self.open.clear();
        self.closed.clear();
        self.g_score.clear();
        self.parents.clear();
        self.seq = 0;
    }

    fn push(&mut self, node: N, f: f64) {
        self.open.push(OpenEntry {
            node,
            f,
            seq: self.seq,
        });
        self.seq += 1;
    }

    #[inline]
    fn g(&self, node: &N) -> f64 {
        self.g_score.get(node).copied().unwrap_or(UNREACHABLE)
    }
}

/// A* shortest-path search.
///
/// Returns optimal paths as long as the heuristic is admissible (never
/// overestimates the remaining cost) and consistent (never decreases by more
/// than an edge's weight across that edge). Closed nodes are never
/// re-opened, so an admissible but inconsistent heuristic may yield a
/// suboptimal path.
///
/// See [`crate::heuristics`] for ready-made heuristics.
pub struct AStar<N, E> {
    weight: WeightFn<E>,
    heuristic: HeuristicFn<N>,
    state: AStarState<N>,
}

impl<N: Node, E> AStar<N, E> {
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
            state: AStarState::default(),
        }
    }

    fn search<G>(
        &mut self,
        graph: &G,
        source: &N,
        destination: &N,
        nbuf: &mut Vec<N>,
    ) -> Result<Vec<N>, PathError>
    where
        G: Network<N, Edge = E> + ?Sized,
    {
        let weight = &*self.weight;
        let heuristic = &*self.heuristic;
        let state = &mut self.state;

        state.reset();
        state.g_score.insert(source.clone(), 0.0);
        state.parents.insert(source.clone(), source.clone());
        state.push(source.clone(), heuristic(source, destination));

        let mut expanded = 0usize;
        while let Some(OpenEntry { node: current, .. }) = state.open.pop() {
            if current == *destination {
                let path = reconstruct_path(&state.parents, destination);
                log::debug!(
                    "astar: {source:?} -> {destination:?}: {} nodes, {expanded} expanded",
                    path.len()
                );
                return Ok(path);
            }

            // Stale duplicate of an already expanded node.
            if !state.closed.insert(current.clone()) {
                continue;
            }
            expanded += 1;

            let current_g = state.g(&current);
            log::trace!("astar: expanding {current:?} at g = {current_g}");

            nbuf.clear();
            graph.successors(&current, nbuf);

            for successor in nbuf.drain(..) {
                let tentative_g = current_g + price_edge(graph, weight, &current, &successor)?;
                if tentative_g >= state.g(&successor) {
                    continue;
                }
                let f = tentative_g + heuristic(&successor, destination);
                state.parents.insert(successor.clone(), current.clone());
                state.g_score.insert(successor.clone(), tentative_g);
                state.push(successor, f);
            }
        }

        log::debug!("astar: {source:?} -> {destination:?}: unreachable, {expanded} expanded");
        Ok(Vec::new())
    }
}

impl<N: Node, E> Pathfinder<N, E> for AStar<N, E> {
    fn find_path<G>(&mut self, graph: &G, source: &N, destination: &N) -> Result<Vec<N>, PathError>
    where
        G: Network<N, Edge = E> + ?Sized,
    {
        ensure_simple::<N, G>(graph)?;

        let mut nbuf = std::mem::take(&mut self.state.nbuf);
        let result = self.search(graph, source, destination, &mut nbuf);
        self.state.nbuf = nbuf;
        result
    }
}

impl<N: Node, E> HeuristicPathfinder<N, E> for AStar<N, E> {
    fn set_heuristic<H>(&mut self, heuristic: H)
    where
        H: Fn(&N, &N) -> f64 + Send + Sync + 'static,
    {
        self.heuristic = Box::new(heuristic);
    }
}
