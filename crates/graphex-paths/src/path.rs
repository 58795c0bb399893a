//! Path reconstruction and pricing.

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::PathError;
use crate::search::price_edge;
use crate::traits::{Network, Node};

/// Rebuild the path ending at `target` from a parent-pointer map.
///
/// The source of the search is the node that is its own parent. Returns an
/// empty path when `target` was never reached. The walk stops after visiting
/// every entry of `parents` at most once, so a map without a self-parented
/// root cannot loop forever.
pub fn reconstruct_path<N, S>(parents: &HashMap<N, N, S>, target: &N) -> Vec<N>
where
    N: Node,
    S: BuildHasher,
{
    let Some(mut parent) = parents.get(target) else {
        return Vec::new();
    };
    let mut path = vec![target.clone()];
    let mut current = target;
    while parent != current && path.len() <= parents.len() {
        path.push(parent.clone());
        current = parent;
        match parents.get(current) {
            Some(p) => parent = p,
            None => break,
        }
    }
    path.reverse();
    path
}

/// Total weight of the edges along `path`.
///
/// Empty and single-node paths cost nothing. Two consecutive nodes without
/// a connecting edge are reported as [`PathError::MissingEdge`].
pub fn path_cost<N, E, G, W>(graph: &G, weight: W, path: &[N]) -> Result<f64, PathError>
where
    N: Node,
    G: Network<N, Edge = E> + ?Sized,
    W: Fn(&E) -> f64,
{
    path.windows(2).try_fold(0.0, |total, pair| {
        Ok(total + price_edge(graph, &weight, &pair[0], &pair[1])?)
    })
}
