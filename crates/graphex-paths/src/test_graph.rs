//! Small edge-list graph used by the unit tests of this crate.

use crate::traits::{Network, Node};

pub(crate) struct TestGraph<N> {
    edges: Vec<(N, N, f64)>,
    /// Successors reported without a matching edge.
    dangling: Vec<(N, N)>,
    pub(crate) parallel: bool,
}

impl<N: Node> TestGraph<N> {
    pub(crate) fn directed(edges: &[(N, N, f64)]) -> Self {
        Self {
            edges: edges.to_vec(),
            dangling: Vec::new(),
            parallel: false,
        }
    }

    pub(crate) fn undirected(edges: &[(N, N, f64)]) -> Self {
        let mut all = Vec::with_capacity(edges.len() * 2);
        for (a, b, w) in edges {
            all.push((a.clone(), b.clone(), *w));
            if a != b {
                all.push((b.clone(), a.clone(), *w));
            }
        }
        Self::directed(&all)
    }

    pub(crate) fn with_dangling(mut self, from: N, to: N) -> Self {
        self.dangling.push((from, to));
        self
    }

    pub(crate) fn remove(&mut self, from: &N, to: &N) {
        self.edges.retain(|(a, b, _)| !(a == from && b == to));
    }
}

impl<N: Node> Network<N> for TestGraph<N> {
    type Edge = f64;

    fn successors(&self, node: &N, buf: &mut Vec<N>) {
        let listed = self.edges.iter().map(|(a, b, _)| (a, b));
        let dangling = self.dangling.iter().map(|(a, b)| (a, b));
        buf.extend(listed.chain(dangling).filter(|(a, _)| *a == node).map(|(_, b)| b.clone()));
    }

    fn edge_connecting(&self, from: &N, to: &N) -> Option<&f64> {
        self.edges
            .iter()
            .find(|(a, b, _)| a == from && b == to)
            .map(|(_, _, w)| w)
    }

    fn allows_parallel_edges(&self) -> bool {
        self.parallel
    }
}

/// The four-node graph `A->B 1, B->C 1, A->D 5, D->C 1` plus the isolated `E`.
pub(crate) fn diamond() -> TestGraph<char> {
    TestGraph::directed(&[
        ('A', 'B', 1.0),
        ('B', 'C', 1.0),
        ('A', 'D', 5.0),
        ('D', 'C', 1.0),
    ])
}

pub(crate) fn weight(edge: &f64) -> f64 {
    *edge
}
