//! Ready-made heuristics for nodes that live on a plane.
//!
//! Admissibility depends on the movement model of the graph being searched:
//!
//! | Metric | Admissible when |
//! |---|---|
//! | [`Metric::Manhattan`] | moves are 4-directional with unit cost per axis step |
//! | [`Metric::Euclidean`] | edge weights are at least the straight-line length |
//! | [`Metric::Chebyshev`] | moves are 8-directional with unit cost |
//! | [`Metric::Octile`] | moves are 8-directional, diagonals cost √2 |
//!
//! Matching the metric to the graph is the caller's responsibility.

use graphex_core::Planar;

use crate::distance;

/// A distance metric over 2D coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Manhattan,
    Euclidean,
    Chebyshev,
    Octile,
}

impl Metric {
    /// Distance between two coordinate pairs under this metric.
    #[inline]
    pub fn distance(self, a: [f64; 2], b: [f64; 2]) -> f64 {
        match self {
            Metric::Manhattan => distance::manhattan(a, b),
            Metric::Euclidean => distance::euclidean(a, b),
            Metric::Chebyshev => distance::chebyshev(a, b),
            Metric::Octile => distance::octile(a, b),
        }
    }

    /// Heuristic for nodes whose coordinates are read with `x` and `y`.
    pub fn by<N, X, Y>(self, x: X, y: Y) -> impl Fn(&N, &N) -> f64 + Send + Sync
    where
        X: Fn(&N) -> f64 + Send + Sync,
        Y: Fn(&N) -> f64 + Send + Sync,
    {
        move |a: &N, b: &N| self.distance([x(a), y(a)], [x(b), y(b)])
    }

    /// Heuristic for node types that expose their own coordinates.
    pub fn heuristic<N: Planar>(self) -> impl Fn(&N, &N) -> f64 + Send + Sync + Copy {
        move |a: &N, b: &N| self.distance(a.coords(), b.coords())
    }
}

/// Manhattan distance between nodes located with `x` and `y`.
pub fn manhattan_by<N, X, Y>(x: X, y: Y) -> impl Fn(&N, &N) -> f64 + Send + Sync
where
    X: Fn(&N) -> f64 + Send + Sync,
    Y: Fn(&N) -> f64 + Send + Sync,
{
    Metric::Manhattan.by(x, y)
}

/// Euclidean distance between nodes located with `x` and `y`.
pub fn euclidean_by<N, X, Y>(x: X, y: Y) -> impl Fn(&N, &N) -> f64 + Send + Sync
where
    X: Fn(&N) -> f64 + Send + Sync,
    Y: Fn(&N) -> f64 + Send + Sync,
{
    Metric::Euclidean.by(x, y)
}

/// Chebyshev distance between nodes located with `x` and `y`.
pub fn chebyshev_by<N, X, Y>(x: X, y: Y) -> impl Fn(&N, &N) -> f64 + Send + Sync
where
    X: Fn(&N) -> f64 + Send + Sync,
    Y: Fn(&N) -> f64 + Send + Sync,
{
    Metric::Chebyshev.by(x, y)
}

/// Octile distance between nodes located with `x` and `y`.
pub fn octile_by<N, X, Y>(x: X, y: Y) -> impl Fn(&N, &N) -> f64 + Send + Sync
where
    X: Fn(&N) -> f64 + Send + Sync,
    Y: Fn(&N) -> f64 + Send + Sync,
{
    Metric::Octile.by(x, y)
}

/// The heuristic that knows nothing. Turns A* into Dijkstra's algorithm.
#[inline]
pub fn zero<N>(_node: &N, _destination: &N) -> f64 {
    0.0
}
