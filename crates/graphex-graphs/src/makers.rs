//! Builders for common graphs.
//!
//! - **Point grids**: connect points lying exactly `spacing` apart
//!   ([`grid_from_points`]).
//! - **Range grids**: 4- or 8-connected lattices over a [`Range`] ([`grid`]).
//! - **Unit weights**: forget edge values ([`unit_weights`]).
//! - **Random graphs**: nodes from random coordinates, edges drawn with a
//!   given density ([`random_graph`]).
//! - **Conversions**: copy any [`Network`] into a weighted graph
//!   ([`from_network`]).

use std::f64::consts::SQRT_2;

use graphex_core::{Planar, Point, Range};
use graphex_paths::{Network, Node, euclidean};
use rand::{Rng, RngExt};

use crate::error::GraphError;
use crate::graph::ValueGraph;

/// Tolerance when comparing a point distance to the grid spacing.
const SPACING_EPSILON: f64 = 1e-6;

/// How many duplicate nodes in a row `random_graph` accepts from its node
/// creator before giving up.
const MAX_DUPLICATE_DRAWS: usize = 1000;

/// Moves allowed on a grid built by [`grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Horizontal and vertical steps only.
    Four,
    /// Diagonal steps too.
    Eight,
}

/// Undirected graph over `points` with an edge between every two points whose
/// euclidean distance equals `spacing` (within `1e-6`). The edge value is that
/// distance.
///
/// Fails on an empty point set or a spacing that is not positive and finite.
pub fn grid_from_points<N, I>(points: I, spacing: f64) -> Result<ValueGraph<N, f64>, GraphError>
where
    N: Node + Planar,
    I: IntoIterator<Item = N>,
{
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(GraphError::invalid(format!("spacing must be positive, got {spacing}")));
    }
    let mut graph = ValueGraph::undirected();
    for p in points {
        graph.add_node(p);
    }
    if graph.node_count() == 0 {
        return Err(GraphError::invalid("an empty set of points was supplied"));
    }

    let nodes: Vec<N> = graph.nodes().cloned().collect();
    for (i, first) in nodes.iter().enumerate() {
        for second in &nodes[i + 1..] {
            let distance = euclidean(first.coords(), second.coords());
            if (distance - spacing).abs() <= SPACING_EPSILON {
                graph.put_edge_value(first.clone(), second.clone(), distance)?;
            }
        }
    }
    log::debug!(
        "grid_from_points: {} nodes, {} edges at spacing {spacing}",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Undirected lattice over every point of `range`.
///
/// Horizontal and vertical edges weigh `1.0`; with [`Connectivity::Eight`]
/// diagonal edges weigh `√2`.
pub fn grid(range: Range, connectivity: Connectivity) -> ValueGraph<Point, f64> {
    let mut graph = ValueGraph::undirected();
    for p in range {
        graph.add_node(p);
    }
    let mut connect = |from: Point, to: Point, weight: f64| {
        // Every shift is non-zero, so `from != to`.
        if range.contains(to) {
            graph.insert_edge(from, to, weight);
        }
    };
    for p in range {
        connect(p, p.shift(1, 0), 1.0);
        connect(p, p.shift(0, 1), 1.0);
        if connectivity == Connectivity::Eight {
            connect(p, p.shift(1, 1), SQRT_2);
            connect(p, p.shift(-1, 1), SQRT_2);
        }
    }
    graph
}

/// Same nodes and edges as `graph`, every edge weighing `1.0`.
pub fn unit_weights<N: Node, V>(graph: &ValueGraph<N, V>) -> ValueGraph<N, f64> {
    graph.map_values(|_| 1.0)
}

/// Random undirected graph with self loops allowed.
///
/// Creates `node_count` distinct nodes by feeding `node_creator` coordinates
/// drawn uniformly from `[0, 1)`, then visits every ordered pair of nodes
/// (a node paired with itself included) and connects it with probability
/// `density`. Edges weigh `1.0`.
///
/// Fails when `node_count` is zero, `density` is outside `(0, 1]`, or the
/// creator keeps returning nodes the graph already holds.
pub fn random_graph<N, F>(
    node_count: usize,
    density: f64,
    rng: &mut impl Rng,
    mut node_creator: F,
) -> Result<ValueGraph<N, f64>, GraphError>
where
    N: Node,
    F: FnMut(f64, f64) -> N,
{
    if node_count == 0 {
        return Err(GraphError::invalid("node count must be positive"));
    }
    if !(density > 0.0 && density <= 1.0) {
        return Err(GraphError::invalid(format!(
            "density must be in (0, 1], got {density}"
        )));
    }

    let mut graph = ValueGraph::undirected().allows_self_loops(true);
    while graph.node_count() < node_count {
        let mut duplicates = 0;
        while !graph.add_node(node_creator(rng.random(), rng.random())) {
            duplicates += 1;
            if duplicates >= MAX_DUPLICATE_DRAWS {
                return Err(GraphError::invalid(format!(
                    "node creator produced {duplicates} duplicates in a row after {} nodes",
                    graph.node_count()
                )));
            }
        }
    }

    let nodes: Vec<N> = graph.nodes().cloned().collect();
    for first in &nodes {
        for second in &nodes {
            if rng.random::<f64>() < density {
                graph.put_edge_value(first.clone(), second.clone(), 1.0)?;
            }
        }
    }
    log::debug!(
        "random_graph: {} nodes, {} edges at density {density}",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Copy `network` into a [`ValueGraph`] whose edge values are `weight` of the
/// network's edges.
///
/// The network has no node listing, so the caller supplies `nodes`; every
/// successor of those nodes is copied along with its edge, and all of
/// `nodes` are kept even when isolated. Self loops are allowed in the result
/// only if the network has one.
///
/// Fails when the network lists a successor without an edge connecting it.
pub fn from_network<N, G, W>(
    network: &G,
    nodes: impl IntoIterator<Item = N>,
    directed: bool,
    weight: W,
) -> Result<ValueGraph<N, f64>, GraphError>
where
    N: Node,
    G: Network<N> + ?Sized,
    W: Fn(&G::Edge) -> f64,
{
    let mut edges = Vec::new();
    let mut order = Vec::new();
    let mut successors = Vec::new();
    for node in nodes {
        successors.clear();
        network.successors(&node, &mut successors);
        for successor in successors.drain(..) {
            let Some(edge) = network.edge_connecting(&node, &successor) else {
                return Err(GraphError::invalid(format!(
                    "{successor:?} is listed as a successor of {node:?} without a connecting edge"
                )));
            };
            edges.push((node.clone(), successor, weight(edge)));
        }
        order.push(node);
    }

    let self_loops = edges.iter().any(|(a, b, _)| a == b);
    let mut graph = if directed {
        ValueGraph::directed()
    } else {
        ValueGraph::undirected()
    }
    .allows_self_loops(self_loops);
    for node in order {
        graph.add_node(node);
    }
    for (from, to, value) in edges {
        graph.put_edge_value(from, to, value)?;
    }
    log::debug!(
        "from_network: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn points_at_spacing_are_connected() {
        let points = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(1, 1)];
        let g = grid_from_points(points, 1.0).unwrap();
        assert_eq!(g.node_count(), 4);
        assert!(g.has_edge_connecting(&Point::new(0, 0), &Point::new(1, 0)));
        assert!(g.has_edge_connecting(&Point::new(1, 0), &Point::new(2, 0)));
        assert!(g.has_edge_connecting(&Point::new(1, 1), &Point::new(1, 0)));
        // Distance 2 and √2 pairs stay apart.
        assert!(!g.has_edge_connecting(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(!g.has_edge_connecting(&Point::new(0, 0), &Point::new(1, 1)));
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn diagonal_spacing_uses_distance_as_weight() {
        let points = [Point::new(0, 0), Point::new(1, 1), Point::new(2, 0)];
        let g = grid_from_points(points, SQRT_2).unwrap();
        assert_eq!(g.edge_count(), 2);
        let w = *g.edge_value(&Point::new(1, 1), &Point::new(2, 0)).unwrap();
        assert!((w - SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn grid_from_points_rejects_bad_input() {
        assert!(matches!(
            grid_from_points(Vec::<Point>::new(), 1.0),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            grid_from_points([Point::ZERO], 0.0),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            grid_from_points([Point::ZERO], f64::NAN),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn four_connected_grid() {
        let g = grid(Range::new(0, 0, 3, 2), Connectivity::Four);
        assert_eq!(g.node_count(), 6);
        // 2 rows * 2 horizontal + 3 columns * 1 vertical.
        assert_eq!(g.edge_count(), 7);
        assert!(!g.has_edge_connecting(&Point::new(0, 0), &Point::new(1, 1)));
        assert!(g.edges().all(|(_, _, w)| *w == 1.0));
    }

    #[test]
    fn grid_has_no_self_loops() {
        let g = grid(Range::new(0, 0, 4, 3), Connectivity::Eight);
        assert!(!g.self_loops_allowed());
        assert!(g.edges().all(|(a, b, _)| a != b));
        for p in Range::new(0, 0, 4, 3) {
            assert!(!g.has_edge_connecting(&p, &p));
            assert!(g.successors(&p).all(|n| *n != p));
        }
    }

    #[test]
    fn eight_connected_grid() {
        let g = grid(Range::new(0, 0, 3, 3), Connectivity::Eight);
        assert_eq!(g.node_count(), 9);
        // 12 straight edges, 2 diagonals per 2x2 block.
        assert_eq!(g.edge_count(), 12 + 2 * 4);
        assert_eq!(g.edge_value(&Point::new(2, 0), &Point::new(1, 1)), Some(&SQRT_2));
        assert_eq!(g.edge_value(&Point::new(1, 1), &Point::new(1, 2)), Some(&1.0));
    }

    #[test]
    fn unit_weights_preserves_structure() {
        let mut g = ValueGraph::directed();
        g.put_edge_value('a', 'b', 7.5).unwrap();
        g.put_edge_value('b', 'c', 0.5).unwrap();
        g.add_node('d');
        let unit = unit_weights(&g);
        assert_eq!(
            unit.nodes().collect::<Vec<_>>(),
            g.nodes().collect::<Vec<_>>()
        );
        let edges: Vec<_> = unit.edges().map(|(a, b, w)| (*a, *b, *w)).collect();
        assert_eq!(edges, vec![('a', 'b', 1.0), ('b', 'c', 1.0)]);
        assert!(unit.is_directed());
    }

    #[test]
    fn network_copy_applies_weight() {
        let mut words = ValueGraph::directed();
        words.put_edge_value('a', 'b', "one").unwrap();
        words.put_edge_value('b', 'c', "three").unwrap();
        words.put_edge_value('c', 'a', "").unwrap();
        words.add_node('z');

        let g = from_network(&words, words.nodes().copied(), true, |w: &&str| w.len() as f64).unwrap();
        assert!(g.is_directed());
        assert!(!g.self_loops_allowed());
        assert_eq!(g.nodes().copied().collect::<String>(), "abcz");
        let edges: Vec<_> = g.edges().map(|(a, b, w)| (*a, *b, *w)).collect();
        assert_eq!(edges, vec![('a', 'b', 3.0), ('b', 'c', 5.0), ('c', 'a', 0.0)]);
    }

    #[test]
    fn network_copy_keeps_undirected_edges_and_self_loops() {
        let mut g = ValueGraph::undirected().allows_self_loops(true);
        g.put_edge_value(1u8, 2, 2.0).unwrap();
        g.put_edge_value(2, 2, 4.0).unwrap();

        let copy = from_network(&g, [1u8, 2], false, |w: &f64| w / 2.0).unwrap();
        assert!(copy.self_loops_allowed());
        assert_eq!(copy.edge_count(), 2);
        assert_eq!(copy.edge_value(&2, &1), Some(&1.0));
        assert_eq!(copy.edge_value(&2, &2), Some(&2.0));
    }

    #[test]
    fn network_copy_requires_connecting_edges() {
        struct Broken;
        impl Network<u8> for Broken {
            type Edge = f64;
            fn successors(&self, node: &u8, buf: &mut Vec<u8>) {
                if *node == 0 {
                    buf.push(1);
                }
            }
            fn edge_connecting(&self, _: &u8, _: &u8) -> Option<&f64> {
                None
            }
        }
        assert!(matches!(
            from_network(&Broken, [0u8, 1], true, |w: &f64| *w),
            Err(GraphError::InvalidArgument(_))
        ));
    }

    #[test]
    fn random_graph_has_requested_nodes() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = random_graph(200, 0.05, &mut rng, |x, y| {
            ((x * 1e6) as u32, (y * 1e6) as u32)
        })
        .unwrap();
        assert_eq!(g.node_count(), 200);
        assert!(!g.is_directed());
        assert!(g.self_loops_allowed());
        assert!(g.edges().all(|(_, _, w)| *w == 1.0));
    }

    #[test]
    fn full_density_connects_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let g = random_graph(10, 1.0, &mut rng, |x, y| ((x * 1e9) as u64, (y * 1e9) as u64)).unwrap();
        // Every unordered pair plus every self loop.
        assert_eq!(g.edge_count(), 10 * 9 / 2 + 10);
    }

    #[test]
    fn random_graph_rejects_bad_arguments() {
        let mut rng = StdRng::seed_from_u64(3);
        let creator = |x: f64, y: f64| ((x * 1e6) as u32, (y * 1e6) as u32);
        assert!(random_graph(0, 0.5, &mut rng, creator).is_err());
        assert!(random_graph(5, 0.0, &mut rng, creator).is_err());
        assert!(random_graph(5, 1.5, &mut rng, creator).is_err());
        assert!(random_graph(5, f64::NAN, &mut rng, creator).is_err());
        // Only one distinct node can ever be created.
        assert!(matches!(
            random_graph(2, 0.5, &mut rng, |_, _| 0u8),
            Err(GraphError::InvalidArgument(_))
        ));
    }
}
