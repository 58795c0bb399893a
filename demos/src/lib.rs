//! Random maze shared by the demos.
//!
//! A maze is a grid graph with some cells turned into walls by removing all
//! their edges. Rendering overlays a path on the map.

use std::collections::HashSet;

use graphex_core::{Point, Range};
use graphex_graphs::{Connectivity, ValueGraph, grid};
use rand::{Rng, RngExt};

/// Grid graph plus the cells that were walled off.
pub struct Maze {
    pub range: Range,
    pub graph: ValueGraph<Point, f64>,
    pub walls: HashSet<Point>,
}

impl Maze {
    /// Build a `width` x `height` maze where each cell other than `keep` is a
    /// wall with probability `wall_density`.
    pub fn generate(
        width: i32,
        height: i32,
        connectivity: Connectivity,
        wall_density: f64,
        keep: &[Point],
        rng: &mut impl Rng,
    ) -> Self {
        let range = Range::new(0, 0, width, height);
        let mut graph = grid(range, connectivity);
        let mut walls = HashSet::new();
        for p in range {
            if keep.contains(&p) || rng.random::<f64>() >= wall_density {
                continue;
            }
            for n in p.neighbors_4().into_iter().chain(p.diagonals()) {
                graph.remove_edge(&p, &n);
            }
            walls.insert(p);
        }
        Self {
            range,
            graph,
            walls,
        }
    }

    /// ASCII map: `#` walls, `*` path cells, `S`/`G` path endpoints.
    pub fn render(&self, path: &[Point]) -> String {
        let on_path: HashSet<Point> = path.iter().copied().collect();
        let mut out = String::with_capacity(self.range.len() + self.range.height() as usize);
        for y in self.range.min.y..self.range.max.y {
            for x in self.range.min.x..self.range.max.x {
                let p = Point::new(x, y);
                let c = if path.first() == Some(&p) {
                    'S'
                } else if path.last() == Some(&p) {
                    'G'
                } else if on_path.contains(&p) {
                    '*'
                } else if self.walls.contains(&p) {
                    '#'
                } else {
                    '.'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }
}
