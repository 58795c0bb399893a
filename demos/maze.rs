//! Solve a random maze with A*, Dijkstra and IDA*.
//!
//! Run: cargo run --bin maze -- --width 40 --height 16 --seed 7

use clap::Parser;
use graphex_core::Point;
use graphex_demos::Maze;
use graphex_graphs::Connectivity;
use graphex_paths::{Dijkstra, IdaStar, Metric, PathError, Pathfinder, PathfinderBuilder, path_cost};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How far along the A* path IDA* is asked to go.
const IDA_STEPS: usize = 10;

#[derive(Parser)]
#[command(version, about = "Solve a random maze with every graphex engine")]
struct Args {
    #[arg(long, default_value_t = 40)]
    width: i32,
    #[arg(long, default_value_t = 16)]
    height: i32,
    #[arg(long, default_value_t = 7)]
    seed: u64,
    /// Probability for a cell to be a wall.
    #[arg(long, default_value_t = 0.25)]
    walls: f64,
    /// Allow diagonal moves (octile heuristic instead of manhattan).
    #[arg(long)]
    diagonal: bool,
}

fn weight(edge: &f64) -> f64 {
    *edge
}

fn run(args: &Args) -> Result<(), PathError> {
    let (connectivity, metric) = if args.diagonal {
        (Connectivity::Eight, Metric::Octile)
    } else {
        (Connectivity::Four, Metric::Manhattan)
    };
    let start = Point::new(0, 0);
    let goal = Point::new(args.width - 1, args.height - 1);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let maze = Maze::generate(args.width, args.height, connectivity, args.walls, &[start, goal], &mut rng);

    let mut astar = PathfinderBuilder::new()
        .weight(weight)
        .heuristic(metric.heuristic::<Point>())
        .build_astar()?;
    let path = astar.find_path(&maze.graph, &start, &goal)?;
    print!("{}", maze.render(&path));
    if path.is_empty() {
        println!("no path from {start} to {goal} (seed {})", args.seed);
        return Ok(());
    }
    println!("astar ({metric:?}): {} steps, cost {:.3}", path.len() - 1, path_cost(&maze.graph, weight, &path)?);

    let mut dijkstra: Dijkstra<Point, f64> = Dijkstra::new(weight);
    let reference = dijkstra.find_path(&maze.graph, &start, &goal)?;
    println!("dijkstra: {} steps, cost {:.3}", reference.len() - 1, path_cost(&maze.graph, weight, &reference)?);

    // IDA* re-explores the whole frontier on every pass; give it a short leg.
    let waypoint = path[IDA_STEPS.min(path.len() - 1)];
    let mut ida = IdaStar::new(weight, metric.heuristic::<Point>());
    let leg = ida.find_path(&maze.graph, &start, &waypoint)?;
    println!(
        "idastar {start} -> {waypoint}: {} steps, cost {:.3}",
        leg.len().saturating_sub(1),
        path_cost(&maze.graph, weight, &leg)?
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
