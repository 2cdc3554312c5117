use clap::Parser;
use std::{
    path::PathBuf,
    process::ExitCode,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use waypoint::{
    WaypointError,
    fs::{SvgAnimation, save_outcome_json},
    search::{FrameCapture, GraphParams, PointGraph, SolveOptions, WiringMode},
};

/// Animated A* search over a random point graph
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "Runs A* on a random point graph and renders the search as an animated SVG", long_about = None)]
struct Args {
    /// Seed of the graph generator. Derived from the clock when absent
    #[arg(long, env = "SEED")]
    seed: Option<u64>,

    /// Number of random points between the two corners
    #[arg(long, default_value_t = 500)]
    nodes: usize,

    /// Side of the square canvas
    #[arg(long, default_value_t = 1000)]
    canvas: u32,

    /// Radius wiring: connect points closer than this
    #[arg(long, default_value_t = 80.0)]
    neighbor_distance: f64,

    /// Radius wiring: maximum neighbors per point
    #[arg(long, default_value_t = 10)]
    max_neighbors: usize,

    /// How points are connected
    #[arg(long, value_enum, default_value_t = WiringMode::Radius)]
    wiring: WiringMode,

    /// Random wiring: number of edges to draw
    #[arg(long, default_value_t = 100)]
    edges: usize,

    /// Where to write the SVG animation
    #[arg(short, long, default_value = "graph.svg")]
    output: PathBuf,

    /// Seconds each intermediate frame is shown
    #[arg(long, default_value_t = 0.1)]
    frame_time: f64,

    /// Seconds the final frame is held
    #[arg(long, default_value_t = 5.0)]
    last_frame_time: f64,

    /// Also dump the search outcome as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Keep only the final frame instead of one per expanded node
    #[arg(long)]
    final_only: bool,

    /// Show a progress bar while rendering frames
    #[arg(long)]
    progress: bool,
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

fn run(args: Args) -> Result<(), WaypointError> {
    let seed = match args.seed {
        Some(seed) => seed,
        None => {
            let seed = clock_seed();
            info!(seed, "no seed given, using the clock");
            seed
        }
    };

    let params = GraphParams {
        num_nodes: args.nodes,
        canvas_size: args.canvas,
        neighbor_distance: args.neighbor_distance,
        max_neighbors: args.max_neighbors,
        wiring: args.wiring,
        num_random_edges: args.edges,
    };
    let graph = PointGraph::generate(&params, seed)?;
    info!(nodes = graph.len(), edges = graph.edges().len(), "graph ready");

    let options = SolveOptions {
        capture: if args.final_only {
            FrameCapture::FinalOnly
        } else {
            FrameCapture::All
        },
    };

    let start_time = Instant::now();
    let outcome = graph.solve(options);
    let elapsed = start_time.elapsed();

    if outcome.found {
        println!("solved in {} ms", elapsed.as_millis());
        if let Some(last) = outcome.frames.last() {
            println!(
                "route: {} nodes, length {:.2}",
                last.path.len(),
                graph.path_length(last)
            );
        }
    } else {
        println!("no solution");
    }
    println!(
        "expanded {} nodes, examined {} edges, {} stale queue offers, {} frames",
        outcome.stats.get_extractions(),
        outcome.stats.get_edges_examined(),
        outcome.stats.get_stale_offers(),
        outcome.frames.len()
    );

    SvgAnimation::new(args.frame_time, args.last_frame_time)
        .with_progress(args.progress)
        .save(&graph, &outcome.frames, &args.output)?;

    if let Some(path) = &args.json {
        save_outcome_json(&outcome, path)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
