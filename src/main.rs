use clap::Parser;
use std::{path::PathBuf, process::ExitCode, time::Instant};
use tracing_subscriber::EnvFilter;
use waypoint::{
    search::{AdjacencyGraph, NodeId, SearchError, SearchOptions},
    statistics::Stats,
};

/// Shortest-path search over weighted planar graphs
#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "A* shortest-path search over weighted planar graphs", long_about = None)]
struct Args {
    /// Path to a JSON graph file. When absent, a random 8-connected grid is generated
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Width of the generated grid
    #[arg(long, default_value_t = 64)]
    width: usize,

    /// Height of the generated grid
    #[arg(long, default_value_t = 64)]
    height: usize,

    /// Probability that a generated grid cell is blocked
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    /// Seed for the generated grid
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write the graph that was searched to this path
    #[arg(long)]
    dump_graph: Option<PathBuf>,

    /// Start node id (defaults to the first node)
    #[arg(short, long)]
    start: Option<usize>,

    /// Goal node id (defaults to the last node)
    #[arg(short = 'e', long)]
    goal: Option<usize>,

    /// JSON file with search options, overridden by the flags below
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Maximum number of node expansions, 0 for unlimited
    #[arg(long)]
    max_depth: Option<usize>,

    /// Maximum running cost of any opened node, 0 for unlimited
    #[arg(long)]
    max_cost: Option<f64>,

    /// Number of times to repeat the search; every run must produce the same answer
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let graph = match &args.graph {
        Some(path) => AdjacencyGraph::load_from_path(path)?,
        None => {
            tracing::info!(
                width = args.width,
                height = args.height,
                density = args.density,
                seed = args.seed,
                "generating random grid"
            );
            AdjacencyGraph::random_grid(args.width, args.height, args.density, args.seed)
        }
    };
    if graph.is_empty() {
        return Err("graph has no nodes".into());
    }
    if let Some(path) = &args.dump_graph {
        graph.save_to_path(path)?;
        tracing::info!(path = %path.display(), "graph written");
    }

    let start = NodeId::from(args.start.unwrap_or(0));
    let goal = NodeId::from(args.goal.unwrap_or(graph.len() - 1));
    for id in [start, goal] {
        if graph.node(id).is_none() {
            return Err(format!("node {id} is not part of the graph").into());
        }
    }

    let mut options = match &args.options {
        Some(path) => SearchOptions::load_from_path(path)?,
        None => SearchOptions::default(),
    };
    if let Some(max_depth) = args.max_depth {
        options.max_depth = Some(max_depth);
    }
    if let Some(max_cost) = args.max_cost {
        options.max_cost = Some(max_cost);
    }

    let mut stats = Stats::new();
    let start_time = Instant::now();
    let first = graph.find_path(start, goal, &options, &mut stats);
    for run in 1..args.repeat {
        let again = graph.find_path(start, goal, &options, &mut stats);
        if again != first {
            return Err(format!("run {run} disagrees with the first search").into());
        }
    }
    let elapsed = start_time.elapsed();

    let found = match &first {
        Ok(path) => {
            let hops: Vec<String> = path.iter().map(NodeId::to_string).collect();
            println!("path: {}", hops.join(" -> "));
            println!("cost: {:.4}", path.cost());
            true
        }
        Err(SearchError::BudgetExhausted { limit }) => {
            println!("no path: budget of {limit} expansions exhausted, try a larger --max-depth");
            false
        }
        Err(SearchError::Unreachable { expanded }) => {
            println!("no path: goal unreachable ({expanded} nodes expanded)");
            false
        }
    };

    stats.dump();
    tracing::info!(
        runs = args.repeat,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "search finished"
    );
    Ok(found)
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
