use std::path::PathBuf;

use clap::Args;
use theseus_core::{AStar, SearchOptions};

use crate::topology_file;

#[derive(Args)]
pub struct RouteArgs {
    /// Topology description (JSON); defaults to the built-in reference network
    #[arg(short, long)]
    pub topology: Option<PathBuf>,

    /// Start node
    #[arg(long, value_name = "NODE")]
    pub from: String,

    /// Goal node
    #[arg(long, value_name = "NODE")]
    pub to: String,

    /// Allow the search to reopen settled nodes (textbook A*)
    #[arg(long)]
    pub reopen_closed: bool,

    /// Abort after settling this many nodes
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let config = topology_file::load(args.topology.as_deref())?;
    let graph = config.build_graph()?;
    let heuristic = config.build_heuristic();

    let options = SearchOptions {
        reopen_closed: args.reopen_closed,
        iteration_limit: args.max_iterations,
    };
    let astar = AStar::with_options(heuristic, options);

    match astar.calc_path(&graph, &args.from, &args.to)? {
        Some(path) => print!("{path}"),
        None => println!("no path found from {} to {}", args.from, args.to),
    }

    Ok(())
}
