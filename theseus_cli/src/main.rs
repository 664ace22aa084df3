use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::generate::GenerateSubcommands;

mod generate;
mod nodes;
mod route;
mod topology_file;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the least-cost traversal between two nodes of a topology
    Route {
        #[command(flatten)]
        args: route::RouteArgs,
    },
    /// List every node of a topology
    Nodes {
        /// Topology description (JSON); defaults to the built-in reference network
        #[arg(short, long)]
        topology: Option<PathBuf>,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        commands: GenerateSubcommands,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Route { args } => route::run(args),
        Commands::Nodes { topology } => nodes::run(topology.as_deref()),
        Commands::Generate { commands } => generate::run(commands),
    }
}
