//! Campus CLI - Command-line interface for the campus map
//!
//! Loads a campus graph file and answers questions about it: the
//! shortest route between two locations, what lies under a map point,
//! and what the graph contains.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "campus")]
#[command(author = "Campus Map Contributors")]
#[command(version)]
#[command(about = "Find the shortest walk between campus locations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Graph file to load (defaults to the configured graph)
    #[arg(short, long, global = true)]
    graph: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default configuration in a directory
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show graph statistics and one-way adjacencies
    Info,

    /// Describe a single location
    Show {
        /// Location name
        name: String,
    },

    /// Find the path with the fewest hops between two locations
    Path {
        /// Starting location
        from: String,

        /// Destination location
        to: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find the location drawn under a map point
    At {
        x: i32,
        y: i32,

        /// Hit box half-width (defaults to the configured radius)
        #[arg(short, long)]
        radius: Option<i32>,
    },

    /// Export the graph to JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "campus-graph.json")]
        output: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let graph = cli.graph.as_deref();
    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Info => commands::info(graph),
        Commands::Show { name } => commands::show(graph, &name),
        Commands::Path { from, to, json } => commands::path(graph, &from, &to, json),
        Commands::At { x, y, radius } => commands::at(graph, x, y, radius),
        Commands::Export { output } => commands::export(graph, &output),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
