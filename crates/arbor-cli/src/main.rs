//! Arbor CLI - run graph algorithms from the command line.
//!
//! Lists the registered algorithms and runs them on a set of built-in sample
//! graphs. Results print as tables or as JSON.

mod commands;
mod output;
mod samples;

use clap::{Parser, Subcommand, ValueEnum};

/// Arbor graph algorithm runner.
///
/// Runs traversal, shortest path, spanning tree, ordering and connectivity
/// algorithms on built-in sample graphs.
#[derive(Parser)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress all output except errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List registered algorithms and their parameters
    List,

    /// List the built-in sample graphs
    Samples,

    /// Run an algorithm on a sample graph
    Run(RunArgs),
}

/// Arguments of the `run` command.
#[derive(clap::Args)]
struct RunArgs {
    /// Algorithm name (see `arbor list`)
    algorithm: String,

    /// Sample graph name (see `arbor samples`)
    #[arg(long, short)]
    sample: String,

    /// Start vertex, for algorithms that take one
    #[arg(long)]
    start: Option<i64>,

    /// Strategy, for algorithms that offer several (e.g. kahn or dfs)
    #[arg(long)]
    strategy: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity; logs go to stderr so JSON output
    // stays parseable.
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::List => commands::list::run(cli.format, cli.quiet),
        Commands::Samples => commands::samples::run(cli.format, cli.quiet),
        Commands::Run(args) => commands::run::run(&args, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
