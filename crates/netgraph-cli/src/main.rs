#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "netgraph: directed network analysis",
    long_about = None
)]
struct Cli {
    /// Read configuration from this TOML file instead of the default lookup.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: pretty, text, or json.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Compute structural metrics for a network",
        after_help = "EXAMPLES:\n    netgraph analyze network.json\n    netgraph analyze network.json --format json --no-geodesic"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Decompose a network into strongly connected components",
        after_help = "EXAMPLES:\n    netgraph scc network.json\n    netgraph scc network.json --min-size 2"
    )]
    Scc(cmd::scc::SccArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NETGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "netgraph=debug,netgraph_core=debug,info"
        } else {
            "netgraph=info,warn"
        })
    });

    let format = env::var("NETGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout carries command output only.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let project_root = env::current_dir().context("Failed to read current directory")?;
    let config = netgraph_core::config::resolve_config(cli.config.as_deref(), &project_root)?;
    debug!(?config, "resolved configuration");

    let mode = output::resolve_output_mode(cli.format, cli.json);

    match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, &config, mode),
        Commands::Scc(ref args) => cmd::scc::run_scc(args, &config, mode),
    }
}
