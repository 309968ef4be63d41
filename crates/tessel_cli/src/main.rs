//! Tessel CLI
//!
//! Inspect recorded display lists stored as JSON:
//! - `tessel dump` prints the s-expression debug trace
//! - `tessel bounds` prints per-item bounds
//! - `tessel replay` replays against a call-logging surface

mod commands;
mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tessel_display_list::{ReplayConfig, ResourceHeap};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ResourceManifest;

/// Inspect and replay Tessel display lists
#[derive(Parser, Debug)]
#[command(name = "tessel")]
#[command(about = "Inspect and replay recorded display lists")]
#[command(version)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the debug trace of a display list
    Dump(DumpArgs),
    /// Print the local bounds of every measurable item
    Bounds(BoundsArgs),
    /// Replay a display list and print a summary
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct DumpArgs {
    /// Display list JSON file
    list: PathBuf,

    /// Append a count of items per type
    #[arg(long)]
    counts: bool,
}

#[derive(Args, Debug)]
struct BoundsArgs {
    /// Display list JSON file
    list: PathBuf,

    /// Also list items without bounds
    #[arg(short, long)]
    all: bool,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Display list JSON file
    list: PathBuf,

    /// Resource manifest (TOML) providing images, fonts and media players
    #[arg(short, long)]
    resources: Option<PathBuf>,

    /// Trace every applied item
    #[arg(long)]
    trace_items: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Dump(args) => {
            let list = commands::load_display_list(&args.list)?;
            print!("{}", commands::dump_report(&list, args.counts));
        }
        Command::Bounds(args) => {
            let list = commands::load_display_list(&args.list)?;
            let bounds = commands::measure_bounds(&list)?;
            print!("{}", commands::bounds_report(&bounds, args.all));
        }
        Command::Replay(args) => {
            let list = commands::load_display_list(&args.list)?;
            let heap = match &args.resources {
                Some(path) => {
                    let manifest = ResourceManifest::load(path)?;
                    info!(resources = manifest.resource_count(), "loaded resource manifest");
                    manifest.into_heap()?
                }
                None => ResourceHeap::new(),
            };
            let config = ReplayConfig::default().with_trace_items(args.trace_items);
            let outcome = commands::replay(&list, &heap, config)?;
            print!("{}", commands::replay_report(&outcome));
        }
    }

    Ok(())
}
