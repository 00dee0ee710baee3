//! CLI frontend for Final Rose, a dating-show elimination game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "finalrose",
    about = "Final Rose: win the heart, survive the ceremonies",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a season interactively
    Play {
        /// RNG seed for a reproducible season
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Show format: classic, boston, weekly
        #[arg(short, long, default_value = "boston")]
        preset: String,

        /// Eliminate by weighted random draw instead of ranked cutoff
        #[arg(long)]
        weighted: bool,

        /// Write the season journal to this file (.md or .txt)
        #[arg(long)]
        journal: Option<PathBuf>,
    },

    /// Run a season with automatic answers and print every ceremony
    Simulate {
        /// RNG seed for a reproducible season
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Show format: classic, boston, weekly
        #[arg(short, long, default_value = "boston")]
        preset: String,

        /// Eliminate by weighted random draw instead of ranked cutoff
        #[arg(long)]
        weighted: bool,

        /// Name of the simulated player
        #[arg(short, long, default_value = "Player")]
        name: String,

        /// Print the season as JSON
        #[arg(long)]
        json: bool,

        /// Write the season journal to this file (.md or .txt)
        #[arg(long)]
        journal: Option<PathBuf>,
    },

    /// Generate a cast and print it
    Roster {
        /// RNG seed for a reproducible cast
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Show format: classic, boston, weekly
        #[arg(short, long, default_value = "boston")]
        preset: String,

        /// Name of the player seated with the cast
        #[arg(short, long, default_value = "Player")]
        name: String,

        /// Print the cast as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available show formats
    Presets,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            preset,
            weighted,
            journal,
        } => commands::play::run(&preset, seed, weighted, journal.as_deref()),
        Commands::Simulate {
            seed,
            preset,
            weighted,
            name,
            json,
            journal,
        } => commands::simulate::run(&preset, seed, weighted, &name, json, journal.as_deref()),
        Commands::Roster {
            seed,
            preset,
            name,
            json,
        } => commands::roster::run(&preset, seed, &name, json),
        Commands::Presets => commands::presets::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
