//! Depths CLI - run the scripted dungeon harness from the command line.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// Depths - a deterministic roguelike turn harness
#[derive(Parser, Debug)]
#[command(name = "depths")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the scripted walk and print every event
    Run {
        /// TOML config file (default: built-in settings)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum turns (default: 10)
        #[arg(short, long)]
        turns: Option<u32>,

        /// Driver iterations (default: 20)
        #[arg(short, long)]
        iterations: Option<u32>,

        /// Floor generator seed (default: 0)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Print only the final stats (applies to text and JSON)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the effective configuration as TOML
    Config {
        /// TOML config file to merge over the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Route `log` output to stderr so it never mixes with event output.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Stderr)
        .format(|fmt, record| writeln!(fmt, "[{}] {}", record.level(), record.args()));
    builder.init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Run {
            config,
            turns,
            iterations,
            seed,
            format,
            quiet,
        } => cli::run::execute(config.as_deref(), turns, iterations, seed, format, quiet),

        Commands::Config { config } => cli::show_config::execute(config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
