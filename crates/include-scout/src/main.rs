//! Include Scout CLI - include-dependency discovery from the command line.
//!
//! Scans C and C++ sources for `#include` directives, reports the ones that
//! resolve to no file, and infers search directories that would fix them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::project::ProjectOptions;

/// Include Scout: find unresolved includes and missing header search paths.
#[derive(Parser)]
#[command(name = "include-scout")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to ./include-scout.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    project: ProjectOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List include directives that resolve to no file
    Unresolved {
        /// Print the directives as JSON
        #[arg(long)]
        json: bool,
    },

    /// Infer header search directories from the candidate trees
    Infer {
        /// Print the directories as compiler flags
        #[arg(long, conflicts_with = "json")]
        args: bool,

        /// Emit flags as -isystem instead of -I
        #[arg(long, requires = "args")]
        system: bool,

        /// Print the directories as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let show_progress = cli.verbose == 0;

    let result = match cli.command {
        Commands::Unresolved { json } => cli
            .project
            .load(cli.config.as_deref())
            .and_then(|config| cli::unresolved::run(&config, json, show_progress && !json)),
        Commands::Infer { args, system, json } => {
            let output = cli::infer::Output::new(args, system, json);
            cli.project
                .load(cli.config.as_deref())
                .and_then(|config| cli::infer::run(&config, output, show_progress && !json))
        }
        Commands::Init { force } => cli::init::run(cli.config.as_deref(), force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            // Show cause chain for nested errors
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
