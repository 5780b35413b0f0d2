//! `include-scout infer` command implementation.

use colored::Colorize;
use include_scout::{
    Error, IncludeProcessor, ScanConfig, SearchDirectoryKind, search_directory_args,
};

use super::display::ProgressLine;

/// How the inferred directories are printed.
#[derive(Debug, Clone, Copy)]
pub enum Output {
    /// One directory per line with a summary
    Human,
    /// Compiler flags, one per line
    Flags(SearchDirectoryKind),
    /// A JSON array of directories
    Json,
}

impl Output {
    /// Pick the output mode from the command-line switches.
    pub fn new(args: bool, system: bool, json: bool) -> Self {
        if args {
            Self::Flags(if system {
                SearchDirectoryKind::System
            } else {
                SearchDirectoryKind::User
            })
        } else if json {
            Self::Json
        } else {
            Self::Human
        }
    }
}

/// Run the infer command.
pub fn run(config: &ScanConfig, output: Output, show_progress: bool) -> Result<(), Error> {
    let source_files = config.collect_source_files();

    let progress = ProgressLine::new(
        "Inferring",
        show_progress && matches!(output, Output::Human),
    );
    let inferred = IncludeProcessor::new()
        .quantile_count(config.quantiles)
        .header_search_directories(
            &source_files,
            &config.candidate_trees(),
            &config.header_search_directories(),
            |fraction| progress.update(fraction),
        );

    match output {
        Output::Json => println!("{}", serde_json::to_string_pretty(&inferred)?),
        Output::Flags(kind) => {
            for arg in search_directory_args(&inferred, kind) {
                println!("{arg}");
            }
        }
        Output::Human => {
            for dir in &inferred {
                println!("  {} {dir}", "•".dimmed());
            }
            println!();
            println!(
                "{} {} search directories from {} source files",
                "Inferred".green().bold(),
                inferred.len(),
                source_files.len()
            );
        }
    }

    Ok(())
}
