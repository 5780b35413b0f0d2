//! `include-scout unresolved` command implementation.

use colored::Colorize;
use include_scout::{Error, IncludeProcessor, ScanConfig};

use super::display::ProgressLine;

/// Run the unresolved command.
pub fn run(config: &ScanConfig, json: bool, show_progress: bool) -> Result<(), Error> {
    let source_files = config.collect_source_files();
    if source_files.is_empty() && !json {
        println!("{}", "No source files found".yellow());
        return Ok(());
    }

    let progress = ProgressLine::new("Scanning", show_progress);
    let unresolved = IncludeProcessor::new()
        .quantile_count(config.quantiles)
        .unresolved_include_directives(
            &source_files,
            &config.indexed_paths(),
            &config.header_search_directories(),
            |fraction| progress.update(fraction),
        );

    if json {
        println!("{}", serde_json::to_string_pretty(&unresolved)?);
        return Ok(());
    }

    for directive in &unresolved {
        println!(
            "{}:{}: {} {}",
            directive.including_file.to_string().white().bold(),
            directive.line_number,
            "cannot resolve include".red(),
            directive.spelled()
        );
    }

    println!();
    if unresolved.is_empty() {
        println!(
            "{} all includes in {} source files resolve",
            "OK".green().bold(),
            source_files.len()
        );
    } else {
        println!(
            "{} {} unresolved includes in {} source files",
            "Found".yellow().bold(),
            unresolved.len(),
            source_files.len()
        );
    }

    Ok(())
}
