//! `include-scout init` command implementation.

use std::path::Path;

use colored::Colorize;
use include_scout::{CONFIG_FILE_NAME, Error, ScanConfig};

/// Run the init command.
///
/// The starter file uses paths relative to its own directory so it can be
/// committed alongside the project.
pub fn run(config_path: Option<&Path>, force: bool) -> Result<(), Error> {
    let path = config_path.unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));

    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    ScanConfig::starter().save(path)?;
    println!("{} {}", "Created".green().bold(), path.display());

    Ok(())
}
