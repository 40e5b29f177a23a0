//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;

/// Adjust の DAU/WAU/MAU・インストール数を収集して Vertica にロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "adjust-collector")]
#[command(
    about = "Collect DAU/WAU/MAU and install counts from adjust.com and load them into Vertica",
    long_about = None
)]
pub struct Args {
    /// Configuration file (YAML) with Vertica settings and Adjust credentials
    #[arg(value_parser = existing_file)]
    pub config: PathBuf,

    /// Fetch and write the CSV but skip the warehouse load
    #[arg(long)]
    pub dry_run: bool,
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("config file '{}' does not exist or is not a file", value))
    }
}
