use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Berth, a docking layout engine for tabbed tool and document windows.
#[derive(Parser, Debug)]
#[command(name = "berth", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (for example `berth=debug`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the sample layout and print its bounds.
    Demo {
        /// Write the layout as JSON to this file.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Load a saved layout with placeholder contents and print a report.
    Inspect { file: PathBuf },
    /// Apply a JSON list of dock commands to the sample layout.
    Script { file: PathBuf },
    /// Print the effective configuration as TOML.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}
