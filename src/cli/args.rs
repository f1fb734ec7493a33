//! CLI argument definitions using clap
//!
//! Commands:
//! - nagga-api init --config <path>
//! - nagga-api start --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// NAGGA - CRUD and reporting API for the retail schema
#[derive(Parser, Debug)]
#[command(name = "nagga-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./nagga.json")]
        config: PathBuf,
    },

    /// Start the API server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./nagga.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
