//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for bookmarker using clap's derive macros.

use clap::{Parser, Subcommand};

/// Bookmarker - time-range bookmarks for audio and video, exported as PDF
#[derive(Parser)]
#[command(name = "bookmarker")]
#[command(version)]
#[command(about = "Record named time-range bookmarks and export them as a PDF", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
