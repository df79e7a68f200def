//! CLI interface module
//!
//! This module provides command-line interface functionality for bookmarker.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    ConfigError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::BookmarkError> for CliError {
    fn from(err: crate::errors::BookmarkError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => commands::config_generate(output_path, force).await,
        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by the server runtime".to_string(),
        )),
    }
}
