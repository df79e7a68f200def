//! Mode routing
//!
//! Entry points for the two execution modes:
//! - Server mode (HTTP server, the default)
//! - CLI mode (configuration helpers)

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;

use crate::cli::Commands;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    Server,
    Cli,
}

/// Decide which mode a parsed command line runs in
///
/// No subcommand, or `serve`, starts the server.
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        None | Some(Commands::Serve) => Mode::Server,
        Some(_) => Mode::Cli,
    }
}
