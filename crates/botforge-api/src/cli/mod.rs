//! CLI command definitions and dispatch for the `bforge` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI follows a verb-noun
//! pattern (e.g., `bforge list bots`, `bforge delete bot <id>`).

pub mod bot;
pub mod template;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Generate Telegram bot source code and manage the stored results.
#[derive(Parser)]
#[command(name = "bforge", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Bind address (overrides config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config.toml).
        #[arg(long)]
        port: Option<u16>,
    },

    /// List the built-in code templates.
    Templates,

    /// List resources.
    #[command(alias = "ls")]
    List {
        #[command(subcommand)]
        resource: ListResource,
    },

    /// Show a generated bot, including its code.
    Show {
        /// Record id to display.
        id: String,
    },

    /// Delete a resource.
    #[command(alias = "rm")]
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ListResource {
    /// List stored generation records, newest first.
    Bots,
}

#[derive(Subcommand)]
pub enum DeleteResource {
    /// Delete a stored generation record.
    Bot {
        /// Record id to delete.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(long, short)]
        force: bool,
    },
}
