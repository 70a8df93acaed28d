//! CLI command definitions and dispatch for the `drunch` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI is for café staff:
//! browse the menu, review incoming orders/reservations/messages, test the
//! assistant's answers, and run the API server.

pub mod ask;
pub mod menu;
pub mod records;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Drunch Café ordering service.
#[derive(Parser)]
#[command(name = "drunch", version, about, long_about = None)]
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

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the menu catalog.
    Menu {
        /// Restrict to one category (e.g. breakfast, lunch).
        #[arg(short, long)]
        category: Option<String>,

        /// Only featured items.
        #[arg(long)]
        featured: bool,
    },

    /// List recent orders, newest first.
    Orders {
        /// Maximum number of orders to show.
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// List recent reservations, newest first.
    Reservations {
        /// Maximum number of reservations to show.
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// List recent contact messages, newest first.
    Messages {
        /// Maximum number of messages to show.
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// Ask the assistant a question and print its answer.
    Ask {
        /// The question text.
        question: String,
    },

    /// Start the REST API server.
    Serve {
        /// Address to bind to (overrides the configured http_addr).
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}
