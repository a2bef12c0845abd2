//! # Powerscope CLI Module
//!
//! This module implements the CLI interface for Powerscope.
//!
//! ## Available Commands
//!
//! - `list` - List the built-in power systems
//! - `analyze` - Measurability summary of one system
//! - `demonstrate` - Privilege → limitation → measurement walkthrough
//! - `compare` - Side-by-side comparison of two systems
//! - `overview` - Comparative overview of every system (default)
//! - `themes` - Five-theme reading across every system
//! - `tour` - Non-interactive guided walkthrough

mod commands;

use clap::{Parser, Subcommand};
use powerscope_core::PowerError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Powerscope - measurability analysis of power systems
///
/// Power is visible through its limitations: the more concretely a
/// privilege is bounded, the more its reach can be measured.
#[derive(Parser, Debug)]
#[command(name = "powerscope")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long = "json", global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the built-in power systems
    List,

    /// Show the measurability summary of a system
    Analyze {
        /// System slug (see `list`)
        system: String,
    },

    /// Walk through a system's privileges, mechanisms and relations
    Demonstrate {
        /// System slug (see `list`)
        system: String,
    },

    /// Compare the measurability of two systems
    Compare {
        /// First system slug
        first: String,

        /// Second system slug
        second: String,
    },

    /// Comparative overview of every built-in system
    Overview,

    /// Read every built-in system through five themes
    Themes,

    /// Guided walkthrough: deep dive, overview, themes, details, conclusion
    Tour,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), PowerError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::List) => cmd_list(json_mode),
        Some(Commands::Analyze { system }) => cmd_analyze(&system, json_mode),
        Some(Commands::Demonstrate { system }) => cmd_demonstrate(&system, json_mode),
        Some(Commands::Compare { first, second }) => cmd_compare(&first, &second, json_mode),
        Some(Commands::Overview) => cmd_overview(json_mode),
        Some(Commands::Themes) => cmd_themes(json_mode),
        Some(Commands::Tour) => cmd_tour(json_mode),
        None => {
            // No subcommand - show the overview by default
            cmd_overview(json_mode)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
