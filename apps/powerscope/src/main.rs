//! # Powerscope
//!
//! The command-line driver for the powerscope measurability engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │             apps/powerscope (THE BINARY)             │
//! │                                                      │
//! │   ┌────────────┐   stdout: reports / JSON            │
//! │   │    CLI     │   stderr: tracing logs              │
//! │   │   (clap)   │                                     │
//! │   └─────┬──────┘                                     │
//! │         ▼                                            │
//! │   ┌──────────────────┐                               │
//! │   │ powerscope-core  │                               │
//! │   │   (THE LOGIC)    │                               │
//! │   └──────────────────┘                               │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! powerscope list
//! powerscope analyze social-media
//! powerscope compare education academic-publishing
//! powerscope --json overview
//! powerscope tour
//! ```

use clap::Parser;
use powerscope::cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    // Keep stdout parseable in JSON mode.
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` picks debug over warn.
/// `POWERSCOPE_LOG_FORMAT=json` switches to machine-parseable lines.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("POWERSCOPE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_directive = if verbose {
        "powerscope=debug"
    } else {
        "powerscope=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the Powerscope startup banner.
fn print_banner() {
    println!(
        r#"
  ╔══════════════════════════════════════════════════════╗
  ║                     POWERSCOPE                       ║
  ║        Analyzing Power Through Measurability         ║
  ╚══════════════════════════════════════════════════════╝

  v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
