//! docset CLI - multi-repository API documentation aggregator.
//!
//! Provides commands for:
//! - `build`: Resolve documentation sets and write the site configuration
//! - `status`: Report how each documentation set resolves

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, StatusArgs};
use output::Output;

/// docset - multi-repository API documentation aggregator.
#[derive(Parser)]
#[command(name = "docset", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the website configuration for all published documentation sets.
    Build(BuildArgs),
    /// Show how each documentation set resolves.
    Status(StatusArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Build(args) => args.content.verbose,
            Self::Status(args) => args.content.verbose,
        }
    }
}

/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.command.verbose()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Status(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        // Only meaningful when RUST_LOG is not set for the test run
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        assert_eq!(log_filter(false).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_verbose_is_info() {
        assert_eq!(log_filter(true).max_level_hint(), Some(LevelFilter::INFO));
    }
}
