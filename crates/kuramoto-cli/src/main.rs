//! Kuramoto CLI
//!
//! Runs the sine synchronization simulation for a coupling constant K and
//! either writes a recording for the video encoder or streams frames to
//! stdout.
//!
//! # Exit Codes
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Output could not be written
//! - 4: Invalid input or configuration

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, CliExitCode};

/// Kuramoto sine synchronization simulator
#[derive(Parser)]
#[command(name = "kuramoto-cli")]
#[command(version)]
#[command(about = "Animate sine waves whose phases synchronize through Kuramoto coupling")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    animate: commands::animate::AnimateArgs,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = commands::animate::handle_animate(cli.animate);
    std::process::exit(exit_code);
}
