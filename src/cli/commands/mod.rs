//! Command implementations for the event manager CLI
//!
//! There is a single command: run the whole pipeline once.
//! - `run`: preflight, letters and report
//! - `shared`: logging setup and console output

pub mod run;
pub mod shared;

pub use run::{run_with_config, run_with_lookup};

use crate::Result;
use crate::app::services::pipeline::PipelineOutcome;
use crate::cli::args::Args;
use crate::config::Config;
use std::io::IsTerminal;

/// Main command runner for the event manager
///
/// Prints the banner, loads configuration from the environment and runs the
/// pipeline against the live legislator directory.
pub fn run(_args: Args) -> Result<PipelineOutcome> {
    shared::print_banner();

    let config = Config::load()?;
    let outcome = run_with_config(&config, std::io::stderr().is_terminal())?;

    shared::print_summary(&outcome);
    Ok(outcome)
}
