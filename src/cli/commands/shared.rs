//! Shared components for CLI commands

use crate::Result;
use crate::app::services::pipeline::PipelineOutcome;
use crate::constants::{DEFAULT_LOG_FILTER, STARTUP_BANNER};
use colored::*;
use tracing::debug;

/// Set up structured logging to stderr
///
/// Honours `RUST_LOG`; without it only this crate logs, at info level.
pub fn setup_logging() -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .map_err(|e| crate::Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized");
    Ok(())
}

/// Print the startup banner
pub fn print_banner() {
    println!("{}", STARTUP_BANNER.bright_green().bold());
}

/// Print the end of run summary
pub fn print_summary(outcome: &PipelineOutcome) {
    let stats = &outcome.stats;

    println!("\n{}", "Run Summary".bright_green().bold());
    println!(
        "  Attendees processed: {}",
        stats.records_processed.to_string().bright_white().bold()
    );
    println!(
        "  Letters written:     {}",
        stats.letters_written.to_string().bright_white().bold()
    );
    if stats.output_failures > 0 {
        println!(
            "  Letters failed:      {}",
            stats.output_failures.to_string().bright_red().bold()
        );
    }
    if stats.lookup_fallbacks > 0 {
        println!(
            "  Lookup fallbacks:    {}",
            stats.lookup_fallbacks.to_string().yellow().bold()
        );
    }
    println!(
        "  Report:              {}",
        outcome.report_path.display().to_string().bright_white()
    );
    println!("\n{}", outcome.report.render());
}
