use anyhow::Context;
use clap::Parser;
use colored::*;
use event_manager::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments (none are accepted beyond --help/--version)
    let args = Args::parse();

    if let Err(error) = run(args) {
        eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    commands::shared::setup_logging().context("Failed to start")?;
    commands::run(args).context("Event manager run did not complete")?;
    Ok(())
}
