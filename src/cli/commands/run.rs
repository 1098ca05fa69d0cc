//! Pipeline run command
//!
//! Orchestrates one complete run:
//! 1. Preflight: every required input must exist, otherwise nothing runs
//! 2. Load the credential, template and attendee data
//! 3. Stream attendees through the pipeline, writing letters
//! 4. Write the peak registration time report

use crate::Result;
use crate::app::services::attendee_reader::read_attendees;
use crate::app::services::legislator_lookup::{CivicApiLookup, LegislatorLookup, load_api_key};
use crate::app::services::letters::{FileOutputSink, LetterTemplate};
use crate::app::services::pipeline::{EventPipeline, PipelineOutcome};
use crate::config::Config;
use tracing::{debug, info};

/// Run against the civic information directory configured in `config`
pub fn run_with_config(config: &Config, show_progress: bool) -> Result<PipelineOutcome> {
    config.check_prerequisites()?;

    let api_key = load_api_key(&config.input.secret_key_path)?;
    let lookup = CivicApiLookup::new(&config.lookup, api_key)?;
    debug!("Using legislator directory at {}", config.lookup.url);

    execute(config, lookup, show_progress)
}

/// Run with a caller supplied legislator lookup
pub fn run_with_lookup<L: LegislatorLookup>(
    config: &Config,
    lookup: L,
    show_progress: bool,
) -> Result<PipelineOutcome> {
    config.check_prerequisites()?;
    execute(config, lookup, show_progress)
}

fn execute<L: LegislatorLookup>(
    config: &Config,
    lookup: L,
    show_progress: bool,
) -> Result<PipelineOutcome> {
    let template = LetterTemplate::from_file(&config.input.template_path)?;
    let attendees = read_attendees(&config.input.attendees_path)?;

    let sink = FileOutputSink::new(&config.output.letters_dir, &config.output.report_path);
    info!(
        "Writing letters to {} and report to {}",
        config.output.letters_dir.display(),
        config.output.report_path.display()
    );

    let mut pipeline = EventPipeline::new(lookup, template, sink, &config.registration_format);
    pipeline.run(&attendees, show_progress)
}
