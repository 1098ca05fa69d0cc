//! Pipeline orchestration
//!
//! Each attendee is normalised, enriched, counted, rendered and written
//! before the next one starts. The report is built once every record has
//! been consumed.

use super::state::PipelineState;
use super::stats::{PipelineOutcome, PipelineStats};
use crate::app::models::{AttendeeRecord, EnrichedRecord, LookupOutcome};
use crate::app::services::legislator_lookup::LegislatorLookup;
use crate::app::services::letters::{LetterRenderer, OutputSink};
use crate::app::services::normalizers::{capitalize_name, normalize_phone, normalize_zipcode};
use crate::app::services::registration_stats::RegistrationStats;
use crate::constants::{TOP_HOURS, TOP_WEEKDAYS};
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

/// Single-run attendee pipeline
///
/// # Example
///
/// ```rust
/// use event_manager::app::models::{AttendeeRecord, Legislator};
/// use event_manager::app::services::letters::{FileOutputSink, LetterTemplate};
/// use event_manager::app::services::pipeline::EventPipeline;
///
/// # fn example(dir: &std::path::Path) -> event_manager::Result<()> {
/// let lookup = |_zip: &str| -> event_manager::Result<Vec<Legislator>> { Ok(Vec::new()) };
/// let template = LetterTemplate::parse("Dear {{name}}")?;
/// let sink = FileOutputSink::new(dir.join("output"), dir.join("report.txt"));
///
/// let mut pipeline = EventPipeline::new(lookup, template, sink, "%m/%d/%y %H:%M");
/// let records = vec![AttendeeRecord::new("1").with_first_name("allison")];
/// let outcome = pipeline.run(&records, false)?;
/// println!("{}", outcome.stats.summary());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EventPipeline<L, R, S> {
    lookup: L,
    renderer: R,
    sink: S,
    /// strftime layout of registration times
    registration_format: String,
    state: PipelineState,
    registration_stats: RegistrationStats,
    stats: PipelineStats,
}

impl<L, R, S> EventPipeline<L, R, S>
where
    L: LegislatorLookup,
    R: LetterRenderer,
    S: OutputSink,
{
    /// Create a pipeline in the `Init` state
    pub fn new(lookup: L, renderer: R, sink: S, registration_format: impl Into<String>) -> Self {
        Self {
            lookup,
            renderer,
            sink,
            registration_format: registration_format.into(),
            state: PipelineState::Init,
            registration_stats: RegistrationStats::new(),
            stats: PipelineStats::new(),
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Hour and weekday tables gathered so far
    pub fn registration_stats(&self) -> &RegistrationStats {
        &self.registration_stats
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// The output sink, e.g. to inspect what was written
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn transition(&mut self, next: PipelineState) {
        debug!("Pipeline state: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Take one attendee through the pipeline
    ///
    /// Only fails when the pipeline no longer accepts records. Lookup,
    /// render and write problems are recovered here and reflected in
    /// [`PipelineStats`].
    pub fn process_record(&mut self, record: &AttendeeRecord) -> Result<EnrichedRecord> {
        match self.state {
            PipelineState::Init => self.transition(PipelineState::Streaming),
            PipelineState::Streaming => {}
            other => {
                return Err(Error::invalid_state(format!(
                    "cannot process attendee {} while {}; reset the pipeline first",
                    record.id, other
                )));
            }
        }

        let zipcode = normalize_zipcode(record.zipcode.as_deref());
        let name = capitalize_name(record.first_name.as_deref());
        let phone = normalize_phone(record.home_phone.as_deref().unwrap_or_default());

        let legislators = self.lookup_legislators(&record.id, &zipcode);

        let registered_at = record.registration_datetime.as_deref().and_then(|raw| {
            self.registration_stats
                .record(raw, &self.registration_format)
        });
        if registered_at.is_none() {
            self.stats.invalid_timestamps += 1;
        }

        let enriched = EnrichedRecord {
            id: record.id.clone(),
            name,
            zipcode,
            phone,
            registered_at,
            legislators,
            document: String::new(),
        };

        let enriched = match self.renderer.render(&enriched) {
            Ok(document) => {
                let enriched = enriched.with_document(document);
                self.deliver(&enriched);
                enriched
            }
            Err(e) => {
                let message = format!("Failed to render letter for attendee {}: {}", enriched.id, e);
                warn!("{}", message);
                self.stats.add_output_failure(message);
                enriched
            }
        };

        self.stats.records_processed += 1;
        Ok(enriched)
    }

    /// Ask the directory, substituting the fallback message on any failure
    fn lookup_legislators(&mut self, id: &str, zipcode: &str) -> LookupOutcome {
        let result = self.lookup.legislators_by_zipcode(zipcode);
        if let Err(e) = &result {
            warn!(
                "Legislator lookup failed for attendee {} ({}): {}",
                id, zipcode, e
            );
            self.stats.lookup_fallbacks += 1;
        }
        LookupOutcome::from_result(result)
    }

    /// Hand a rendered letter to the sink; failures are counted, not raised
    fn deliver(&mut self, enriched: &EnrichedRecord) {
        match self.sink.write_letter(enriched) {
            Ok(path) => {
                debug!("Letter for attendee {} at {}", enriched.id, path.display());
                self.stats.letters_written += 1;
            }
            Err(e) => {
                let message = format!("Failed to write letter for attendee {}: {}", enriched.id, e);
                warn!("{}", message);
                self.stats.add_output_failure(message);
            }
        }
    }

    /// Build the peak time report and hand it to the sink
    ///
    /// Moves the pipeline to `Done`. A report write failure is returned and
    /// leaves the pipeline in `Finalizing` with its tables intact, so
    /// `finalize` can be called again.
    pub fn finalize(&mut self) -> Result<PipelineOutcome> {
        if !self.state.can_finalize() {
            return Err(Error::invalid_state(format!(
                "cannot finalize while {}",
                self.state
            )));
        }
        if self.state != PipelineState::Finalizing {
            self.transition(PipelineState::Finalizing);
        }

        let report = self
            .registration_stats
            .peak_report(TOP_HOURS, TOP_WEEKDAYS);
        let report_path = self.sink.write_report(&report.render())?;
        info!("Peak registration report written to {}", report_path.display());

        self.transition(PipelineState::Done);
        Ok(PipelineOutcome {
            report,
            report_path,
            stats: self.stats.clone(),
        })
    }

    /// Process every record in order, then finalize
    pub fn run(&mut self, records: &[AttendeeRecord], show_progress: bool) -> Result<PipelineOutcome> {
        info!("Starting attendee pipeline for {} records", records.len());

        let progress = show_progress.then(|| Self::create_progress_bar(records.len() as u64));

        for record in records {
            self.process_record(record)?;
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message(format!(
                "Letters complete: {} written",
                self.stats.letters_written
            ));
        }

        let outcome = self.finalize()?;
        info!("{}", outcome.stats.summary());
        Ok(outcome)
    }

    /// Discard all run state and return to `Init`
    pub fn reset(&mut self) {
        self.registration_stats = RegistrationStats::new();
        self.stats = PipelineStats::new();
        self.transition(PipelineState::Init);
    }

    /// Create a progress bar for the letter loop
    fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        pb.set_message("Writing letters");
        pb
    }
}
