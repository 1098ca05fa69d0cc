//! Attendee processing pipeline
//!
//! Drives a run from the first attendee to the final report. The pipeline
//! owns the registration statistics for exactly one run and talks to the
//! outside world only through three injected collaborators: a
//! [`LegislatorLookup`](crate::app::services::legislator_lookup::LegislatorLookup),
//! a [`LetterRenderer`](crate::app::services::letters::LetterRenderer) and an
//! [`OutputSink`](crate::app::services::letters::OutputSink).
//!
//! # Architecture
//!
//! - [`processor`] - the `EventPipeline` and its per-record steps
//! - [`state`] - `Init → Streaming → Finalizing → Done` lifecycle
//! - [`stats`] - run counters and the outcome returned by a full run
//!
//! # Failure Handling
//!
//! Nothing that goes wrong with a single attendee stops the run. Bad fields
//! are normalised to fallback values, lookup failures become the fallback
//! message, and a letter that cannot be rendered or written is counted and
//! skipped. Only a report that cannot be written fails the run.

pub mod processor;
pub mod state;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use processor::EventPipeline;
pub use state::PipelineState;
pub use stats::{PipelineOutcome, PipelineStats};
