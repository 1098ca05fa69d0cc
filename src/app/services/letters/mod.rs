//! Letter rendering and output
//!
//! Two seams used by the pipeline:
//! - [`LetterRenderer`] turns an enriched record into document text;
//!   [`LetterTemplate`] is the placeholder template implementation.
//! - [`OutputSink`] persists letters and the peak time report;
//!   [`FileOutputSink`] writes them to disk.

pub mod sink;
pub mod template;

pub use sink::{FileOutputSink, OutputSink, letter_file_name};
pub use template::{LetterRenderer, LetterTemplate, PLACEHOLDERS, Placeholder};
