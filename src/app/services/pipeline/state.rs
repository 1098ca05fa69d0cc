//! Pipeline lifecycle

use std::fmt;

/// Where a pipeline is in its single run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// Created, no record seen yet
    #[default]
    Init,
    /// Accepting attendee records
    Streaming,
    /// Building and writing the report
    Finalizing,
    /// Run complete; a reset is needed before more records
    Done,
}

impl PipelineState {
    /// Whether `process_record` may be called
    pub fn accepts_records(&self) -> bool {
        matches!(self, Self::Init | Self::Streaming)
    }

    /// Whether `finalize` may be called; `Finalizing` allows a retry after
    /// a failed report write
    pub fn can_finalize(&self) -> bool {
        !matches!(self, Self::Done)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Streaming => "streaming",
            Self::Finalizing => "finalizing",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
