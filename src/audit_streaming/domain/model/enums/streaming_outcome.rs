#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SkipReason {
    SilentMode,
    StreamingDisabled,
    Unlicensed,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SilentMode => "silent_mode",
            Self::StreamingDisabled => "streaming_disabled",
            Self::Unlicensed => "unlicensed",
        }
    }
}

/// Terminal result of one streaming invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StreamingOutcome {
    Skipped(SkipReason),
    Unresolved,
    Delivered {
        attempted: usize,
        succeeded: usize,
        failed: usize,
    },
}
