#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StreamingFeatureToggles {
    pub streaming_enabled: bool,
    pub licensed: bool,
    pub silent_mode_enabled: bool,
}

impl Default for StreamingFeatureToggles {
    fn default() -> Self {
        Self {
            streaming_enabled: true,
            licensed: true,
            silent_mode_enabled: false,
        }
    }
}
