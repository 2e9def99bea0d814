/// Outcome of a CI run, as reported by the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStatus {
    Started,
    Success,
    Failed,
    Cancelled,
    TimedOut,
}

impl BuildStatus {
    /// Maps a raw workflow status token to a status. Unrecognised tokens,
    /// including the empty string, fall back to `Started`.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "failure" | "failed" => Self::Failed,
            "cancelled" | "skipped" => Self::Cancelled,
            "timed_out" => Self::TimedOut,
            _ => Self::Started,
        }
    }

    /// Embed accent colour, 24-bit RGB.
    pub fn color(self) -> u32 {
        match self {
            Self::Started => 0xDBAB0A,
            Self::Success => 0x3FB950,
            Self::Failed => 0xF85149,
            Self::Cancelled => 0x7D8590,
            Self::TimedOut => 0xF48381,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Started => "Started",
            Self::Success => "Successful",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
            Self::TimedOut => "Timed Out",
        }
    }
}
