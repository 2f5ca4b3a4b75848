use std::fmt;

/// Classified failure categories surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingFile,
    OversizedFile,
    UnsupportedFormat,
    UpstreamAuthFailure,
    UpstreamUnavailable,
    UnknownFailure,
}

impl ErrorKind {
    /// Human-readable message returned to the client for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingFile => "no audio file found",
            Self::OversizedFile => "file exceeds 25MB",
            Self::UnsupportedFormat => {
                "unsupported audio format; supported: mp3, mp4, mpeg, mpga, m4a, wav, webm"
            }
            Self::UpstreamAuthFailure => "transcription credentials missing or invalid",
            Self::UpstreamUnavailable => "transcription service is busy, try again later",
            Self::UnknownFailure => "transcription failed, try again later",
        }
    }

    /// Whether the failure was detected locally, before any upstream call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingFile | Self::OversizedFile | Self::UnsupportedFormat
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingFile => "missing_file",
            Self::OversizedFile => "oversized_file",
            Self::UnsupportedFormat => "unsupported_format",
            Self::UpstreamAuthFailure => "upstream_auth_failure",
            Self::UpstreamUnavailable => "upstream_unavailable",
            Self::UnknownFailure => "unknown_failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
