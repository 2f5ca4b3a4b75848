use super::error_kind::ErrorKind;

/// Terminal outcome of a single transcription request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionResult {
    Success {
        text: String,
        file_name: String,
        size_bytes: u64,
    },
    Failure {
        kind: ErrorKind,
        message: String,
    },
}

impl TranscriptionResult {
    pub fn failure(kind: ErrorKind) -> Self {
        Self::Failure {
            kind,
            message: kind.message().to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { kind, .. } => Some(*kind),
        }
    }
}
