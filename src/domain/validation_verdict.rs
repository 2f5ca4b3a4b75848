use super::error_kind::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Accepted,
    Rejected { reason: ErrorKind, message: String },
}

impl ValidationVerdict {
    pub fn rejected(reason: ErrorKind) -> Self {
        Self::Rejected {
            reason,
            message: reason.message().to_string(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn reason(&self) -> Option<ErrorKind> {
        match self {
            Self::Accepted => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }
}
