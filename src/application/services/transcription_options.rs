use crate::domain::{ApiKey, LanguageHint};

pub const DEFAULT_MODEL: &str = "whisper-1";

/// Per-call engine configuration, passed explicitly with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionOptions {
    pub model: String,
    pub language_hint: Option<LanguageHint>,
    pub api_key: Option<ApiKey>,
}

impl TranscriptionOptions {
    pub fn new(
        model: impl Into<String>,
        language_hint: Option<LanguageHint>,
        api_key: Option<ApiKey>,
    ) -> Self {
        Self {
            model: model.into(),
            language_hint,
            api_key,
        }
    }

    /// Same options with the credential replaced for a single request.
    pub fn with_api_key(&self, api_key: ApiKey) -> Self {
        Self {
            api_key: Some(api_key),
            ..self.clone()
        }
    }
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, None, None)
    }
}
