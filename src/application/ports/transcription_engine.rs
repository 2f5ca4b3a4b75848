use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{ApiKey, LanguageHint};

/// Everything the engine receives for one call. The credential travels with
/// the request rather than living inside the engine.
#[derive(Debug, Clone, Copy)]
pub struct TranscriptionRequest<'a> {
    pub audio: &'a Bytes,
    pub file_name: &'a str,
    pub mime_type: &'a str,
    pub model: &'a str,
    pub language: Option<LanguageHint>,
    pub api_key: Option<&'a ApiKey>,
}

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        request: TranscriptionRequest<'_>,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
