use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};

/// Canned engine for scaffold mode: no network, no cost.
pub struct MockTranscriptionEngine {
    delay: Duration,
}

impl MockTranscriptionEngine {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(
        &self,
        request: TranscriptionRequest<'_>,
    ) -> Result<String, TranscriptionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(format!(
            "Mock transcript of {} ({} bytes).",
            request.file_name,
            request.audio.len()
        ))
    }
}
