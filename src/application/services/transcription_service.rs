use crate::application::ports::TranscriptionEngine;
use crate::domain::{TranscriptionResult, UploadSubmission, ValidationVerdict};

use super::transcription_options::TranscriptionOptions;
use super::transcription_proxy::TranscriptionProxy;
use super::upload_validator::validate_submission;

/// Validator followed, on acceptance only, by the proxy.
pub struct TranscriptionService<E: ?Sized>
where
    E: TranscriptionEngine,
{
    proxy: TranscriptionProxy<E>,
}

impl<E: ?Sized> TranscriptionService<E>
where
    E: TranscriptionEngine + 'static,
{
    pub fn new(proxy: TranscriptionProxy<E>) -> Self {
        Self { proxy }
    }

    pub async fn process(
        &self,
        submission: UploadSubmission,
        options: TranscriptionOptions,
    ) -> TranscriptionResult {
        tracing::debug!(
            content_type = %submission.declared_mime_type(),
            filename = %submission.file_name(),
            bytes = submission.size_bytes(),
            "Validating audio upload"
        );

        match validate_submission(&submission) {
            ValidationVerdict::Accepted => self.proxy.transcribe(submission, options).await,
            ValidationVerdict::Rejected { reason, message } => {
                tracing::warn!(
                    reason = %reason,
                    content_type = %submission.declared_mime_type(),
                    extension = %submission.extension(),
                    "Rejected audio upload"
                );
                TranscriptionResult::Failure {
                    kind: reason,
                    message,
                }
            }
        }
    }
}
