use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::application::ports::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};
use crate::domain::{ErrorKind, TranscriptionResult, UploadSubmission};

use super::transcription_options::TranscriptionOptions;

pub const DEFAULT_MAX_IN_FLIGHT: usize = 16;

/// Forwards accepted submissions to the engine, one call each, and
/// classifies the outcome.
///
/// The number of upstream calls in flight at once is bounded; each holds
/// the whole payload in memory. A saturated proxy refuses new work with
/// `UpstreamUnavailable` instead of queueing it.
pub struct TranscriptionProxy<E: ?Sized>
where
    E: TranscriptionEngine,
{
    engine: Arc<E>,
    in_flight: Arc<Semaphore>,
}

impl<E: ?Sized> TranscriptionProxy<E>
where
    E: TranscriptionEngine + 'static,
{
    pub fn new(engine: Arc<E>, max_in_flight: usize) -> Self {
        Self {
            engine,
            in_flight: Arc::new(Semaphore::new(max_in_flight.max(1))),
        }
    }

    pub fn available_slots(&self) -> usize {
        self.in_flight.available_permits()
    }

    /// Caller contract: `submission` has already been accepted by the
    /// validator. It is not re-validated here.
    pub async fn transcribe(
        &self,
        submission: UploadSubmission,
        options: TranscriptionOptions,
    ) -> TranscriptionResult {
        let permit = match Arc::clone(&self.in_flight).try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                tracing::warn!(
                    filename = %submission.file_name(),
                    "In-flight transcription limit reached, refusing request"
                );
                return TranscriptionResult::failure(ErrorKind::UpstreamUnavailable);
            }
        };

        let engine = Arc::clone(&self.engine);

        // The upstream call runs on its own task so a client disconnect
        // does not abort it once issued.
        let call = tokio::spawn(async move {
            let _permit = permit;
            let Some(audio) = submission.payload() else {
                return TranscriptionResult::failure(ErrorKind::MissingFile);
            };

            let request = TranscriptionRequest {
                audio,
                file_name: submission.file_name(),
                mime_type: submission.declared_mime_type(),
                model: &options.model,
                language: options.language_hint,
                api_key: options.api_key.as_ref(),
            };

            tracing::debug!(
                model = %options.model,
                language = ?options.language_hint.map(|l| l.as_str()),
                bytes = submission.size_bytes(),
                "Forwarding audio to transcription engine"
            );

            match engine.transcribe(request).await {
                Ok(text) => {
                    tracing::info!(
                        filename = %submission.file_name(),
                        chars = text.len(),
                        "Transcription completed"
                    );
                    TranscriptionResult::Success {
                        text,
                        file_name: submission.file_name().to_string(),
                        size_bytes: submission.size_bytes(),
                    }
                }
                Err(e) => {
                    let kind = classify_failure(&e);
                    tracing::error!(
                        error = %e,
                        kind = %kind,
                        filename = %submission.file_name(),
                        "Transcription failed"
                    );
                    TranscriptionResult::failure(kind)
                }
            }
        });

        match call.await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Transcription task aborted");
                TranscriptionResult::failure(ErrorKind::UnknownFailure)
            }
        }
    }
}

/// Only credential problems are told apart; every other upstream failure
/// collapses into `UnknownFailure`.
pub fn classify_failure(error: &TranscriptionError) -> ErrorKind {
    match error {
        TranscriptionError::AuthenticationFailed(_) => ErrorKind::UpstreamAuthFailure,
        TranscriptionError::ApiRequestFailed(_)
        | TranscriptionError::Timeout(_)
        | TranscriptionError::InvalidResponse(_) => ErrorKind::UnknownFailure,
    }
}
