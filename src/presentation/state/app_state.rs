use std::sync::Arc;

use crate::application::ports::TranscriptionEngine;
use crate::application::services::{TranscriptionOptions, TranscriptionService};

pub struct AppState<E: ?Sized>
where
    E: TranscriptionEngine,
{
    pub transcription_service: Arc<TranscriptionService<E>>,
    pub transcription_options: TranscriptionOptions,
    pub allow_client_api_key: bool,
}

impl<E: ?Sized> Clone for AppState<E>
where
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            transcription_options: self.transcription_options.clone(),
            allow_client_api_key: self.allow_client_api_key,
        }
    }
}
