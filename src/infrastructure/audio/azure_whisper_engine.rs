use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};

use super::audio_part::audio_part;
use super::openai_whisper_engine::{read_transcript, send_error};

pub const AZURE_DEFAULT_API_VERSION: &str = "2024-06-01";

/// Whisper deployment on Azure OpenAI. The deployment fixes the model, so
/// the request's model selector is not sent.
pub struct AzureWhisperEngine {
    client: reqwest::Client,
    endpoint: String,
}

impl AzureWhisperEngine {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        deployment: &str,
        api_version: &str,
    ) -> Self {
        let endpoint = format!(
            "{}/openai/deployments/{}/audio/transcriptions?api-version={}",
            base_url.trim_end_matches('/'),
            deployment,
            api_version,
        );
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TranscriptionEngine for AzureWhisperEngine {
    async fn transcribe(
        &self,
        request: TranscriptionRequest<'_>,
    ) -> Result<String, TranscriptionError> {
        let api_key = request.api_key.ok_or_else(|| {
            TranscriptionError::AuthenticationFailed("no API key configured".to_string())
        })?;

        let mut form = multipart::Form::new()
            .text("response_format", "json")
            .part("file", audio_part(&request)?);

        if let Some(language) = request.language {
            form = form.text("language", language.as_str());
        }

        tracing::debug!(endpoint = %self.endpoint, "Sending audio to Azure OpenAI Whisper");

        let response = self
            .client
            .post(&self.endpoint)
            .header("api-key", api_key.expose())
            .multipart(form)
            .send()
            .await
            .map_err(send_error)?;

        let text = read_transcript(response).await?;

        tracing::info!(
            chars = text.len(),
            "Azure OpenAI Whisper transcription completed"
        );

        Ok(text)
    }
}
