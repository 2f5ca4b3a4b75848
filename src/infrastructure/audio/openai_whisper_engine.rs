use async_trait::async_trait;
use reqwest::{StatusCode, multipart};
use serde::Deserialize;

use crate::application::ports::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};
use crate::infrastructure::observability::sanitize_upstream_body;

use super::audio_part::audio_part;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiWhisperEngine {
    pub fn new(client: reqwest::Client, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| OPENAI_BASE_URL.to_string());
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Deserialize)]
pub(super) struct WhisperResponse {
    pub text: String,
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(
        &self,
        request: TranscriptionRequest<'_>,
    ) -> Result<String, TranscriptionError> {
        let api_key = request.api_key.ok_or_else(|| {
            TranscriptionError::AuthenticationFailed("no API key configured".to_string())
        })?;

        let url = format!("{}/audio/transcriptions", self.base_url);

        let mut form = multipart::Form::new()
            .text("model", request.model.to_string())
            .text("response_format", "json")
            .part("file", audio_part(&request)?);

        if let Some(language) = request.language {
            form = form.text("language", language.as_str());
        }

        tracing::debug!(model = %request.model, "Sending audio to OpenAI Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key.expose())
            .multipart(form)
            .send()
            .await
            .map_err(send_error)?;

        let text = read_transcript(response).await?;

        tracing::info!(chars = text.len(), "OpenAI Whisper transcription completed");

        Ok(text)
    }
}

pub(super) fn send_error(e: reqwest::Error) -> TranscriptionError {
    if e.is_timeout() {
        TranscriptionError::Timeout(e.to_string())
    } else {
        TranscriptionError::ApiRequestFailed(format!("request: {}", e))
    }
}

/// Shared response handling for OpenAI-shaped transcription endpoints.
pub(super) async fn read_transcript(
    response: reqwest::Response,
) -> Result<String, TranscriptionError> {
    let status = response.status();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        let detail = format!("status {}: {}", status, sanitize_upstream_body(&body));
        return Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                TranscriptionError::AuthenticationFailed(detail)
            }
            _ => TranscriptionError::ApiRequestFailed(detail),
        });
    }

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            TranscriptionError::Timeout(e.to_string())
        } else {
            TranscriptionError::InvalidResponse(format!("body: {}", e))
        }
    })?;

    let parsed: WhisperResponse = serde_json::from_str(&body).map_err(|e| {
        TranscriptionError::InvalidResponse(format!(
            "parse response: {} ({})",
            e,
            sanitize_upstream_body(&body)
        ))
    })?;

    Ok(parsed.text.trim().to_string())
}
