use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use crate::application::ports::TranscriptionEngine;

use super::azure_whisper_engine::{AZURE_DEFAULT_API_VERSION, AzureWhisperEngine};
use super::mock_transcription_engine::MockTranscriptionEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
    Mock,
}

/// Connection details for building an engine. Credentials are not part of
/// this; they are passed with each request.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub base_url: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
    pub request_timeout: Option<Duration>,
    pub mock_delay: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineFactoryError {
    #[error("missing setting for {provider:?} engine: {setting}")]
    MissingSetting {
        provider: TranscriptionProvider,
        setting: &'static str,
    },
    #[error("http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        provider: TranscriptionProvider,
        config: &EngineConfig,
    ) -> Result<Arc<dyn TranscriptionEngine>, EngineFactoryError> {
        match provider {
            TranscriptionProvider::OpenAi => {
                let client = build_http_client(config.request_timeout)?;
                let engine = OpenAiWhisperEngine::new(client, config.base_url.clone());
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Azure => {
                let base_url = config.base_url.as_deref().ok_or(
                    EngineFactoryError::MissingSetting {
                        provider,
                        setting: "base_url",
                    },
                )?;
                let deployment = config.azure_deployment.as_deref().ok_or(
                    EngineFactoryError::MissingSetting {
                        provider,
                        setting: "azure_deployment",
                    },
                )?;
                let api_version = config
                    .azure_api_version
                    .as_deref()
                    .unwrap_or(AZURE_DEFAULT_API_VERSION);
                let client = build_http_client(config.request_timeout)?;
                let engine = AzureWhisperEngine::new(client, base_url, deployment, api_version);
                Ok(Arc::new(engine))
            }
            TranscriptionProvider::Mock => {
                Ok(Arc::new(MockTranscriptionEngine::new(config.mock_delay)))
            }
        }
    }
}

/// No timeout unless one is configured; the transport default applies.
fn build_http_client(timeout: Option<Duration>) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
