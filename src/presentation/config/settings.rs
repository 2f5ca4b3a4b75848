use std::time::Duration;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_MAX_IN_FLIGHT, DEFAULT_MODEL, TranscriptionOptions};
use crate::domain::{ApiKey, LanguageHint};
use crate::infrastructure::audio::{EngineConfig, TranscriptionProvider};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_in_flight: usize,
}

#[derive(Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub language_hint: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub allow_client_api_key: bool,
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    InvalidLanguageHint(String),
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}` (optional) and
    /// `APP_`-prefixed environment variables, in that order.
    ///
    /// `APP_TRANSCRIPTION__API_KEY` sets the engine key; a bare
    /// `OPENAI_API_KEY` is honored as a default when it is set.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("server.max_in_flight", DEFAULT_MAX_IN_FLIGHT as i64)?
            .set_default("transcription.provider", "openai")?
            .set_default("transcription.model", DEFAULT_MODEL)?
            .set_default("transcription.allow_client_api_key", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?;

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            builder = builder.set_default("transcription.api_key", key)?;
        }

        let configuration = builder
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.transcription.language_hint()?;

        Ok(settings)
    }
}

impl TranscriptionSettings {
    pub fn language_hint(&self) -> Result<Option<LanguageHint>, SettingsError> {
        match self.language_hint.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(code) => code
                .parse::<LanguageHint>()
                .map(Some)
                .map_err(SettingsError::InvalidLanguageHint),
        }
    }

    /// Server-held defaults for every engine call.
    pub fn options(&self) -> Result<TranscriptionOptions, SettingsError> {
        Ok(TranscriptionOptions::new(
            self.model.clone(),
            self.language_hint()?,
            self.api_key.clone().and_then(ApiKey::new),
        ))
    }

    pub fn engine_config(&self, mock_delay: Duration) -> EngineConfig {
        EngineConfig {
            base_url: self.base_url.clone(),
            azure_deployment: self.azure_deployment.clone(),
            azure_api_version: self.azure_api_version.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            mock_delay,
        }
    }
}

impl std::fmt::Debug for TranscriptionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptionSettings")
            .field("provider", &self.provider)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("language_hint", &self.language_hint)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("allow_client_api_key", &self.allow_client_api_key)
            .field("azure_deployment", &self.azure_deployment)
            .field("azure_api_version", &self.azure_api_version)
            .finish()
    }
}
