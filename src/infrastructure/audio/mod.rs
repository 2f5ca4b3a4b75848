mod audio_part;
mod azure_whisper_engine;
mod mock_transcription_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;

pub use audio_part::{audio_part, upstream_file_name, upstream_mime_type};
pub use azure_whisper_engine::{AZURE_DEFAULT_API_VERSION, AzureWhisperEngine};
pub use mock_transcription_engine::MockTranscriptionEngine;
pub use openai_whisper_engine::{OPENAI_BASE_URL, OpenAiWhisperEngine};
pub use transcription_engine_factory::{
    EngineConfig, EngineFactoryError, TranscriptionEngineFactory, TranscriptionProvider,
};
