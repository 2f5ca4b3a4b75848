mod transcription_engine;

pub use transcription_engine::{TranscriptionEngine, TranscriptionError, TranscriptionRequest};
