mod transcription_options;
mod transcription_proxy;
mod transcription_service;
mod upload_validator;

pub use transcription_options::{DEFAULT_MODEL, TranscriptionOptions};
pub use transcription_proxy::{DEFAULT_MAX_IN_FLIGHT, TranscriptionProxy, classify_failure};
pub use transcription_service::TranscriptionService;
pub use upload_validator::{
    ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES, MAX_UPLOAD_BYTES, is_allowed_extension,
    is_allowed_mime_type, validate_submission,
};
