mod api_key;
mod error_kind;
mod language_hint;
mod transcription_result;
mod upload_submission;
mod validation_verdict;

pub use api_key::ApiKey;
pub use error_kind::ErrorKind;
pub use language_hint::LanguageHint;
pub use transcription_result::TranscriptionResult;
pub use upload_submission::UploadSubmission;
pub use validation_verdict::ValidationVerdict;
