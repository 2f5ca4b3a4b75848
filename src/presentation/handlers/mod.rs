mod health;
mod transcribe;

pub use health::{HealthResponse, health_handler};
pub use transcribe::{
    API_KEY_FIELD, ErrorResponse, FILE_FIELD, TranscribeResponse, status_for, transcribe_handler,
};
