use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::TranscriptionEngine;
use crate::domain::{ApiKey, ErrorKind, TranscriptionResult, UploadSubmission};
use crate::presentation::state::AppState;

pub const FILE_FIELD: &str = "file";
pub const API_KEY_FIELD: &str = "apiKey";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    pub success: bool,
    pub text: String,
    pub file_name: String,
    pub file_size: u64,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

struct UploadForm {
    submission: UploadSubmission,
    api_key: Option<ApiKey>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<E>(
    State(state): State<AppState<E>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    E: TranscriptionEngine + ?Sized + 'static,
{
    let multipart = match multipart {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!(error = %e, "Transcribe request is not multipart");
            return error_response(ErrorKind::MissingFile, ErrorKind::MissingFile.message());
        }
    };

    let form = match read_upload_form(multipart).await {
        Ok(form) => form,
        Err(kind) => return error_response(kind, kind.message()),
    };

    let options = match form.api_key {
        Some(key) if state.allow_client_api_key => {
            tracing::debug!("Using client-supplied transcription credential");
            state.transcription_options.with_api_key(key)
        }
        _ => state.transcription_options.clone(),
    };

    let result = state
        .transcription_service
        .process(form.submission, options)
        .await;

    match result {
        TranscriptionResult::Success {
            text,
            file_name,
            size_bytes,
        } => (
            StatusCode::OK,
            Json(TranscribeResponse {
                success: true,
                text,
                file_name,
                file_size: size_bytes,
            }),
        )
            .into_response(),
        TranscriptionResult::Failure { kind, message } => error_response(kind, &message),
    }
}

/// Reads the first `file` part and the optional `apiKey` text part.
/// Other fields are skipped.
async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, ErrorKind> {
    let mut submission = None;
    let mut api_key = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(multipart_error_kind(&e)),
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) if submission.is_none() => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| multipart_error_kind(&e))?;

                tracing::debug!(
                    filename = %file_name,
                    content_type = %content_type,
                    bytes = data.len(),
                    "File data received"
                );

                submission = Some(UploadSubmission::new(file_name, content_type, data));
            }
            Some(API_KEY_FIELD) => {
                let value = field.text().await.map_err(|e| multipart_error_kind(&e))?;
                api_key = ApiKey::new(value);
            }
            _ => {}
        }
    }

    Ok(UploadForm {
        submission: submission.unwrap_or_else(UploadSubmission::missing),
        api_key,
    })
}

/// A body over the transport cap is an oversized upload; any other broken
/// multipart body means no usable file was found.
fn multipart_error_kind(error: &MultipartError) -> ErrorKind {
    tracing::warn!(error = %error, status = %error.status(), "Failed to read multipart");
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ErrorKind::OversizedFile
    } else {
        ErrorKind::MissingFile
    }
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::MissingFile | ErrorKind::OversizedFile | ErrorKind::UnsupportedFormat => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::UpstreamUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::UpstreamAuthFailure | ErrorKind::UnknownFailure => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(kind: ErrorKind, message: &str) -> Response {
    (
        status_for(kind),
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
