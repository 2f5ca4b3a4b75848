use reqwest::multipart;

use crate::application::ports::{TranscriptionError, TranscriptionRequest};
use crate::application::services::{is_allowed_extension, is_allowed_mime_type};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Builds the `file` part for an upstream transcription call.
///
/// Upstream engines sniff the container from the file name, so a name
/// without a recognized extension gets one derived from the MIME type.
pub fn audio_part(request: &TranscriptionRequest<'_>) -> Result<multipart::Part, TranscriptionError> {
    let mime = upstream_mime_type(request.file_name, request.mime_type);
    let file_name = upstream_file_name(request.file_name, mime);

    let length = request.audio.len() as u64;
    multipart::Part::stream_with_length(request.audio.clone(), length)
        .file_name(file_name)
        .mime_str(mime)
        .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))
}

pub fn upstream_mime_type<'a>(file_name: &str, declared: &'a str) -> &'a str {
    if is_allowed_mime_type(declared) {
        return declared;
    }

    let extension = file_name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "mp3" | "mpeg" | "mpga" => "audio/mpeg",
        "mp4" => "audio/mp4",
        "m4a" => "audio/m4a",
        "wav" => "audio/wav",
        "webm" => "audio/webm",
        _ => FALLBACK_MIME,
    }
}

pub fn upstream_file_name(file_name: &str, mime: &str) -> String {
    if extension_of(file_name).is_some_and(|ext| is_allowed_extension(&ext)) {
        return file_name.to_string();
    }

    let stem = if file_name.trim().is_empty() {
        "audio"
    } else {
        file_name
    };

    match extension_for_mime(mime) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    }
}

fn extension_for_mime(mime: &str) -> Option<&'static str> {
    match mime {
        "audio/mp3" | "audio/mpeg" | "audio/mpga" => Some("mp3"),
        "audio/mp4" => Some("mp4"),
        "audio/m4a" | "audio/x-m4a" => Some("m4a"),
        "audio/wav" => Some("wav"),
        "audio/webm" => Some("webm"),
        _ => None,
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}
