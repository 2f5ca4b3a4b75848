use crate::domain::{ErrorKind, UploadSubmission, ValidationVerdict};

/// Hard upload limit of the upstream engine (25 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 25 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "audio/mp3",
    "audio/mp4",
    "audio/mpeg",
    "audio/mpga",
    "audio/m4a",
    "audio/x-m4a",
    "audio/wav",
    "audio/webm",
];

pub const ALLOWED_EXTENSIONS: &[&str] = &["mp3", "mp4", "mpeg", "mpga", "m4a", "wav", "webm"];

/// Decides whether a submission may be forwarded to the engine.
///
/// Checks presence, then measured size, then format. The format check
/// passes when EITHER the declared MIME type OR the file extension is
/// recognized; browsers often report an empty or wrong MIME type, so the
/// extension acts as a fallback signal rather than a second gate.
pub fn validate_submission(submission: &UploadSubmission) -> ValidationVerdict {
    if !submission.has_payload() {
        return ValidationVerdict::rejected(ErrorKind::MissingFile);
    }

    if submission.size_bytes() > MAX_UPLOAD_BYTES {
        return ValidationVerdict::rejected(ErrorKind::OversizedFile);
    }

    if !is_allowed_mime_type(submission.declared_mime_type())
        && !is_allowed_extension(&submission.extension())
    {
        return ValidationVerdict::rejected(ErrorKind::UnsupportedFormat);
    }

    ValidationVerdict::Accepted
}

pub fn is_allowed_mime_type(mime: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime)
}

pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension)
}
