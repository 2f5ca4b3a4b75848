use bytes::Bytes;

/// One client-provided audio payload plus its self-reported metadata.
///
/// `size_bytes` is always measured from the bytes actually received; there is
/// no way to construct a submission from a client-declared size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSubmission {
    payload: Option<Bytes>,
    declared_mime_type: String,
    file_name: String,
    size_bytes: u64,
}

impl UploadSubmission {
    pub fn new(
        file_name: impl Into<String>,
        declared_mime_type: impl Into<String>,
        payload: impl Into<Bytes>,
    ) -> Self {
        let payload = payload.into();
        let size_bytes = payload.len() as u64;
        Self {
            payload: Some(payload),
            declared_mime_type: declared_mime_type.into(),
            file_name: file_name.into(),
            size_bytes,
        }
    }

    /// A submission whose request carried no file part at all.
    pub fn missing() -> Self {
        Self {
            payload: None,
            declared_mime_type: String::new(),
            file_name: String::new(),
            size_bytes: 0,
        }
    }

    pub fn payload(&self) -> Option<&Bytes> {
        self.payload.as_ref()
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }

    pub fn declared_mime_type(&self) -> &str {
        &self.declared_mime_type
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Lower-cased text after the last `.` of the file name. A name with no
    /// dot is taken whole, so `mp3` alone counts as an `mp3` file.
    pub fn extension(&self) -> String {
        self.file_name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}
