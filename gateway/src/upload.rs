//! Document selection rules and upload failure wording.
//!
//! Validation runs before any request is built; a rejected selection never
//! reaches the backend.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::error::GatewayError;
use crate::request::FormPart;

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".txt", ".doc", ".docx", ".pdf"];

pub const FILE_TOO_LARGE: &str = "File size exceeds 10MB limit. Please select a smaller file.";
pub const INVALID_FILE_TYPE: &str = "Please select a valid file type (.txt, .doc, .docx, or .pdf)";
pub const LOGIN_REQUIRED: &str = "Please log in to upload files";
pub const NO_FILE_SELECTED: &str = "Please select a file first";

/// Attempts the upload screen makes before reporting a failure.
pub const UPLOAD_ATTEMPTS: u32 = 3;
/// Pause between upload attempts.
pub const UPLOAD_RETRY_PAUSE_MS: u64 = 2_000;

/// Check a candidate selection; size is checked before type.
///
/// # Errors
///
/// Returns [`GatewayError::Validation`] with the message to show the user.
pub fn validate_selection(file_name: &str, size: u64) -> Result<(), GatewayError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(GatewayError::Validation(FILE_TOO_LARGE.to_owned()));
    }
    if !has_allowed_extension(file_name) {
        return Err(GatewayError::Validation(INVALID_FILE_TYPE.to_owned()));
    }
    Ok(())
}

#[must_use]
pub fn has_allowed_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// A validated document ready to be sent as the multipart `file` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    /// Validate and wrap a selection.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Validation`] when the file is too large or has
    /// an unsupported extension.
    pub fn new(name: &str, mime: Option<String>, bytes: Vec<u8>) -> Result<Self, GatewayError> {
        validate_selection(name, bytes.len() as u64)?;
        Ok(Self { name: name.to_owned(), mime, bytes })
    }

    pub(crate) fn into_part(self) -> FormPart {
        FormPart::File { name: "file".to_owned(), file_name: self.name, mime: self.mime, bytes: self.bytes }
    }
}

/// Message shown when an upload did not produce a result.
#[must_use]
pub fn upload_failure_message(error: &GatewayError) -> String {
    match error {
        GatewayError::Rejected { status: 413, .. } | GatewayError::Server { status: 413, .. } => {
            "Upload failed. File is too large. Maximum size is 10MB.".to_owned()
        }
        GatewayError::Rejected { status: 415, .. } | GatewayError::Server { status: 415, .. } => {
            "Upload failed. Invalid file type. Please select a supported format.".to_owned()
        }
        GatewayError::Rejected { message, .. } | GatewayError::InvalidResponse(message) if !message.is_empty() => {
            format!("Upload failed. {message}")
        }
        GatewayError::Server { message, .. } if !message.is_empty() => format!("Upload failed. {message}"),
        GatewayError::Network(_) | GatewayError::Timeout { .. } | GatewayError::Validation(_) => {
            format!("Upload failed. {error}")
        }
        _ => "Upload failed. Please try again.".to_owned(),
    }
}

/// Whole percentage of `loaded` over `total`, rounded half up. `None`
/// when the total is unknown.
#[must_use]
pub fn progress_percent(loaded: u64, total: u64) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let total = u128::from(total);
    let percent = (u128::from(loaded) * 100 + total / 2) / total;
    u8::try_from(percent.min(100)).ok()
}

/// Progress bar caption for `percent`.
#[must_use]
pub fn progress_label(percent: u8) -> &'static str {
    if percent < 100 { "Uploading..." } else { "Processing..." }
}
