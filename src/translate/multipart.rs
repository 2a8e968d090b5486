//! `multipart/form-data` body for the translation endpoint.
//!
//! The service expects exactly two parts, `menuImage` followed by `language`,
//! with CRLF line endings and the closing delimiter on its own line. The byte
//! layout is assembled by hand so that it stays stable across HTTP client
//! versions.

use crate::imaging::EncodedPayload;
use tracing::debug;
use uuid::Uuid;

const CRLF: &str = "\r\n";

pub const IMAGE_FIELD: &str = "menuImage";
pub const IMAGE_FILENAME: &str = "image.jpg";
pub const LANGUAGE_FIELD: &str = "language";

/// A fully assembled request body together with its `Content-Type` header value.
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartBody {
    pub boundary: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Builds the body with a fresh random boundary.
pub fn build_multipart(payload: &EncodedPayload, target_language: &str) -> MultipartBody {
    build_multipart_with_boundary(payload, target_language, new_boundary())
}

/// Builds the body around a caller-chosen boundary.
pub fn build_multipart_with_boundary(
    payload: &EncodedPayload,
    target_language: &str,
    boundary: impl Into<String>,
) -> MultipartBody {
    let boundary = boundary.into();
    let mut bytes = Vec::with_capacity(payload.bytes.len() + target_language.len() + 256);

    push_line(&mut bytes, &format!("--{}", boundary));
    push_line(
        &mut bytes,
        &format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"",
            IMAGE_FIELD, IMAGE_FILENAME
        ),
    );
    push_line(&mut bytes, &format!("Content-Type: {}", payload.mime_type));
    bytes.extend_from_slice(CRLF.as_bytes());
    bytes.extend_from_slice(&payload.bytes);
    bytes.extend_from_slice(CRLF.as_bytes());

    push_line(&mut bytes, &format!("--{}", boundary));
    push_line(
        &mut bytes,
        &format!("Content-Disposition: form-data; name=\"{}\"", LANGUAGE_FIELD),
    );
    bytes.extend_from_slice(CRLF.as_bytes());
    push_line(&mut bytes, target_language);

    push_line(&mut bytes, &format!("--{}--", boundary));

    debug!(
        "Built multipart body: {} bytes, boundary {}",
        bytes.len(),
        boundary
    );

    MultipartBody {
        content_type: content_type_for(&boundary),
        boundary,
        bytes,
    }
}

pub fn content_type_for(boundary: &str) -> String {
    format!("multipart/form-data; boundary={}", boundary)
}

/// 128 random bits rendered as an upper-case hyphenated UUID.
pub fn new_boundary() -> String {
    Uuid::new_v4().hyphenated().to_string().to_uppercase()
}

fn push_line(buf: &mut Vec<u8>, line: &str) {
    buf.extend_from_slice(line.as_bytes());
    buf.extend_from_slice(CRLF.as_bytes());
}
