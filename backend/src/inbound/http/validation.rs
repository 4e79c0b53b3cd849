//! Request body handling shared by the JSON endpoints.
//!
//! Actix rejects unreadable bodies before a handler runs. The handler
//! installed here turns those rejections into the same `invalid_request`
//! envelope the domain validation produces, so every 400 looks alike.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

/// Largest accepted JSON body.
pub const MAX_JSON_BODY_BYTES: usize = 64 * 1024;

/// Machine-readable reason a body could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyErrorCode {
    InvalidJson,
    UnsupportedContentType,
    PayloadTooLarge,
    UnreadableBody,
}

impl BodyErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid_json",
            Self::UnsupportedContentType => "unsupported_content_type",
            Self::PayloadTooLarge => "payload_too_large",
            Self::UnreadableBody => "unreadable_body",
        }
    }
}

fn body_error(code: BodyErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": "body",
        "code": code.as_str(),
    }))
}

/// Translate a JSON extractor failure into a domain error.
pub(crate) fn map_json_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::ContentType => body_error(
            BodyErrorCode::UnsupportedContentType,
            "request body must be application/json",
        ),
        JsonPayloadError::Deserialize(inner) => body_error(
            BodyErrorCode::InvalidJson,
            format!("invalid request body: {inner}"),
        ),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            body_error(
                BodyErrorCode::PayloadTooLarge,
                format!("request body exceeds {MAX_JSON_BODY_BYTES} bytes"),
            )
        }
        _ => body_error(BodyErrorCode::UnreadableBody, "request body could not be read"),
    }
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected request body");
    map_json_error(&err).into()
}

/// JSON extractor configuration for every API scope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(json_error_handler)
}
