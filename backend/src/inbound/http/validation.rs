//! Request validation for the notes endpoints.
//!
//! Every extractor failure becomes an [`ErrorCode::InvalidRequest`] error
//! whose `details` name the offending field and a stable code, so clients see
//! one error shape regardless of which part of the request was malformed.
//!
//! [`ErrorCode::InvalidRequest`]: crate::domain::ErrorCode::InvalidRequest

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, NoteId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    InvalidNoteId,
    InvalidQuery,
    InvalidBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidNoteId => "invalid_note_id",
            Self::InvalidQuery => "invalid_query",
            Self::InvalidBody => "invalid_body",
        }
    }
}

fn validation_error(
    field: &str,
    message: impl Into<String>,
    code: ValidationCode,
    value: Option<&str>,
) -> Error {
    let details = match value {
        Some(value) => json!({ "field": field, "value": value, "code": code.as_str() }),
        None => json!({ "field": field, "code": code.as_str() }),
    };
    Error::invalid_request(message).with_details(details)
}

/// Parse the `{id}` path segment into a [`NoteId`].
pub(crate) fn parse_note_id(raw: &str) -> Result<NoteId, Error> {
    raw.parse().map_err(|_| {
        validation_error(
            "id",
            "id must be a non-negative integer",
            ValidationCode::InvalidNoteId,
            Some(raw),
        )
    })
}

fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, query = req.query_string(), "rejected query string");
    validation_error(
        "searchString",
        format!("invalid query string: {err}"),
        ValidationCode::InvalidQuery,
        None,
    )
    .into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    validation_error(
        "body",
        format!("invalid note payload: {err}"),
        ValidationCode::InvalidBody,
        None,
    )
    .into()
}

/// Query extractor configuration mapping failures to validation errors.
pub(crate) fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error)
}

/// JSON extractor configuration mapping failures to validation errors.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}
