//! Resource handlers.
//!
//! Each handler is a pure function of its path captures and the canned
//! fixtures; none of them keep state across requests, so repeating a call
//! with the same path yields a byte-identical body. Job identity is
//! deliberately not modeled: create-job returns an already-`DONE` job and
//! get-query-results returns the same canned row for every id.

pub mod datasets;
pub mod jobs;
pub mod queries;
pub mod tabledata;
pub mod tables;

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde::Serialize;
use serde_json::json;

/// Build an HTTP response with headers.
///
/// Handles the unlikely case where Response::builder() fails by returning a
/// minimal 500 response.
pub fn build_response_with_headers(
    status: StatusCode,
    headers: impl IntoIterator<Item = (impl AsRef<str>, impl AsRef<str>)>,
    body: impl Into<Bytes>,
) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(status);
    for (key, value) in headers {
        builder = builder.header(key.as_ref(), value.as_ref());
    }
    builder.body(Full::new(body.into())).unwrap_or_else(|_| {
        Response::new(Full::new(Bytes::from("Internal Server Error")))
    })
}

/// Create a 200 JSON response.
pub fn json_response<T: Serialize>(body: &T) -> Response<Full<Bytes>> {
    let json = serde_json::to_string_pretty(body).unwrap_or_else(|_| "{}".to_string());
    build_response_with_headers(StatusCode::OK, [("Content-Type", "application/json")], json)
}

/// Create a BigQuery-style error envelope.
pub fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = json!({
        "error": {
            "code": status.as_u16(),
            "message": message,
        }
    });
    let json = serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string());
    build_response_with_headers(status, [("Content-Type", "application/json")], json)
}
