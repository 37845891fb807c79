//! Error taxonomy.
//!
//! Startup failures (missing flag, unreadable discovery file, unbindable
//! port) propagate as `anyhow::Error` out of `main` and exit non-zero.
//! Request-scoped failures are explicit values carried to the request
//! boundary, where [`crate::config::ErrorPolicy`] decides between the
//! legacy process-fatal behavior and a per-request error response.

use thiserror::Error;

/// A request path that no route binding matched.
#[derive(Debug, Error)]
#[error("no route matches path {path:?}")]
pub struct UnmatchedPath {
    pub path: String,
}

/// Request-scoped serving failures.
#[derive(Debug, Error)]
pub enum ServeError {
    /// A client exercised an endpoint the mock never implemented. Under the
    /// legacy policy this terminates the process so the test author sees it
    /// immediately instead of a silent 404.
    #[error(transparent)]
    Unrouted(#[from] UnmatchedPath),

    /// The insertAll request body was not a JSON object.
    #[error("invalid insertAll request body: {source}")]
    BadInsertBody {
        #[source]
        source: serde_json::Error,
    },

    /// A wired row sink rejected the batch (coercion failure is fatal to
    /// the whole batch per the sink contract).
    #[error("row sink rejected batch: {0}")]
    Sink(#[from] crate::sink::SinkError),
}

impl ServeError {
    /// HTTP status used when the policy is to respond instead of aborting.
    pub fn status(&self) -> hyper::StatusCode {
        match self {
            ServeError::Unrouted(_) => hyper::StatusCode::NOT_FOUND,
            ServeError::BadInsertBody { .. } | ServeError::Sink(_) => {
                hyper::StatusCode::BAD_REQUEST
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[test]
    fn test_serve_error_status_mapping() {
        let unrouted = ServeError::from(UnmatchedPath {
            path: "/not/a/real/path".to_string(),
        });
        assert_eq!(unrouted.status(), StatusCode::NOT_FOUND);

        let bad_body = ServeError::BadInsertBody {
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        assert_eq!(bad_body.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unmatched_path_message_includes_path() {
        let err = UnmatchedPath {
            path: "/nope".to_string(),
        };
        assert!(err.to_string().contains("/nope"));
    }
}
