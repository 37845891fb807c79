//! tabledata.insertAll — decode, log, acknowledge.
//!
//! The mock performs no validation beyond "is it a JSON object". The
//! decoded payload is logged so tests can assert on what a client sent.
//! Per the real API's convention, a response without an `insertErrors`
//! field means every row was accepted.

use crate::error::ServeError;
use crate::sink::{Row, RowSink};
use serde_json::{json, Map, Value};
use tracing::info;

/// Handle an insertAll body for `project`/`dataset`/`table`.
///
/// When a row sink is wired, rows found in the payload are handed to it as
/// one batch; a sink rejection (coercion failure) fails the request per the
/// collaborator's batch-fatal contract. The default mock wires no sink.
pub fn insert(
    project: &str,
    dataset: &str,
    table: &str,
    body: &[u8],
    sink: Option<&dyn RowSink>,
) -> Result<Value, ServeError> {
    let decoded: Map<String, Value> =
        serde_json::from_slice(body).map_err(|source| ServeError::BadInsertBody { source })?;

    let payload = Value::Object(decoded.clone());
    info!(
        %project,
        %dataset,
        %table,
        %payload,
        "insertAll"
    );

    if let Some(sink) = sink {
        let rows = rows_from_body(&decoded);
        if !rows.is_empty() {
            sink.insert_rows(&rows)?;
        }
    }

    // No insertErrors implies success.
    Ok(json!({
        "kind": "bigquery#tableDataInsertAllResponse"
    }))
}

/// Flatten the insertAll `rows[].json` objects into loosely-typed rows.
/// Non-string scalars are stringified; anything that is not an object row
/// is skipped.
fn rows_from_body(body: &Map<String, Value>) -> Vec<Row> {
    let Some(rows) = body.get("rows").and_then(Value::as_array) else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(|entry| entry.get("json").and_then(Value::as_object))
        .map(|fields| {
            fields
                .iter()
                .map(|(name, value)| {
                    let text = match value {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (name.clone(), text)
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::LoggingSink;

    #[test]
    fn test_valid_object_returns_success_envelope() {
        let body = br#"{"kind": "bigquery#tableDataInsertAllRequest", "rows": []}"#;
        let response = insert("p", "d", "t", body, None).unwrap();
        assert_eq!(response["kind"], "bigquery#tableDataInsertAllResponse");
        assert!(response.get("insertErrors").is_none());
    }

    #[test]
    fn test_arbitrary_object_shape_is_accepted() {
        let body = br#"{"whatever": {"nested": [1, 2, 3]}}"#;
        assert!(insert("p", "d", "t", body, None).is_ok());
    }

    #[test]
    fn test_malformed_json_is_an_error_value() {
        let err = insert("p", "d", "t", b"{not json", None).unwrap_err();
        assert!(matches!(err, ServeError::BadInsertBody { .. }));
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let err = insert("p", "d", "t", b"[1, 2, 3]", None).unwrap_err();
        assert!(matches!(err, ServeError::BadInsertBody { .. }));
    }

    #[test]
    fn test_rows_extraction_stringifies_scalars() {
        let body: Map<String, Value> = serde_json::from_str(
            r#"{"rows": [
                {"insertId": "a", "json": {"time": 1510171319, "host": "edge-1", "duration": 0.5}},
                {"insertId": "b", "json": {"host": "edge-2"}}
            ]}"#,
        )
        .unwrap();
        let rows = rows_from_body(&body);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["time"], "1510171319");
        assert_eq!(rows[0]["host"], "edge-1");
        assert_eq!(rows[0]["duration"], "0.5");
        assert_eq!(rows[1]["host"], "edge-2");
    }

    #[test]
    fn test_wired_sink_receives_visit_rows() {
        let sink = LoggingSink::new("visits");
        let body = br#"{"rows": [{"json": {
            "time": "1510171319", "host": "edge-1", "duration": "0.25",
            "response_size": "1024", "header_size": "256", "status": "200"
        }}]}"#;
        assert!(insert("p", "d", "t", body, Some(&sink)).is_ok());
    }

    #[test]
    fn test_wired_sink_coercion_failure_fails_request() {
        let sink = LoggingSink::new("visits");
        let body = br#"{"rows": [{"json": {"time": "not-a-number"}}]}"#;
        assert!(insert("p", "d", "t", body, Some(&sink)).is_err());
    }
}
