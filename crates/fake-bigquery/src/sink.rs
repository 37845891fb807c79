//! Row-sink collaborator boundary.
//!
//! The insert endpoint's natural downstream is a batch-oriented time-series
//! write: each loosely-typed row becomes one point with a tag subset, a
//! typed field subset and a timestamp taken from the row's integer `time`
//! field. Writing to a real time-series store is out of scope here; this
//! module fixes the interface and the data-shape conversion, and ships a
//! logging reference implementation. The default mock wires no sink, so
//! the insert endpoint accepts any object shape; a deployment that wants
//! one passes it to `MockServer::bind_with_sink`.

use std::collections::HashMap;
use thiserror::Error;
use tracing::info;

/// A loosely-typed row as it arrives on the insert endpoint.
pub type Row = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum SinkError {
    /// A field that must be numeric was not. Fatal to the whole batch.
    #[error("field {field} has non-numeric value {value:?}")]
    Coercion { field: &'static str, value: String },
    #[error("sink write failed: {0}")]
    Write(String),
}

/// Value of a single point field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// One time-series point, ready for a native client write.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Unix seconds, from the row's `time` field.
    pub timestamp: i64,
    pub tags: HashMap<&'static str, String>,
    pub fields: HashMap<&'static str, FieldValue>,
}

impl Point {
    /// Convert one visit row into a point.
    ///
    /// `duration` is coerced to float, the size fields to int; `status` and
    /// the remaining attributes stay strings. Any coercion failure fails
    /// the batch.
    pub fn from_visit(visit: &Row) -> Result<Self, SinkError> {
        let get = |key: &str| visit.get(key).map(String::as_str).unwrap_or("");

        let timestamp = to_int("time", get("time"))?;

        let mut tags = HashMap::new();
        tags.insert("host", get("host").to_string());

        let mut fields = HashMap::new();
        fields.insert("duration", FieldValue::Float(to_float("duration", get("duration"))?));
        fields.insert(
            "response_size",
            FieldValue::Integer(to_int("response_size", get("response_size"))?),
        );
        fields.insert(
            "header_size",
            FieldValue::Integer(to_int("header_size", get("header_size"))?),
        );
        for key in [
            "trace",
            "server_region",
            "protocol",
            "property_name",
            "status", // don't insert as int
            "remote_addr",
            "request_method",
            "uri",
            "user_agent",
            "referer",
            "content_type",
            "cache_status",
            "geo_continent",
            "geo_continent_code",
            "geo_country",
            "geo_country_code",
        ] {
            fields.insert(key, FieldValue::Text(get(key).to_string()));
        }

        Ok(Point {
            timestamp,
            tags,
            fields,
        })
    }
}

fn to_int(field: &'static str, value: &str) -> Result<i64, SinkError> {
    value.parse().map_err(|_| SinkError::Coercion {
        field,
        value: value.to_string(),
    })
}

fn to_float(field: &'static str, value: &str) -> Result<f64, SinkError> {
    value.parse().map_err(|_| SinkError::Coercion {
        field,
        value: value.to_string(),
    })
}

/// Batch write target for inserted rows.
///
/// Implementors must ensure the target storage container exists before
/// writing, and must treat any coercion failure as fatal to the batch.
pub trait RowSink: Send + Sync {
    fn insert_rows(&self, rows: &[Row]) -> Result<(), SinkError>;
}

/// Reference in-process sink: converts the batch and logs it. Not wired
/// by default; see `MockServer::bind_with_sink`.
pub struct LoggingSink {
    measurement: String,
}

impl LoggingSink {
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
        }
    }
}

impl RowSink for LoggingSink {
    fn insert_rows(&self, rows: &[Row]) -> Result<(), SinkError> {
        let points = rows.iter().map(Point::from_visit).collect::<Result<Vec<_>, _>>()?;
        info!(
            measurement = %self.measurement,
            points = points.len(),
            "inserting points"
        );
        Ok(())
    }
}
