//! jobs.getQueryResults — the identical canned result for every query.
//!
//! The mock does not interpret query semantics: every query id receives a
//! single-column INTEGER schema with one literal row.

use crate::fixtures;
use serde_json::{json, Value};

/// Query results for `project`. The captured query id does not vary the
/// response; job identity is not modeled.
pub fn results(project: &str) -> Value {
    json!({
        "kind": "bigquery#getQueryResultsResponse",
        "etag": fixtures::QUERY_RESULTS_ETAG,
        "schema": {
            "fields": [
                {
                    "name": "f0_",
                    "type": "INTEGER",
                    "mode": "NULLABLE",
                }
            ]
        },
        "jobReference": {
            "projectId": project,
            "jobId": fixtures::QUERY_JOB_ID,
        },
        "totalRows": "1",
        "rows": [
            {
                "f": [
                    {
                        "v": fixtures::QUERY_RESULT_VALUE,
                    }
                ]
            }
        ],
        "totalBytesProcessed": "0",
        "jobComplete": true,
        "cacheHit": true
    })
}
