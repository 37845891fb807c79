//! jobs.insert — synthesize a query job that is already `DONE`.
//!
//! The mock models the "job submission returns a completed job" fast path:
//! no pending or running state is ever returned, so a client that polls job
//! status exactly once proceeds straight to fetching results.

use crate::fixtures;
use serde_json::{json, Value};

/// Create a completed job resource for `project`. The request body is
/// ignored; the job's query text references the canned dataset fixtures so
/// the fake world stays consistent with datasets.list.
pub fn create(project: &str) -> Value {
    json!({
        "kind": "bigquery#job",
        "etag": fixtures::JOB_ETAG,
        "id": format!("{project}:{}", fixtures::JOB_ID),
        "selfLink": format!(
            "{}/bigquery/v2/projects/{project}/jobs/{}",
            fixtures::UPSTREAM_BASE_URL,
            fixtures::JOB_ID
        ),
        "jobReference": {
            "projectId": project,
            "jobId": fixtures::JOB_ID,
        },
        "configuration": {
            "query": {
                "query": format!(
                    "select count(*) from {}.{}",
                    fixtures::DATASET_NAME,
                    fixtures::JOB_SOURCE_TABLE
                ),
                "destinationTable": {
                    "projectId": project,
                    "datasetId": fixtures::ANON_DATASET_ID,
                    "tableId": fixtures::ANON_TABLE_ID,
                },
                "createDisposition": "CREATE_IF_NEEDED",
                "writeDisposition": "WRITE_TRUNCATE",
            }
        },
        "status": {
            "state": "DONE",
        },
        "statistics": {
            "creationTime": fixtures::JOB_CREATION_TIME,
            "startTime": fixtures::JOB_START_TIME,
        },
        "user_email": fixtures::USER_EMAIL,
    })
}
