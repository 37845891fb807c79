//! datasets.list — single-element dataset list.

use crate::fixtures;
use serde_json::{json, Value};

/// List the one dataset the mock hosts under `project`.
pub fn list(project: &str) -> Value {
    json!({
        "kind": "bigquery#datasetList",
        "etag": fixtures::DATASET_LIST_ETAG,
        "datasets": [
            {
                "kind": "bigquery#dataset",
                "id": format!("{project}:{}", fixtures::DATASET_NAME),
                "datasetReference": {
                    "datasetId": fixtures::DATASET_NAME,
                    "projectId": project,
                }
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dataset_threads_project() {
        let body = list("my-project");
        let datasets = body["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0]["id"], "my-project:belugacdn_logs");
        assert_eq!(datasets[0]["datasetReference"]["projectId"], "my-project");
        assert_eq!(datasets[0]["datasetReference"]["datasetId"], "belugacdn_logs");
    }

    #[test]
    fn test_list_is_deterministic() {
        assert_eq!(list("p"), list("p"));
    }
}
