//! tables.list — single-element table list.

use crate::fixtures;
use serde_json::{json, Value};

/// List the one table under `project`/`dataset`.
pub fn list(project: &str, dataset: &str) -> Value {
    json!({
        "kind": "bigquery#tableList",
        "etag": fixtures::TABLE_LIST_ETAG,
        "tables": [
            {
                "kind": "bigquery#table",
                "id": format!("{project}:{dataset}.{}", fixtures::TABLE_NAME),
                "tableReference": {
                    "projectId": project,
                    "datasetId": dataset,
                    "tableId": fixtures::TABLE_NAME,
                },
                "type": "TABLE",
                "creationTime": fixtures::TABLE_CREATION_TIME,
            }
        ],
        "totalItems": 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_table_threads_captures() {
        let body = list("p1", "d1");
        let tables = body["tables"].as_array().unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0]["id"], "p1:d1.visits");
        assert_eq!(tables[0]["tableReference"]["projectId"], "p1");
        assert_eq!(tables[0]["tableReference"]["datasetId"], "d1");
        assert_eq!(tables[0]["tableReference"]["tableId"], "visits");
        assert_eq!(tables[0]["type"], "TABLE");
    }

    #[test]
    fn test_fixed_creation_time() {
        let body = list("p", "d");
        assert_eq!(body["tables"][0]["creationTime"], "1510171319097");
        assert_eq!(body["totalItems"], 1);
    }
}
