//! Path-pattern dispatch over the BigQuery REST hierarchy.
//!
//! An ordered table of (matcher, binder) pairs is evaluated against each
//! request path; the first match wins and its captured segments are bound
//! into a typed [`Route`]. Patterns are anchored and chosen so at most one
//! plausibly matches a real path; evaluation order is the tie-break.
//!
//! An unmatched path is reported as a value ([`UnmatchedPath`]) rather than
//! handled here; the server decides whether that is process-fatal.

use crate::error::UnmatchedPath;
use regex::Regex;

/// A matched endpoint with its path captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// GET /discovery/v1/apis/bigquery/v2/rest
    Discovery,
    /// GET /bigquery/v2/projects/{project}/datasets
    ListDatasets { project: String },
    /// GET /bigquery/v2/projects/{project}/datasets/{dataset}/tables
    ListTables { project: String, dataset: String },
    /// POST /bigquery/v2/projects/{project}/jobs
    CreateJob { project: String },
    /// GET /bigquery/v2/projects/{project}/queries/{queryId}
    QueryResults { project: String, query_id: String },
    /// POST /projects/{project}/datasets/{dataset}/tables/{table}/insertAll
    InsertAll {
        project: String,
        dataset: String,
        table: String,
    },
}

enum PathMatcher {
    Exact(&'static str),
    Pattern(Regex),
}

impl PathMatcher {
    /// Match `path` and extract captured segments, or `None`.
    fn captures(&self, path: &str) -> Option<Vec<String>> {
        match self {
            PathMatcher::Exact(exact) => (path == *exact).then(Vec::new),
            PathMatcher::Pattern(regex) => regex.captures(path).map(|caps| {
                caps.iter()
                    .skip(1)
                    .map(|c| c.map(|m| m.as_str().to_string()).unwrap_or_default())
                    .collect()
            }),
        }
    }
}

/// Binds a capture set to a [`Route`]. Returns `None` only if the capture
/// count does not match the binder's arity, which would be a table bug.
type Binder = fn(&[String]) -> Option<Route>;

pub struct RouteTable {
    bindings: Vec<(PathMatcher, Binder)>,
}

impl RouteTable {
    /// Compile the route table. Priority order matters: queries/{id} would
    /// also match a path like `queries/a/b`, so more specific patterns come
    /// first.
    pub fn compile() -> Result<Self, anyhow::Error> {
        let pattern = |re: &str| -> Result<PathMatcher, anyhow::Error> {
            Ok(PathMatcher::Pattern(Regex::new(re)?))
        };

        let bindings: Vec<(PathMatcher, Binder)> = vec![
            (
                PathMatcher::Exact("/discovery/v1/apis/bigquery/v2/rest"),
                |_| Some(Route::Discovery),
            ),
            (pattern("^/bigquery/v2/projects/(.*?)/datasets$")?, |caps| {
                match caps {
                    [project] => Some(Route::ListDatasets {
                        project: project.clone(),
                    }),
                    _ => None,
                }
            }),
            (
                pattern("^/bigquery/v2/projects/(.*?)/datasets/(.*?)/tables$")?,
                |caps| match caps {
                    [project, dataset] => Some(Route::ListTables {
                        project: project.clone(),
                        dataset: dataset.clone(),
                    }),
                    _ => None,
                },
            ),
            (pattern("^/bigquery/v2/projects/(.*?)/jobs$")?, |caps| {
                match caps {
                    [project] => Some(Route::CreateJob {
                        project: project.clone(),
                    }),
                    _ => None,
                }
            }),
            (
                pattern("^/bigquery/v2/projects/(.*?)/queries/(.*?)$")?,
                |caps| match caps {
                    [project, query_id] => Some(Route::QueryResults {
                        project: project.clone(),
                        query_id: query_id.clone(),
                    }),
                    _ => None,
                },
            ),
            (
                pattern("^/projects/(.*?)/datasets/(.*?)/tables/(.*?)/insertAll")?,
                |caps| match caps {
                    [project, dataset, table] => Some(Route::InsertAll {
                        project: project.clone(),
                        dataset: dataset.clone(),
                        table: table.clone(),
                    }),
                    _ => None,
                },
            ),
        ];

        Ok(Self { bindings })
    }

    /// Dispatch a request path to the first matching route.
    pub fn dispatch(&self, path: &str) -> Result<Route, UnmatchedPath> {
        self.bindings
            .iter()
            .find_map(|(matcher, bind)| matcher.captures(path).and_then(|caps| bind(&caps)))
            .ok_or_else(|| UnmatchedPath {
                path: path.to_string(),
            })
    }
}
