//! Canned resource fixtures.
//!
//! Every response the mock serves is parameterized from this one set of
//! constants so that a client chaining dataset -> table -> job -> query
//! calls observes a self-consistent fake dataset: the dataset name returned
//! by list-datasets is the same one embedded in the job's query text.

/// Base URL of the real service; every occurrence in the discovery document
/// is rewritten to the mock's own address at startup.
pub const UPSTREAM_BASE_URL: &str = "https://www.googleapis.com";

/// The single dataset the mock pretends to host.
pub const DATASET_NAME: &str = "belugacdn_logs";

/// The single table listed under [`DATASET_NAME`].
pub const TABLE_NAME: &str = "visits";

/// Source table referenced by the canned job's query text.
pub const JOB_SOURCE_TABLE: &str = "jobs";

/// Owner email echoed in job resources.
pub const USER_EMAIL: &str = "a@b.com";

/// Fixed creation timestamp (epoch millis, as the API serializes it).
pub const TABLE_CREATION_TIME: &str = "1510171319097";

/// Job id returned by create-job.
pub const JOB_ID: &str = "bqjob_r7c51234c0123569f_0000015fd1968828_1";

/// Job id embedded in query results (the API uses a distinct id here).
pub const QUERY_JOB_ID: &str = "bqjob_r6c744039b40f818e_0000015fd19a3130_1";

/// Anonymized destination dataset/table ids, as BigQuery names the
/// destination of an ad-hoc query.
pub const ANON_DATASET_ID: &str = "_2cf7cfaa9c05dd2381014b72df999b53fd45fe85";
pub const ANON_TABLE_ID: &str = "anon5fb7e0264db7f54e07e3df0833fbfcfd11d63e03";

/// The one-and-only query result value, served for every query.
pub const QUERY_RESULT_VALUE: &str = "704";

pub const JOB_CREATION_TIME: &str = "1511049825816";
pub const JOB_START_TIME: &str = "1511049826072";

// Per-endpoint etags, verbatim from captured responses.
pub const DATASET_LIST_ETAG: &str = "\"cX5UmbB_R-S07ii743IKGH9YCYM/qwnfLrlOKTXd94DjXLYMd9AnLA8\"";
pub const TABLE_LIST_ETAG: &str = "\"cX5UmbB_R-S07ii743IKGH9YCYM/zZCSENSD7Bu0j7yv3iZTn_ilPBg\"";
pub const JOB_ETAG: &str = "\"cX5UmbB_R-S07ii743IKGH9YCYM/_oiKSu1NLem_L8Icwp_IYkfy3vg\"";
pub const QUERY_RESULTS_ETAG: &str = "\"cX5UmbB_R-S07ii743IKGH9YCYM/wLFL5h11OCxiWY3yDLqREwltkXs\"";
