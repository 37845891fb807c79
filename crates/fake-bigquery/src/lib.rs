//! A deterministic mock of the BigQuery v2 REST API for integration tests.
//!
//! The mock serves a rewritten discovery document so generated clients
//! target it transparently, dispatches request paths over an ordered
//! pattern table, and synthesizes canned JSON responses whose identifiers
//! stay consistent across a dataset -> table -> job -> query workflow.

pub mod config;
pub mod discovery;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod router;
pub mod server;
pub mod sink;
