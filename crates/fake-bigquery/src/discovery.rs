//! Discovery document loading and base-URL rewriting.
//!
//! Generated API clients fetch a discovery document at startup to learn the
//! service's base URL. The mock loads the real service's document once and
//! rewrites every occurrence of the upstream base URL to its own address,
//! so reflective clients transparently target the mock.
//!
//! The document is treated as opaque bytes, never parsed as JSON; the
//! rewrite is a plain substring replacement. Accepted limitation: the
//! upstream URL is replaced everywhere it occurs.

use aho_corasick::AhoCorasick;
use anyhow::Context;
use bytes::Bytes;
use std::path::Path;
use tracing::info;

/// The rewritten discovery document. Immutable after construction; cloning
/// is cheap and safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct DiscoveryDocument {
    body: Bytes,
}

impl DiscoveryDocument {
    /// Read the document at `path` and replace every occurrence of
    /// `upstream_base` with `local_base`.
    ///
    /// An unreadable file is a startup misconfiguration and fails the whole
    /// process, not a runtime condition.
    pub fn load(
        path: &Path,
        upstream_base: &str,
        local_base: &str,
    ) -> Result<Self, anyhow::Error> {
        let raw = std::fs::read(path)
            .with_context(|| format!("failed to read discovery document {}", path.display()))?;
        let body = rewrite(&raw, upstream_base, local_base)?;
        info!(
            path = %path.display(),
            bytes = body.len(),
            %local_base,
            "loaded discovery document"
        );
        Ok(Self { body: body.into() })
    }

    /// The rewritten document, served verbatim on the discovery endpoint.
    pub fn body(&self) -> Bytes {
        self.body.clone()
    }
}

/// Replace every occurrence of `from` with `to` in `raw`.
fn rewrite(raw: &[u8], from: &str, to: &str) -> Result<Vec<u8>, anyhow::Error> {
    let searcher = AhoCorasick::new([from]).context("failed to build URL searcher")?;
    Ok(searcher.replace_all_bytes(raw, &[to]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::UPSTREAM_BASE_URL;
    use std::io::Write;

    const LOCAL: &str = "http://localhost:9090";

    fn count(haystack: &[u8], needle: &str) -> usize {
        AhoCorasick::new([needle])
            .unwrap()
            .find_iter(haystack)
            .count()
    }

    #[test]
    fn test_rewrite_replaces_every_occurrence() {
        let doc = format!(
            r#"{{"baseUrl": "{u}/bigquery/v2/", "rootUrl": "{u}/", "kind": "discovery#restDescription"}}"#,
            u = UPSTREAM_BASE_URL
        );
        let out = rewrite(doc.as_bytes(), UPSTREAM_BASE_URL, LOCAL).unwrap();
        assert_eq!(count(&out, UPSTREAM_BASE_URL), 0);
        assert_eq!(count(&out, LOCAL), 2);
    }

    #[test]
    fn test_rewrite_preserves_occurrence_count() {
        let doc = format!("{u} x {u} y {u}", u = UPSTREAM_BASE_URL);
        let out = rewrite(doc.as_bytes(), UPSTREAM_BASE_URL, LOCAL).unwrap();
        assert_eq!(count(&out, LOCAL), 3);
    }

    #[test]
    fn test_rewrite_without_occurrences_is_identity() {
        let doc = br#"{"kind": "discovery#restDescription"}"#;
        let out = rewrite(doc, UPSTREAM_BASE_URL, LOCAL).unwrap();
        assert_eq!(out, doc);
    }

    #[test]
    fn test_rewrite_keeps_preexisting_local_occurrences() {
        let doc = format!("{LOCAL} and {u}", u = UPSTREAM_BASE_URL);
        let out = rewrite(doc.as_bytes(), UPSTREAM_BASE_URL, LOCAL).unwrap();
        assert_eq!(count(&out, LOCAL), 2);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = DiscoveryDocument::load(
            Path::new("/nonexistent/discovery.json"),
            UPSTREAM_BASE_URL,
            LOCAL,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rewrites_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"rootUrl": "{}/"}}"#, UPSTREAM_BASE_URL).unwrap();

        let doc = DiscoveryDocument::load(file.path(), UPSTREAM_BASE_URL, LOCAL).unwrap();
        let body = doc.body();
        assert_eq!(count(&body, UPSTREAM_BASE_URL), 0);
        assert_eq!(count(&body, LOCAL), 1);
    }
}
