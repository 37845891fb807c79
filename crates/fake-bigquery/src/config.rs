//! Startup configuration.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

/// What to do when a request fails in a way the original implementation
/// treated as fatal (unmatched path, malformed insertAll body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorPolicy {
    /// Legacy behavior: log and terminate the process, so a test exercising
    /// an unimplemented endpoint fails loudly.
    #[default]
    Abort,
    /// Respond with a per-request error (404/400) and keep serving.
    Respond,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "fake-bigquery")]
pub struct Config {
    /// Path to the discovery document to serve (base URLs are rewritten to
    /// point at this mock).
    #[arg(long, env = "FAKE_BIGQUERY_DISCOVERY_JSON_PATH")]
    pub discovery_json_path: PathBuf,

    /// Address to listen on. Hostnames like `localhost` are resolved.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on. Port 0 binds an ephemeral port.
    #[arg(short, long, default_value = "9090")]
    pub port: u16,

    /// Behavior on unmatched paths and undecodable insertAll bodies.
    #[arg(long, value_enum, default_value = "abort")]
    pub on_error: ErrorPolicy,
}

impl Config {
    /// Socket address to bind. Hostnames are resolved; the first resolved
    /// address wins.
    pub fn listen_addr(&self) -> Result<SocketAddr, anyhow::Error> {
        let spec = format!("{}:{}", self.host, self.port);
        spec.to_socket_addrs()
            .with_context(|| format!("failed to resolve listen address {spec}"))?
            .next()
            .with_context(|| format!("listen address {spec} resolved to no addresses"))
    }
}
