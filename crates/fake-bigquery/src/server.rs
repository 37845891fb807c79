//! HTTP listener and request boundary.
//!
//! One fixed listener; every request, including the root, goes through the
//! route table. The discovery document is rewritten against the port that
//! was actually bound, so ephemeral ports (port 0) work in tests.

use crate::config::{Config, ErrorPolicy};
use crate::discovery::DiscoveryDocument;
use crate::error::ServeError;
use crate::fixtures::UPSTREAM_BASE_URL;
use crate::handlers::{self, build_response_with_headers, error_response, json_response};
use crate::router::{Route, RouteTable};
use crate::sink::RowSink;
use anyhow::Context;
use bytes::Bytes;
use http_body_util::BodyExt;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

pub struct MockServer {
    listener: TcpListener,
    state: Arc<ServerState>,
}

struct ServerState {
    discovery: DiscoveryDocument,
    routes: RouteTable,
    policy: ErrorPolicy,
    sink: Option<Box<dyn RowSink>>,
}

impl MockServer {
    /// Bind the listener, rewrite the discovery document against the bound
    /// port and compile the route table. All failures here are startup
    /// misconfigurations and abort the process via `main`.
    pub async fn bind(config: &Config) -> Result<Self, anyhow::Error> {
        Self::bind_with_sink(config, None).await
    }

    /// Like [`MockServer::bind`], with a row sink wired to the insertAll
    /// endpoint. This is the collaborator seam: the default mock wires no
    /// sink so that any JSON object body is accepted, while a wired sink's
    /// batch-fatal rejection fails the request.
    pub async fn bind_with_sink(
        config: &Config,
        sink: Option<Box<dyn RowSink>>,
    ) -> Result<Self, anyhow::Error> {
        let addr = config.listen_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        let port = listener.local_addr()?.port();
        let local_base = format!("http://localhost:{port}");

        let discovery = DiscoveryDocument::load(
            &config.discovery_json_path,
            UPSTREAM_BASE_URL,
            &local_base,
        )?;
        let routes = RouteTable::compile()?;

        Ok(Self {
            listener,
            state: Arc::new(ServerState {
                discovery,
                routes,
                policy: config.on_error,
                sink,
            }),
        })
    }

    /// The address actually bound, for clients targeting an ephemeral port.
    pub fn local_addr(&self) -> Result<SocketAddr, anyhow::Error> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept loop. Runs until the process exits.
    pub async fn run(self) -> Result<(), anyhow::Error> {
        info!("listening on http://{}", self.listener.local_addr()?);

        loop {
            let (stream, _) = self.listener.accept().await?;
            let io = TokioIo::new(stream);
            let state = Arc::clone(&self.state);

            tokio::spawn(async move {
                let service = service_fn(move |req| {
                    let state = Arc::clone(&state);
                    async move { handle_request(req, state).await }
                });

                if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                    debug!("connection error: {}", e);
                }
            });
        }
    }
}

async fn handle_request(
    req: Request<Incoming>,
    state: Arc<ServerState>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let path = req.uri().path().to_string();
    debug!(method = %req.method(), %path, "incoming request");

    match serve(req, &path, &state).await? {
        Ok(response) => Ok(response),
        Err(err) => Ok(apply_policy(&err, state.policy)),
    }
}

/// Dispatch and invoke the matched handler. The outer error is transport
/// failure; the inner one carries request-scoped failures to the policy
/// layer.
async fn serve(
    req: Request<Incoming>,
    path: &str,
    state: &ServerState,
) -> Result<Result<Response<Full<Bytes>>, ServeError>, hyper::Error> {
    let route = match state.routes.dispatch(path) {
        Ok(route) => route,
        Err(unmatched) => return Ok(Err(unmatched.into())),
    };

    let response = match route {
        Route::Discovery => build_response_with_headers(
            StatusCode::OK,
            [("Content-Type", "application/json")],
            state.discovery.body(),
        ),
        Route::ListDatasets { project } => json_response(&handlers::datasets::list(&project)),
        Route::ListTables { project, dataset } => {
            json_response(&handlers::tables::list(&project, &dataset))
        }
        Route::CreateJob { project } => json_response(&handlers::jobs::create(&project)),
        Route::QueryResults { project, query_id } => {
            debug!(%query_id, "query results requested");
            json_response(&handlers::queries::results(&project))
        }
        Route::InsertAll {
            project,
            dataset,
            table,
        } => {
            let body = req.into_body().collect().await?.to_bytes();
            match handlers::tabledata::insert(
                &project,
                &dataset,
                &table,
                &body,
                state.sink.as_deref(),
            ) {
                Ok(envelope) => json_response(&envelope),
                Err(err) => return Ok(Err(err)),
            }
        }
    };

    Ok(Ok(response))
}

/// Apply the configured error policy at the request boundary.
///
/// `Abort` preserves the legacy behavior: an unmatched path means a test is
/// exercising an endpoint the mock never implemented, and a silent 404
/// would hide that from the test author.
fn apply_policy(err: &ServeError, policy: ErrorPolicy) -> Response<Full<Bytes>> {
    match policy {
        ErrorPolicy::Abort => {
            error!("fatal: {err}");
            std::process::exit(1);
        }
        ErrorPolicy::Respond => {
            debug!("request failed: {err}");
            error_response(err.status(), &err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnmatchedPath;

    #[test]
    fn test_respond_policy_maps_unmatched_to_404() {
        let err = ServeError::from(UnmatchedPath {
            path: "/nope".to_string(),
        });
        let resp = apply_policy(&err, ErrorPolicy::Respond);
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_respond_policy_maps_bad_body_to_400() {
        let err = ServeError::BadInsertBody {
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        };
        let resp = apply_policy(&err, ErrorPolicy::Respond);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
