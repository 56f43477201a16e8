//! Integration tests for the Vanakkam client.
//!
//! Each test spawns an in-process axum stub backend on an ephemeral port and
//! points an independently configured client at it — no external server, no
//! shared state between tests.
//!
//! # Test Categories
//!
//! - `dispatch` - Classification, routing, payload round-trip, and error
//!   normalization through the dispatcher facade
//! - `health` - Liveness probe semantics

use axum::routing::{MethodRouter, get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

use vanakkam_client::ClientConfig;
use vanakkam_core::{ChatRequest, ChatResponse, HealthStatus};

/// An in-process stub backend plus a client config pointing at it.
pub struct TestBackend {
    /// Config aimed at the stub's ephemeral address.
    pub config: ClientConfig,
    server: JoinHandle<()>,
}

impl TestBackend {
    /// Spawn the given router on an ephemeral local port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound; fine in tests.
    pub async fn spawn(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener has a local addr");

        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve stub backend");
        });

        Self {
            config: config_for(&format!("http://{addr}")),
            server,
        }
    }
}

impl Drop for TestBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// A config pointing at a port nothing listens on.
///
/// Binds and immediately drops an ephemeral listener, so a connect attempt
/// is refused.
///
/// # Panics
///
/// Panics if the listener cannot be bound; fine in tests.
pub async fn unreachable_config() -> ClientConfig {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("listener has a local addr");
    drop(listener);
    config_for(&format!("http://{addr}"))
}

/// A router serving every skill endpoint, echoing route, wire type, and
/// message back as `"{route}:{type}:{message}"`, plus a healthy liveness
/// resource.
#[must_use]
pub fn skills_router() -> Router {
    Router::new()
        .route("/chat", echo_route("chat"))
        .route("/story", echo_route("story"))
        .route("/culture", echo_route("culture"))
        .route("/grammar", echo_route("grammar"))
        .route("/explain", echo_route("explain"))
        .route("/health", health_route(HealthStatus::HEALTHY))
}

/// A router whose skill endpoints all reply with the given status and body.
#[must_use]
pub fn rejecting_router(status: u16, body: &str) -> Router {
    let status = axum::http::StatusCode::from_u16(status).expect("valid status code");
    let body = body.to_string();
    Router::new().fallback(move || {
        let body = body.clone();
        async move { (status, body) }
    })
}

/// A router whose liveness resource reports the given status value.
#[must_use]
pub fn health_router(status: &str) -> Router {
    Router::new().route("/health", health_route(status))
}

fn echo_route(name: &'static str) -> MethodRouter {
    post(move |Json(request): Json<ChatRequest>| async move {
        Json(ChatResponse {
            response: format!("{name}:{}:{}", request.intent, request.message),
            audio_url: None,
            timestamp: None,
        })
    })
}

fn health_route(status: &str) -> MethodRouter {
    let status = status.to_string();
    get(move || {
        let status = status.clone();
        async move { Json(HealthStatus { status }) }
    })
}

fn config_for(base: &str) -> ClientConfig {
    let base: Url = base.parse().expect("valid URL");
    ClientConfig::new(base).expect("valid base URL")
}
