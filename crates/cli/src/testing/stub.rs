// Path: crates/cli/src/testing/stub.rs

//! Local HTTP stubs standing in for remote action hosts.
//!
//! Tests compose an `axum::Router` describing the host they need (a
//! descriptor GET, an execution POST, a registry document) and hand it to
//! [`serve_app`], which binds an ephemeral local port and serves it until
//! the returned [`StubServer`] is dropped.

use axum::{serve, Router};
use blink_client::Url;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A running stub host bound to an ephemeral local port.
pub struct StubServer {
    /// Base URL of the stub, e.g. `http://127.0.0.1:49152`.
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Builds an absolute URL for a path on this stub.
    pub fn url(&self, path: &str) -> Url {
        Url::parse(&format!("{}{}", self.base_url, path)).unwrap()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Binds `app` to `127.0.0.1:0` and serves it in a background task.
pub async fn serve_app(app: Router) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        serve(listener, app).await.unwrap();
    });
    StubServer { base_url, handle }
}
