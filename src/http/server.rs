//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all route bindings
//! - Wire up middleware (request tracing)
//! - Serve connections on a bound listener
//! - Drain in-flight requests on shutdown

use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::http::echo;

/// HTTP server for the echo service.
///
/// Owns the router, built once at construction and passed into the
/// bootstrap explicitly; no global registration state.
pub struct EchoServer {
    router: Router,
}

impl EchoServer {
    /// Create a new server with its route bindings in place.
    pub fn new() -> Self {
        // The handler already logs a failed body read; the trace layer
        // must not emit a second error record for the same request.
        let router = Router::new()
            .route("/echo", post(echo::handle))
            .layer(TraceLayer::new_for_http().on_failure(()));

        Self { router }
    }

    /// The router with all bindings, for in-process dispatch in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener
    /// until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

impl Default for EchoServer {
    fn default() -> Self {
        Self::new()
    }
}
