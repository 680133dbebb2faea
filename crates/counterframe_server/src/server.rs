//! HTTP server.

use crate::config::{ServerConfig, COUNT_PATH};
use crate::error::{ServerError, ServerResult};
use crate::handler::{FrameHandler, FrameRequest};
use crate::response::FrameResponse;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The frame server.
///
/// Serves the frame endpoint on both `GET` and `POST`, plus a `/health`
/// probe. Every request is handled independently.
///
/// # Example
///
/// ```
/// use counterframe_protocol::SigningKey;
/// use counterframe_server::{FrameServer, ServerConfig};
///
/// let key = SigningKey::generate();
/// let config = ServerConfig::new("https://frame.example", key).unwrap();
/// let server = FrameServer::new(config);
///
/// // In a real application, call `server.serve().await`
/// let _router = server.router();
/// ```
pub struct FrameServer {
    handler: Arc<FrameHandler>,
}

impl FrameServer {
    /// Creates a new frame server.
    pub fn new(config: ServerConfig) -> Self {
        let handler = Arc::new(FrameHandler::new(Arc::new(config)));
        Self { handler }
    }

    /// Returns the request handler.
    pub fn handler(&self) -> &FrameHandler {
        &self.handler
    }

    /// Builds the axum router.
    pub fn router(&self) -> Router {
        let config = self.handler.config();
        let count_route = format!("/{COUNT_PATH}");

        Router::new()
            .route(&count_route, get(count).post(count))
            .route("/health", get(health))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
                    .layer(TimeoutLayer::new(config.request_timeout)),
            )
            .with_state(Arc::clone(&self.handler))
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        let listener = TcpListener::bind(self.handler.config().bind_addr).await?;
        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serves on `listener` until `shutdown` completes.
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(%addr, host = %self.handler.config().host(), "frame server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Io)?;

        info!("frame server stopped");
        Ok(())
    }
}

async fn count(
    State(handler): State<Arc<FrameHandler>>,
    body: Bytes,
) -> ServerResult<FrameResponse> {
    let request = FrameRequest::from_body(&body)?;
    handler.handle(&request)
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
