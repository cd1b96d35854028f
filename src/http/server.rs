//! Router assembly and the serving loop.

use super::{AppState, handlers};
use crate::todo::ports::{TodoRepository, TodoRepositoryError};
use axum::{
    Router,
    routing::{get, post},
};
use mockable::Clock;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Errors that stop the HTTP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Requested address.
        address: SocketAddr,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The server loop failed.
    #[error("server loop failed: {0}")]
    Serve(#[source] std::io::Error),

    /// The todo store could not be opened.
    #[error("failed to open todo store: {0}")]
    Storage(#[from] TodoRepositoryError),
}

/// Builds the application router over `state`.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/todos",
            get(handlers::list_todos::<R, C>).post(handlers::create_todo::<R, C>),
        )
        .route("/todos/statistics", get(handlers::todo_statistics::<R, C>))
        .route(
            "/todos/:id",
            get(handlers::get_todo::<R, C>)
                .put(handlers::update_todo::<R, C>)
                .delete(handlers::delete_todo::<R, C>),
        )
        .route("/todos/:id/complete", post(handlers::complete_todo::<R, C>))
        .route("/tools", get(handlers::list_tools::<R, C>))
        .route("/tools/:name", post(handlers::invoke_tool::<R, C>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `address` and serves `app` until Ctrl-C is received.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] when the address is unavailable and
/// [`ServerError::Serve`] when the server loop fails.
pub async fn serve(address: SocketAddr, app: Router) -> Result<(), ServerError> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;
    let local = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(address = %local, "listening for HTTP requests");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
