use axum::{
    Router,
    routing::{get, post},
};

use crate::splits;

async fn healthz() -> &'static str {
    "ok"
}

/// Builds the application router.
///
/// The split preview endpoint is stateless: every request carries its
/// full input and nothing is shared between requests.
pub fn router() -> Router {
    Router::new()
        .route("/split/preview", post(splits::preview))
        .route("/healthz", get(healthz))
}

pub async fn run() {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router()).await
}

pub fn spawn_with_listener(
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
