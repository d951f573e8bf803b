//! HTTP API for analysing and searching texts.
//!
//! - `POST /analyze` runs the analyzer over one text or a batch and stores the results
//! - `GET /search` filters stored analyses by topic and keyword
//! - `GET /analyses/:id` fetches one stored analysis
//! - `GET /` and `GET /health` for liveness checks

mod handlers;
mod routes;

pub use routes::create_router;

use sqlx::sqlite::SqlitePool;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::brain::Analyzer;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(pool: SqlitePool, analyzer: Analyzer) -> Self {
        Self {
            pool,
            analyzer: Arc::new(analyzer),
        }
    }
}

/// Start the web server.
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr: SocketAddr = addr.parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
