//! HTTP layer: analysis and palette routes over the core pipeline.

mod api;
mod state;

pub use api::{AnalyzeRequest, AnalyzeResponse, HealthResponse, PaletteResponse};
pub use state::ServerState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use moodhue_core::EmotionClassifier;
use tracing::info;

/// Build the application router.
pub fn router<C>(state: Arc<ServerState<C>>) -> Router
where
    C: EmotionClassifier + Send + 'static,
{
    Router::new()
        .route("/analyze", post(api::analyze_handler::<C>))
        .route("/get_palette", get(api::palette_handler::<C>))
        .route("/health", get(api::health_handler::<C>))
        .with_state(state)
}

/// Bind `addr` and serve until the process stops.
pub async fn serve<C>(state: Arc<ServerState<C>>, addr: SocketAddr) -> anyhow::Result<()>
where
    C: EmotionClassifier + Send + 'static,
{
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
