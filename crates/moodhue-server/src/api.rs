//! Request/response types and route handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use moodhue_core::{AnalyzeError, Emotion, EmotionClassifier, Palette, analyze, palette_for};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Document text; missing or empty counts as degenerate input.
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AnalyzeResponse {
    pub emotion: &'static str,
    /// Normalized distribution keyed by category name, empty on the
    /// degenerate and failure paths. BTreeMap iteration order matches the
    /// canonical category order.
    pub scores: BTreeMap<&'static str, f32>,
    pub palette: &'static Palette,
}

impl AnalyzeResponse {
    /// The well-formed fallback payload: default category, empty scores,
    /// default palette.
    fn default_payload() -> Self {
        Self {
            emotion: Emotion::DEFAULT.as_str(),
            scores: BTreeMap::new(),
            palette: palette_for(Emotion::DEFAULT),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PaletteResponse {
    pub palette: &'static Palette,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: u64,
}

/// POST /analyze — run the pipeline and record the decided palette.
///
/// Total: every outcome is a well-formed response. Degenerate input and
/// classifier failure render the default payload and leave the palette
/// store untouched.
pub(crate) async fn analyze_handler<C>(
    State(state): State<Arc<ServerState<C>>>,
    request: Option<Json<AnalyzeRequest>>,
) -> Json<AnalyzeResponse>
where
    C: EmotionClassifier + Send,
{
    let text = request
        .and_then(|Json(r)| r.text)
        .unwrap_or_default();

    let result = {
        let mut classifier = state.classifier.lock().await;
        analyze(&mut *classifier, &text)
    };

    match result {
        Ok(analysis) => {
            let palette = analysis.palette();
            state.palettes.set(palette);
            info!(emotion = analysis.emotion.as_str(), "analysis complete");
            Json(AnalyzeResponse {
                emotion: analysis.emotion.as_str(),
                scores: analysis.scores.iter().map(|(e, v)| (e.as_str(), v)).collect(),
                palette,
            })
        }
        Err(AnalyzeError::DegenerateInput) => Json(AnalyzeResponse::default_payload()),
        Err(AnalyzeError::Classifier(err)) => {
            warn!(error = %err, "classifier failed, returning default response");
            Json(AnalyzeResponse::default_payload())
        }
    }
}

/// GET /get_palette — the most recently decided palette.
pub(crate) async fn palette_handler<C>(
    State(state): State<Arc<ServerState<C>>>,
) -> Json<PaletteResponse>
where
    C: EmotionClassifier + Send,
{
    Json(PaletteResponse {
        palette: state.palettes.get(),
    })
}

/// GET /health — liveness probe.
pub(crate) async fn health_handler<C>(
    State(state): State<Arc<ServerState<C>>>,
) -> Json<HealthResponse>
where
    C: EmotionClassifier + Send,
{
    Json(HealthResponse {
        status: "healthy",
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
