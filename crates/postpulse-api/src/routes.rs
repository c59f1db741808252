use std::sync::Arc;

use axum::{extract::State, Json};
use postpulse_processing::PipelineResult;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PipelineRequest {
    pub email: String,
    /// Accepted for forward compatibility with multiple sources; unused.
    pub source: String,
}

pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "AI pipeline is running! POST to /pipeline to process posts."
    }))
}

/// Always answers 200; failures inside the run surface as data, not status.
pub async fn run_pipeline(
    State(app_state): State<Arc<AppState>>,
    Json(payload): Json<PipelineRequest>,
) -> Json<PipelineResult> {
    let mut pipeline = app_state.pipeline.lock().await;
    let result = pipeline.run(&payload.email).await;
    Json(result)
}
