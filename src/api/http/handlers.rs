// src/api/http/handlers.rs

use axum::{Json, body::Bytes, extract::State};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::analysis::AnalysisResult;
use crate::api::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub texto: String,
}

impl AnalyzeRequest {
    /// Decode a request body. `Content-Type` is not checked, and a
    /// repeated key keeps its last value.
    pub fn from_slice(body: &[u8]) -> ApiResult<Self> {
        serde_json::from_slice::<Value>(body)
            .and_then(serde_json::from_value)
            .map_err(|e| {
                warn!("Rejected /analyze body: {}", e);
                ApiError::from(e)
            })
    }
}

/// POST /analyze
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<AnalysisResult>> {
    let request = AnalyzeRequest::from_slice(&body)?;
    Ok(Json(state.analyzer.analyze(&request.texto)))
}
