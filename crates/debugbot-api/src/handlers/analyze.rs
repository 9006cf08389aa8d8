use axum::{Json, extract::State, http::StatusCode};
use debugbot_ai::{AiResponse, CodeAnalysis};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::{ApiError, CodeAnalysisRequest};
use crate::state::AppState;

/// POST {prefix}/analyze
pub async fn analyze_code(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CodeAnalysisRequest>,
) -> Result<Json<AiResponse>, (StatusCode, Json<ApiError>)> {
    let request_id = Uuid::new_v4();
    info!(request_id = %request_id, code_len = req.code.len(), "ANALYZE request");

    let result = state
        .service
        .analyze_code(CodeAnalysis {
            code: req.code,
            context: req.context,
            user_prompt: req.user_prompt,
        })
        .await;

    match result {
        Ok(response) => {
            info!(request_id = %request_id, "ANALYZE complete");
            Ok(Json(response))
        }
        Err(e) => {
            let (status, body) = ApiError::from_service(&e);
            if status.is_server_error() {
                error!(request_id = %request_id, error = %e, "ANALYZE failed");
            } else {
                warn!(request_id = %request_id, error = %e, "ANALYZE rejected");
            }
            Err((status, body))
        }
    }
}
