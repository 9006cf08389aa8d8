use axum::{Json, extract::State, http::StatusCode};
use debugbot_ai::{AiResponse, LogAnalysis};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::{ApiError, LogAnalysisRequest};
use crate::state::AppState;

/// POST {prefix}/debug
pub async fn debug_logs(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LogAnalysisRequest>,
) -> Result<Json<AiResponse>, (StatusCode, Json<ApiError>)> {
    let request_id = Uuid::new_v4();
    info!(
        request_id = %request_id,
        log_type = %req.log_type,
        log_format = %req.format,
        "DEBUG request"
    );

    let request = LogAnalysis {
        logs: req.logs.into_text(),
        context: req.context.map(|c| c.render()).filter(|c| !c.is_empty()),
        user_prompt: req.user_prompt,
        code: req.code,
        format: req.format,
    };

    match state.service.analyze_logs(request).await {
        Ok(response) => {
            info!(request_id = %request_id, "DEBUG complete");
            Ok(Json(response))
        }
        Err(e) => {
            let (status, body) = ApiError::from_service(&e);
            if status.is_server_error() {
                error!(request_id = %request_id, error = %e, "DEBUG failed");
            } else {
                warn!(request_id = %request_id, error = %e, "DEBUG rejected");
            }
            Err((status, body))
        }
    }
}
