use axum::{Json, http::StatusCode};
use debugbot_core::{CodeStructure, CodeStructureAnalyzer};
use tracing::{info, warn};

use crate::models::{ApiError, StructureRequest};

/// POST {prefix}/structure
pub async fn code_structure(
    Json(req): Json<StructureRequest>,
) -> Result<Json<CodeStructure>, (StatusCode, Json<ApiError>)> {
    info!(code_len = req.code.len(), "STRUCTURE request");

    let structure = CodeStructureAnalyzer::analyze(&req.code).map_err(|e| {
        warn!(line = e.line, column = e.column, error = %e, "STRUCTURE failed");
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    })?;

    Ok(Json(structure))
}
