use axum::{Json, http::StatusCode};
use debugbot_core::CodeRefactorer;
use tracing::{info, warn};

use crate::models::{ApiError, RefactorRequest, RefactorResponse};

/// POST {prefix}/refactor
pub async fn refactor_code(
    Json(req): Json<RefactorRequest>,
) -> Result<Json<RefactorResponse>, (StatusCode, Json<ApiError>)> {
    info!(refactor_type = %req.refactor_type, code_len = req.code.len(), "REFACTOR request");

    if req.code.trim().is_empty() {
        return Err(ApiError::bad_request("Code must not be empty"));
    }

    let code = CodeRefactorer::refactor(&req.code, &req.refactor_type).map_err(|e| {
        warn!(refactor_type = %req.refactor_type, error = %e, "REFACTOR failed");
        ApiError::from_refactor(&e)
    })?;

    Ok(Json(RefactorResponse { code }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(code: &str, refactor_type: &str) -> Json<RefactorRequest> {
        Json(RefactorRequest {
            code: code.to_string(),
            refactor_type: refactor_type.to_string(),
        })
    }

    #[tokio::test]
    async fn test_optimize_imports() {
        let Json(response) = refactor_code(request("import sys\nimport os\nimport sys\nprint(os.sep)", "optimize_imports"))
            .await
            .unwrap();
        assert_eq!(response.code, "import os\nimport sys\n\nprint(os.sep)");
    }

    #[tokio::test]
    async fn test_format() {
        let Json(response) = refactor_code(request("def f(a,b): pass", "format")).await.unwrap();
        assert_eq!(response.code, "def f(a, b):\n    pass");
    }

    #[tokio::test]
    async fn test_error_statuses() {
        let (status, Json(body)) = refactor_code(request("x = 1", "rename")).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Unsupported refactor type: rename");

        let (status, _) = refactor_code(request("def (:", "format")).await.unwrap_err();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, _) = refactor_code(request("", "format")).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
