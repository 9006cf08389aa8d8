mod config;
mod handlers;
mod middleware;
mod models;
mod state;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use debugbot_ai::AiService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::Settings;
use crate::handlers::{analyze_code, code_structure, debug_logs, health, refactor_code};
use crate::middleware::require_api_key;
use crate::state::AppState;

fn build_router(state: Arc<AppState>) -> Router {
    // routes - protected routes with API key
    let api_routes = Router::new()
        .route("/analyze", post(analyze_code))
        .route("/debug", post(debug_logs))
        .route("/refactor", post(refactor_code))
        .route("/structure", post(code_structure))
        .layer(axum_middleware::from_fn_with_state(state.clone(), require_api_key));

    let prefix = state.settings.api_v1_str.clone();
    let router = Router::new().route("/health", get(health));
    let router = if prefix == "/" {
        router.merge(api_routes)
    } else {
        router.nest(&prefix, api_routes)
    };

    router.layer(CorsLayer::permissive()).with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenvy::dotenv().ok();

    //logging setup
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env()?;
    info!(project = %settings.project_name, prefix = %settings.api_v1_str, "Settings loaded");

    info!(provider = ?settings.ai.provider, "Setting up AI service...");
    let service = AiService::from_config(&settings.ai)?;
    info!(provider = service.provider(), model = service.model(), "AI service ready!");

    if settings.api_key.is_some() {
        info!("API key authentication ENABLED");
    } else {
        info!("API key authentication DISABLED (set DEBUGBOT_API_KEY to enable)");
    }
    if settings.ai.read_log_files {
        info!("Log file paths in /debug requests will be read from disk");
        let loopback = settings.bind_addr.starts_with("127.") || settings.bind_addr.starts_with("localhost");
        if !loopback && settings.api_key.is_none() {
            warn!(
                addr = %settings.bind_addr,
                "Non-loopback bind without DEBUGBOT_API_KEY: any client can make the server read local files"
            );
        }
    }

    let addr = settings.bind_addr.clone();
    let state = Arc::new(AppState { service, settings });
    let app = build_router(state);

    // Server start
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{Reply, test_state};

    #[tokio::test]
    async fn test_health() {
        let (state, _) = test_state(Reply::Text("ok".to_string()));
        let axum::Json(body) = health(axum::extract::State(state.clone())).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "VS Code Debug Bot");

        // router assembles without panicking on the configured prefix
        let _router = build_router(state);
    }
}
