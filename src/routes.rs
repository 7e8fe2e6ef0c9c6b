use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::config::DeploymentMode;
use crate::error::TranslateError;
use crate::state::AppState;
use crate::translate::{TranslationRequest, TranslationResponse};

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/translate", post(translate));

    // Serverless hosts publish the front-end themselves.
    match state.config.deployment_mode() {
        DeploymentMode::Standalone => {
            router.fallback_service(ServeDir::new(&state.config.system_config.static_dir))
        }
        DeploymentMode::Serverless => router,
    }
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "configured": state.translator.is_configured(),
        "default_model": state.translator.config().default_model,
    }))
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslationResponse>, TranslateError> {
    // A missing credential wins over any problem with the body.
    state.translator.ensure_configured()?;

    let Json(payload) = payload
        .map_err(|rejection| TranslateError::invalid_input(rejection.body_text()))?;
    let request = TranslationRequest::from_payload(&payload)?;

    let response = state.translator.translate(request).await?;
    Ok(Json(response))
}
