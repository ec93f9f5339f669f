//! HTTP API over the model catalog.
//!
//! Every handler takes a snapshot of the live catalog, so a reload that lands
//! mid-request never mixes two configurations in one response.

use crate::catalog::{ModelCatalog, SharedCatalog};
use crate::config::Config;
use crate::i18n::{LanguageToken, NameResolver};
use crate::metrics::{MetricsReport, RouteMetrics};
use crate::models::ModelInfo;
use crate::routing::{Direction, DuplicateDirectionPolicy};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

/// Shared state for all handlers.
pub struct AppState {
    pub catalog: SharedCatalog,
    pub metrics: RouteMetrics,
    pub names: &'static dyn NameResolver,
    pub models_file: PathBuf,
    pub duplicate_directions: DuplicateDirectionPolicy,
    pub api_key: Option<String>,
    /// Held across read, build and swap so overlapping reloads apply in order
    pub reload_lock: Mutex<()>,
}

impl AppState {
    pub fn new(catalog: ModelCatalog, config: &Config, names: &'static dyn NameResolver) -> Self {
        Self {
            catalog: SharedCatalog::new(catalog),
            metrics: RouteMetrics::new(),
            names,
            models_file: config.models_file.clone(),
            duplicate_directions: config.duplicate_directions,
            api_key: config.api_key.clone(),
            reload_lock: Mutex::new(()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    pub source: LanguageToken,
    pub target: LanguageToken,
    /// Empty when the direction is unsupported
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub models: usize,
    pub directions: usize,
}

/// Build the axum router with all endpoints.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/directions", get(directions))
        .route("/models", get(models))
        .route("/models/:name", get(model))
        .route("/route", get(route))
        .route("/reload", post(reload))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `port` on all interfaces and serve until the process exits.
pub async fn serve(state: Arc<AppState>, port: u16) -> Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app(state)).await.context("Server error")?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn directions(State(state): State<Arc<AppState>>) -> Json<Vec<Direction>> {
    Json(state.catalog.load().get_possible_directions().to_vec())
}

async fn models(State(state): State<Arc<AppState>>) -> Json<Vec<ModelInfo>> {
    let catalog = state.catalog.load();
    Json(catalog.get_models().iter().map(|model| model.info()).collect())
}

async fn model(State(state): State<Arc<AppState>>, Path(name): Path<String>) -> Json<ModelInfo> {
    Json(state.catalog.load().get_model(&name).info())
}

async fn route(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RouteQuery>,
) -> Json<RouteResponse> {
    let chain = state.catalog.load().get_model_list(&query.source, &query.target);
    state.metrics.record_lookup(!chain.is_empty());

    debug!(
        "Route {}->{}: {} models",
        query.source,
        query.target,
        chain.len()
    );

    Json(RouteResponse {
        source: LanguageToken::new(query.source),
        target: LanguageToken::new(query.target),
        models: chain.iter().map(|model| model.info()).collect(),
    })
}

async fn reload(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ReloadResponse>, (StatusCode, String)> {
    if let Some(expected) = &state.api_key {
        let provided = headers
            .get("x-api-key")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if !api_key_matches(expected, provided) {
            return Err((StatusCode::UNAUTHORIZED, "Invalid API key".to_string()));
        }
    }

    let _reload_guard = state.reload_lock.lock().await;

    let build_state = Arc::clone(&state);
    let built = tokio::task::spawn_blocking(move || {
        ModelCatalog::from_file(
            &build_state.models_file,
            build_state.names,
            build_state.duplicate_directions,
        )
    })
    .await
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Reload task failed: {}", e)))?;

    match built {
        Ok(catalog) => {
            let response = ReloadResponse {
                models: catalog.get_models().len(),
                directions: catalog.get_possible_directions().len(),
            };
            state.catalog.replace(catalog);
            state.metrics.record_reload();
            info!(
                "Reloaded {} models, {} directions",
                response.models, response.directions
            );
            Ok(Json(response))
        }
        Err(e) => {
            state.metrics.record_reload_failure();
            error!("Reload failed, keeping current models: {:#}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", e)))
        }
    }
}

async fn metrics(State(state): State<Arc<AppState>>) -> Json<MetricsReport> {
    Json(state.metrics.report())
}

/// Constant-time comparison for the reload API key.
fn api_key_matches(expected: &str, provided: &str) -> bool {
    if expected.len() != provided.len() {
        return false;
    }
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_matches() {
        assert!(api_key_matches("secret123", "secret123"));
        assert!(!api_key_matches("secret123", "secret124"));
        assert!(!api_key_matches("secret123", "secret12"));
        assert!(!api_key_matches("secret", ""));
    }
}
