// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};

use crate::api::fine_tune::{fine_tune_handler, task_status_handler};
use crate::api::generate_image::generate_image_handler;
use crate::config::GatewayConfig;
use crate::replicate::ModelProvider;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn ModelProvider>,
    pub config: Arc<GatewayConfig>,
}

/// Build the gateway router; split out so tests can drive it directly
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Image generation endpoint
        .route("/generate-image", post(generate_image_handler))
        // Fine-tuning endpoints
        .route("/fine-tune/", post(fine_tune_handler))
        .route("/task-status/:task_id", get(task_status_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

pub async fn start_server(
    provider: Arc<dyn ModelProvider>,
    config: GatewayConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let port = config.api_port;
    let state = AppState {
        provider,
        config: Arc::new(config),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Replicate gateway listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
