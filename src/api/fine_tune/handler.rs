// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fine-tune start and task-status endpoint handlers

use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, info, warn};

use super::request::FineTuneRequest;
use super::response::FineTuneResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /fine-tune/ - Start a fine-tuning job
///
/// Creates a training on the provider against the configured destination and
/// trainer version and returns immediately with whatever status and id the
/// provider assigns at creation time. The job runs on provider
/// infrastructure; callers poll GET /task-status/{task_id} for progress.
pub async fn fine_tune_handler(
    State(state): State<AppState>,
    Json(request): Json<FineTuneRequest>,
) -> Result<Json<FineTuneResponse>, ApiError> {
    debug!(
        "Fine-tune request received: steps={}, optimizer={}",
        request.steps, request.optimizer
    );

    if let Err(e) = request.validate() {
        warn!("Fine-tune validation failed: {}", e);
        return Err(ApiError::Validation(e));
    }

    let input = serde_json::json!({
        "input_images": request.input_images.to_string(),
        "steps": request.steps,
        "optimizer": request.optimizer,
        "batch_size": request.batch_size,
        "trigger_word": request.trigger_word,
    });

    let job = state
        .provider
        .create_training(
            &state.config.trainer_version,
            &state.config.training_destination,
            input,
        )
        .await
        .map_err(|e| {
            warn!("Fine-tune creation failed: {}", e);
            ApiError::Upstream(e.to_string())
        })?;

    info!("Fine-tune job {} created: {}", job.id, job.status);

    Ok(Json(FineTuneResponse {
        status: job.status,
        training_id: job.id,
    }))
}

/// GET /task-status/{task_id} - Check the status of a fine-tuning job
///
/// Purely a read; safe to poll. Every failure, including a missing job,
/// collapses into the same fixed detail string.
pub async fn task_status_handler(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> Result<Json<FineTuneResponse>, ApiError> {
    debug!("Task status lookup: {}", task_id);

    let job = state.provider.get_training(&task_id).await.map_err(|e| {
        warn!("Task status lookup failed for {}: {}", task_id, e);
        ApiError::Upstream("Failed to retrieve task status".to_string())
    })?;

    Ok(Json(FineTuneResponse {
        status: job.status,
        training_id: job.id,
    }))
}
