// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation endpoint handler

use axum::{extract::State, Json};
use tracing::{debug, info, warn};

use super::request::ImageGenerationRequest;
use super::response::ImageGenerationResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /generate-image - Generate images from a text prompt
///
/// Pipeline:
/// 1. Validate request
/// 2. Build the provider input payload
/// 3. Run the configured model version synchronously
/// 4. Collect output URLs in order into the response
pub async fn generate_image_handler(
    State(state): State<AppState>,
    Json(request): Json<ImageGenerationRequest>,
) -> Result<Json<ImageGenerationResponse>, ApiError> {
    debug!(
        "Image generation request received: prompt_len={}, num_generations={}",
        request.prompt.len(),
        request.num_generations
    );

    if let Err(e) = request.validate() {
        warn!("Image generation validation failed: {}", e);
        return Err(ApiError::Validation(e));
    }

    let input = serde_json::json!({
        "prompt": request.prompt,
        "num_outputs": request.num_generations,
        "aspect_ratio": request.aspect_ratio,
        "height": request.image_height,
        "width": request.image_width,
        "output_format": request.output_format,
    });

    let generated_images = state
        .provider
        .run_model(&state.config.image_model_version, input)
        .await
        .map_err(|e| {
            warn!("Image generation failed: {}", e);
            ApiError::Upstream(e.to_string())
        })?;

    info!("Image generation produced {} image(s)", generated_images.len());

    Ok(Json(ImageGenerationResponse {
        status: "Success".to_string(),
        generated_images: Some(generated_images),
    }))
}
