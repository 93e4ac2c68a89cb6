// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gateway configuration loaded from the environment

use anyhow::{Context, Result};
use std::env;

/// Default image generation model (bytedance/hyper-flux-8step)
pub const DEFAULT_IMAGE_MODEL_VERSION: &str =
    "bytedance/hyper-flux-8step:81946b1e09b256c543b35f37333a30d0d02ee2cd8c4f77cd915873a1ca622bad";

/// Default LoRA fine-tuning trainer (ostris/flux-dev-lora-trainer)
pub const DEFAULT_TRAINER_VERSION: &str =
    "ostris/flux-dev-lora-trainer:e440909d3512c31646ee2e0c7d6f6f4923224863a6a10c494606e79fb5844497";

/// Default destination slot fine-tuned weights are pushed to
pub const DEFAULT_TRAINING_DESTINATION: &str = "fabstir/flux-custom-model";

/// Runtime configuration for the gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Replicate API credential; the process refuses to start without it
    pub api_token: String,
    /// Base URL of the Replicate API
    pub api_endpoint: String,
    /// Model version ref used by POST /generate-image
    pub image_model_version: String,
    /// Trainer version ref used by POST /fine-tune/
    pub trainer_version: String,
    /// Destination model slot trainings are created against
    pub training_destination: String,
    /// Port the HTTP server listens on
    pub api_port: u16,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// `REPLICATE_API_TOKEN` is required; everything else has a default.
    pub fn from_env() -> Result<Self> {
        let api_token = env::var("REPLICATE_API_TOKEN")
            .context("REPLICATE_API_TOKEN must be set")?;

        let api_endpoint = env::var("REPLICATE_API_ENDPOINT")
            .unwrap_or_else(|_| "https://api.replicate.com".to_string());

        let image_model_version = env::var("IMAGE_MODEL_VERSION")
            .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL_VERSION.to_string());

        let trainer_version = env::var("TRAINER_VERSION")
            .unwrap_or_else(|_| DEFAULT_TRAINER_VERSION.to_string());

        let training_destination = env::var("TRAINING_DESTINATION")
            .unwrap_or_else(|_| DEFAULT_TRAINING_DESTINATION.to_string());

        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8000);

        Ok(Self {
            api_token,
            api_endpoint,
            image_model_version,
            trainer_version,
            training_destination,
            api_port,
        })
    }
}
