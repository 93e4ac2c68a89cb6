// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation request types and validation

use serde::{Deserialize, Serialize};

fn default_num_generations() -> u32 {
    1
}

fn default_dimension() -> u32 {
    768
}

fn default_aspect_ratio() -> String {
    "1:1".to_string()
}

fn default_output_format() -> String {
    "webp".to_string()
}

/// Request for image generation via POST /generate-image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    /// Text prompt describing the desired image
    pub prompt: String,

    /// Number of images to generate
    #[serde(default = "default_num_generations")]
    pub num_generations: u32,

    /// Output image height in pixels
    #[serde(default = "default_dimension")]
    pub image_height: u32,

    /// Output image width in pixels
    #[serde(default = "default_dimension")]
    pub image_width: u32,

    /// Aspect ratio token (e.g. "1:1")
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,

    /// Output format token (e.g. "webp")
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

impl ImageGenerationRequest {
    /// Validate the image generation request
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt must not be empty".to_string());
        }

        if self.num_generations < 1 {
            return Err(format!(
                "num_generations must be at least 1, got {}",
                self.num_generations
            ));
        }

        Ok(())
    }
}
