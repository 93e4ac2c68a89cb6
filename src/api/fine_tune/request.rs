// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fine-tuning request types and validation

use serde::{Deserialize, Serialize};
use url::Url;

/// Allowed optimizer choices for fine-tuning
pub const ALLOWED_OPTIMIZERS: &[&str] = &["adamw8bit", "adam", "sgd"];

fn default_steps() -> u32 {
    1000
}

fn default_optimizer() -> String {
    "adamw8bit".to_string()
}

fn default_batch_size() -> u32 {
    1
}

fn default_trigger_word() -> String {
    "TOK".to_string()
}

/// Request to start a fine-tuning job via POST /fine-tune/
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineTuneRequest {
    /// URL of the training image archive; a malformed URL is rejected at
    /// deserialization
    pub input_images: Url,

    /// Number of training steps
    #[serde(default = "default_steps")]
    pub steps: u32,

    /// Optimizer choice
    #[serde(default = "default_optimizer")]
    pub optimizer: String,

    /// Training batch size
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,

    /// Token embedded in prompts to activate the learned concept
    #[serde(default = "default_trigger_word")]
    pub trigger_word: String,
}

impl FineTuneRequest {
    /// Validate the fine-tuning request
    pub fn validate(&self) -> Result<(), String> {
        match self.input_images.scheme() {
            "http" | "https" => {}
            other => {
                return Err(format!(
                    "input_images must be an http(s) URL, got scheme '{}'",
                    other
                ));
            }
        }

        if !ALLOWED_OPTIMIZERS.contains(&self.optimizer.as_str()) {
            return Err(format!(
                "invalid optimizer '{}'; allowed: {}",
                self.optimizer,
                ALLOWED_OPTIMIZERS.join(", ")
            ));
        }

        if self.steps < 1 {
            return Err(format!("steps must be at least 1, got {}", self.steps));
        }

        if self.batch_size < 1 {
            return Err(format!(
                "batch_size must be at least 1, got {}",
                self.batch_size
            ));
        }

        Ok(())
    }
}
