// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation response types

use serde::{Deserialize, Serialize};

/// Response from image generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageGenerationResponse {
    /// "Success" on completion
    pub status: String,
    /// URLs of the generated images, in the order the provider returned them;
    /// absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_images: Option<Vec<String>>,
}
