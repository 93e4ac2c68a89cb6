// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image generation API endpoint module
//!
//! Provides POST /generate-image for text-to-image generation via the
//! configured Replicate model version.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::generate_image_handler;
pub use request::ImageGenerationRequest;
pub use response::ImageGenerationResponse;
