// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod fine_tune;
pub mod generate_image;
pub mod http_server;

pub use errors::{ApiError, ErrorResponse};
pub use fine_tune::{
    fine_tune_handler, task_status_handler, FineTuneRequest, FineTuneResponse,
    ALLOWED_OPTIMIZERS,
};
pub use generate_image::{
    generate_image_handler, ImageGenerationRequest, ImageGenerationResponse,
};
pub use http_server::{build_router, start_server, AppState};
