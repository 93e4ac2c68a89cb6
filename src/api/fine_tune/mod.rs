// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fine-tuning API endpoint module
//!
//! Provides POST /fine-tune/ to start a training job and
//! GET /task-status/{task_id} to observe its lifecycle.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{fine_tune_handler, task_status_handler};
pub use request::{FineTuneRequest, ALLOWED_OPTIMIZERS};
pub use response::FineTuneResponse;
