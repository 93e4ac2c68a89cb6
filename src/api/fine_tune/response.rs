// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fine-tuning response types

use serde::{Deserialize, Serialize};

/// Response for both POST /fine-tune/ and GET /task-status/{task_id}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FineTuneResponse {
    /// Job state as reported by the provider
    /// (starting, processing, succeeded, failed, canceled)
    pub status: String,
    /// Provider-assigned job identifier, used for later status lookups
    pub training_id: String,
}
