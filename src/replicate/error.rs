// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error types for the Replicate client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReplicateError {
    /// Transport-level failure (connection refused, DNS, body decode)
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response from the provider. The message is the provider's
    /// `detail` field when the body parses, otherwise the raw body text.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The prediction reached a terminal state other than "succeeded"
    #[error("{0}")]
    RunFailed(String),

    /// Model reference did not match the owner/name:version form
    #[error("invalid model reference '{0}'; expected owner/name:version")]
    InvalidModelRef(String),
}

impl ReplicateError {
    /// Whether the provider reported the resource as missing.
    ///
    /// The task-status endpoint collapses this into a uniform failure, but
    /// the distinction is kept here so callers inside the process can tell
    /// a missing training from an unreachable provider.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReplicateError::Api { status: 404, .. })
    }
}
