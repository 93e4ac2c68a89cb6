// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire shape for every error this gateway returns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Errors a handler can surface to the caller.
///
/// Validation failures are rejected before any outbound call; everything
/// raised while talking to the provider collapses into `Upstream`.
#[derive(Debug, Clone)]
pub enum ApiError {
    Validation(String),
    Upstream(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::Upstream(_) => 500,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        let detail = match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Upstream(msg) => msg.clone(),
        };
        ErrorResponse { detail }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Upstream(msg) => write!(f, "Upstream failure: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_response())).into_response()
    }
}
