// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tests for GET /task-status/{task_id}

use axum::http::StatusCode;
use fabstir_replicate_gateway::replicate::{ReplicateError, TrainingJob};
use serde_json::json;

use super::support::{get, test_router, StubProvider};

#[tokio::test]
async fn test_task_status_maps_provider_job() {
    let stub = StubProvider::with_status(TrainingJob {
        id: "tr_123".to_string(),
        status: "processing".to_string(),
    });
    let router = test_router(stub);

    let (status, body) = get(router, "/task-status/tr_123").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "processing");
    assert_eq!(body["training_id"], "tr_123");
}

#[tokio::test]
async fn test_task_status_not_found_uses_fixed_detail() {
    let stub = StubProvider::with_status_error(ReplicateError::Api {
        status: 404,
        message: "The requested resource could not be found.".to_string(),
    });
    let router = test_router(stub);

    let (status, body) = get(router, "/task-status/tr_missing").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Failed to retrieve task status");
}

#[tokio::test]
async fn test_task_status_any_failure_uses_fixed_detail() {
    // The provider's error message is discarded on this path
    let stub = StubProvider::with_status_error(ReplicateError::Api {
        status: 500,
        message: "internal provider explosion".to_string(),
    });
    let router = test_router(stub);

    let (status, body) = get(router, "/task-status/tr_123").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Failed to retrieve task status");
    assert_eq!(body, json!({ "detail": "Failed to retrieve task status" }));
}

#[tokio::test]
async fn test_task_status_terminal_states_pass_through() {
    for state in ["succeeded", "failed", "canceled"] {
        let stub = StubProvider::with_status(TrainingJob {
            id: "tr_123".to_string(),
            status: state.to_string(),
        });
        let router = test_router(stub);

        let (status, body) = get(router, "/task-status/tr_123").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], state);
    }
}
