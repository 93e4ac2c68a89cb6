// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared test support: stub provider and router helpers

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use fabstir_replicate_gateway::api::{build_router, AppState};
use fabstir_replicate_gateway::config::GatewayConfig;
use fabstir_replicate_gateway::replicate::{ModelProvider, ReplicateError, TrainingJob};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::util::ServiceExt;

pub const TEST_MODEL_VERSION: &str = "bytedance/hyper-flux-8step:abc123";
pub const TEST_TRAINER_VERSION: &str = "ostris/flux-dev-lora-trainer:def456";
pub const TEST_DESTINATION: &str = "fabstir/flux-custom-model";

/// Stub provider with single-use canned results; panics if an operation is
/// invoked without a configured result (i.e. a call the test did not expect)
pub struct StubProvider {
    run: Mutex<Option<Result<Vec<String>, ReplicateError>>>,
    training: Mutex<Option<Result<TrainingJob, ReplicateError>>>,
    status: Mutex<Option<Result<TrainingJob, ReplicateError>>>,
    pub last_run_input: Mutex<Option<Value>>,
    pub last_training_call: Mutex<Option<(String, String, Value)>>,
}

impl StubProvider {
    fn empty() -> Self {
        Self {
            run: Mutex::new(None),
            training: Mutex::new(None),
            status: Mutex::new(None),
            last_run_input: Mutex::new(None),
            last_training_call: Mutex::new(None),
        }
    }

    /// Provider that panics on any call; for tests asserting that validation
    /// rejects the request before any outbound call is made
    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self::empty())
    }

    pub fn with_run_output(urls: &[&str]) -> Arc<Self> {
        let stub = Self::empty();
        *stub.run.lock().unwrap() =
            Some(Ok(urls.iter().map(|u| u.to_string()).collect()));
        Arc::new(stub)
    }

    pub fn with_run_error(error: ReplicateError) -> Arc<Self> {
        let stub = Self::empty();
        *stub.run.lock().unwrap() = Some(Err(error));
        Arc::new(stub)
    }

    pub fn with_training(job: TrainingJob) -> Arc<Self> {
        let stub = Self::empty();
        *stub.training.lock().unwrap() = Some(Ok(job));
        Arc::new(stub)
    }

    pub fn with_training_error(error: ReplicateError) -> Arc<Self> {
        let stub = Self::empty();
        *stub.training.lock().unwrap() = Some(Err(error));
        Arc::new(stub)
    }

    pub fn with_status(job: TrainingJob) -> Arc<Self> {
        let stub = Self::empty();
        *stub.status.lock().unwrap() = Some(Ok(job));
        Arc::new(stub)
    }

    pub fn with_status_error(error: ReplicateError) -> Arc<Self> {
        let stub = Self::empty();
        *stub.status.lock().unwrap() = Some(Err(error));
        Arc::new(stub)
    }
}

#[async_trait]
impl ModelProvider for StubProvider {
    async fn run_model(
        &self,
        _version: &str,
        input: Value,
    ) -> Result<Vec<String>, ReplicateError> {
        *self.last_run_input.lock().unwrap() = Some(input);
        self.run
            .lock()
            .unwrap()
            .take()
            .expect("unexpected run_model call")
    }

    async fn create_training(
        &self,
        trainer: &str,
        destination: &str,
        input: Value,
    ) -> Result<TrainingJob, ReplicateError> {
        *self.last_training_call.lock().unwrap() =
            Some((trainer.to_string(), destination.to_string(), input));
        self.training
            .lock()
            .unwrap()
            .take()
            .expect("unexpected create_training call")
    }

    async fn get_training(&self, _training_id: &str) -> Result<TrainingJob, ReplicateError> {
        self.status
            .lock()
            .unwrap()
            .take()
            .expect("unexpected get_training call")
    }
}

pub fn test_config() -> GatewayConfig {
    GatewayConfig {
        api_token: "test-token".to_string(),
        api_endpoint: "http://provider.invalid".to_string(),
        image_model_version: TEST_MODEL_VERSION.to_string(),
        trainer_version: TEST_TRAINER_VERSION.to_string(),
        training_destination: TEST_DESTINATION.to_string(),
        api_port: 0,
    }
}

pub fn test_router(provider: Arc<dyn ModelProvider>) -> Router {
    build_router(AppState {
        provider,
        config: Arc::new(test_config()),
    })
}

/// POST a JSON body and return (status, body). Non-JSON bodies (e.g. axum's
/// own deserialization rejections) come back as a JSON string.
pub async fn post_json(router: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn get(router: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}
