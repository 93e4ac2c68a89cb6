// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Replicate HTTP API client
//!
//! Speaks the predictions and trainings endpoints of the Replicate REST API.
//! `run_model` reproduces the blocking semantics of Replicate's own client
//! libraries: create a prediction with `Prefer: wait`, then poll it to a
//! terminal status.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::error::ReplicateError;

/// Terminal states a prediction or training can settle into
pub const TERMINAL_STATES: &[&str] = &["succeeded", "failed", "canceled"];

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// The three upstream operations this gateway depends on.
///
/// Any client satisfying this contract can back the gateway; handlers only
/// see this trait.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Run a model version synchronously, returning its output URLs in order
    async fn run_model(
        &self,
        version: &str,
        input: Value,
    ) -> Result<Vec<String>, ReplicateError>;

    /// Create a training job; returns the provider-assigned status and id
    /// without waiting for the job to finish
    async fn create_training(
        &self,
        trainer: &str,
        destination: &str,
        input: Value,
    ) -> Result<TrainingJob, ReplicateError>;

    /// Fetch a training job by id
    async fn get_training(&self, training_id: &str) -> Result<TrainingJob, ReplicateError>;
}

/// Status and id of a provider-side training job
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainingJob {
    pub id: String,
    pub status: String,
}

/// Client for the Replicate REST API
pub struct ReplicateClient {
    client: Client,
    endpoint: String,
    auth: String,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    id: String,
    status: String,
    #[serde(default)]
    output: Option<Vec<String>>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: Option<String>,
}

impl ReplicateClient {
    /// Create a new client for the given API endpoint and token
    pub fn new(endpoint: &str, api_token: &str) -> Result<Self, ReplicateError> {
        let client = Client::builder().build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Replicate client configured: endpoint={}", endpoint);

        Ok(Self {
            client,
            endpoint,
            auth: format!("Token {}", api_token),
        })
    }

    /// Turn a non-2xx response into a ReplicateError, preferring the
    /// provider's `detail` field over the raw body text
    async fn error_from(response: reqwest::Response) -> ReplicateError {
        let status = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or(text);
        ReplicateError::Api { status, message }
    }

    async fn fetch_prediction(&self, id: &str) -> Result<Prediction, ReplicateError> {
        let url = format!("{}/v1/predictions/{}", self.endpoint, id);
        debug!("Replicate prediction poll GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth.as_str())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(response.json().await?)
    }
}

/// Split an `owner/name:version` reference into its parts
fn split_model_ref(model_ref: &str) -> Result<(&str, &str, &str), ReplicateError> {
    let invalid = || ReplicateError::InvalidModelRef(model_ref.to_string());

    let (name_part, version) = model_ref.split_once(':').ok_or_else(invalid)?;
    let (owner, name) = name_part.split_once('/').ok_or_else(invalid)?;
    if owner.is_empty() || name.is_empty() || version.is_empty() {
        return Err(invalid());
    }
    Ok((owner, name, version))
}

#[async_trait]
impl ModelProvider for ReplicateClient {
    async fn run_model(
        &self,
        version: &str,
        input: Value,
    ) -> Result<Vec<String>, ReplicateError> {
        // Accept both a bare version id and a full owner/name:version ref
        let version_id = version.rsplit(':').next().unwrap_or(version);

        let body = serde_json::json!({
            "version": version_id,
            "input": input,
        });

        let url = format!("{}/v1/predictions", self.endpoint);
        debug!("Replicate run POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth.as_str())
            .header("Prefer", "wait")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let mut prediction: Prediction = response.json().await?;

        // `Prefer: wait` holds the request open for a bounded time only;
        // poll until the prediction settles
        while !TERMINAL_STATES.contains(&prediction.status.as_str()) {
            tokio::time::sleep(POLL_INTERVAL).await;
            prediction = self.fetch_prediction(&prediction.id).await?;
        }

        if prediction.status != "succeeded" {
            let detail = match prediction.error {
                Some(Value::String(message)) => message,
                Some(other) => other.to_string(),
                None => format!("model run ended with status {}", prediction.status),
            };
            return Err(ReplicateError::RunFailed(detail));
        }

        let outputs = prediction.output.unwrap_or_default();
        info!(
            "Replicate run {} succeeded with {} output(s)",
            prediction.id,
            outputs.len()
        );
        Ok(outputs)
    }

    async fn create_training(
        &self,
        trainer: &str,
        destination: &str,
        input: Value,
    ) -> Result<TrainingJob, ReplicateError> {
        let (owner, name, version_id) = split_model_ref(trainer)?;

        let url = format!(
            "{}/v1/models/{}/{}/versions/{}/trainings",
            self.endpoint, owner, name, version_id
        );
        let body = serde_json::json!({
            "destination": destination,
            "input": input,
        });

        debug!("Replicate training POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.auth.as_str())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let job: TrainingJob = response.json().await?;
        info!("Replicate training {} created: {}", job.id, job.status);
        Ok(job)
    }

    async fn get_training(&self, training_id: &str) -> Result<TrainingJob, ReplicateError> {
        let url = format!("{}/v1/trainings/{}", self.endpoint, training_id);
        debug!("Replicate training GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth.as_str())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        Ok(response.json().await?)
    }
}
