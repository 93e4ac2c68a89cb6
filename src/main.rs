// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use fabstir_replicate_gateway::{
    api::start_server,
    config::GatewayConfig,
    replicate::ReplicateClient,
};
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    // Fails here if REPLICATE_API_TOKEN is absent
    let config = GatewayConfig::from_env()?;

    let client = ReplicateClient::new(&config.api_endpoint, &config.api_token)?;

    tracing::info!(
        "Starting Replicate gateway: model={}, trainer={}, destination={}",
        config.image_model_version,
        config.trainer_version,
        config.training_destination
    );

    start_server(Arc::new(client), config)
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))?;

    Ok(())
}
