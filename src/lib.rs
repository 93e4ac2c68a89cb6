// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod replicate;

pub use config::GatewayConfig;
pub use replicate::{ModelProvider, ReplicateClient, ReplicateError, TrainingJob};
