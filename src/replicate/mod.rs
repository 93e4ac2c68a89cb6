// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Replicate provider client
//!
//! Wraps the three upstream operations this gateway depends on: run a model
//! synchronously, create a training job, fetch a training job by id.

pub mod client;
pub mod error;

pub use client::{ModelProvider, ReplicateClient, TrainingJob};
pub use error::ReplicateError;
