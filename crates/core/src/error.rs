// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for a simulation run

use thiserror::Error;

/// Errors that end a simulation run
///
/// None of these are retried: a participant that fails takes the run down.
#[derive(Debug, Error)]
pub enum HarborError {
    #[error("output sink error: {0}")]
    Sink(#[from] std::io::Error),
    #[error("participant failed: {0}")]
    Participant(#[from] tokio::task::JoinError),
    #[error("{0} was closed while a participant waited on it")]
    PrimitiveClosed(&'static str),
    #[error("pier invariant violated: {0}")]
    Invariant(String),
}
