// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-category traveler generator

use crate::category::Category;
use crate::delay::DelaySource;
use crate::error::HarborError;
use crate::event::PersonId;
use crate::harbor::Harbor;
use crate::worker::run_person;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, error};

/// Spawn every traveler of `category`, then wait for all of them to leave.
///
/// Each spawn is preceded by a random pause bounded by the category's
/// generation time. The first failing traveler ends the generator; dropping
/// the join set aborts the travelers still running.
///
/// Returns the number of travelers that departed.
pub async fn generate<D: DelaySource>(
    harbor: Arc<Harbor<D>>,
    category: Category,
) -> Result<u32, HarborError> {
    let count = harbor.config().person_count;
    let pause = harbor.config().generation_time(category);
    let mut travelers = JoinSet::new();

    for index in 1..=count {
        tokio::time::sleep(harbor.delays().between(Duration::ZERO, pause)).await;

        let id = PersonId::new(category, index);
        travelers.spawn(run_person(Arc::clone(&harbor), id));
        debug!(person = %id, "traveler generated");
    }

    let mut departed = 0;
    while let Some(joined) = travelers.join_next().await {
        if let Err(e) = joined.map_err(HarborError::from).and_then(|result| result) {
            error!(%category, error = %e, "traveler failed, aborting generator");
            return Err(e);
        }
        departed += 1;
    }

    debug!(%category, departed, "generator finished");
    Ok(departed)
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
