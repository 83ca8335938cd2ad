// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run orchestration: setup, the two generators, teardown

use crate::category::Category;
use crate::config::HarborConfig;
use crate::coordination::Primitives;
use crate::delay::DelaySource;
use crate::error::HarborError;
use crate::generator::generate;
use crate::pier::{Occupancy, Pier, PierCounts};
use crate::sink::LogSink;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

/// Everything the travelers of one run share
#[derive(Debug)]
pub struct Harbor<D> {
    config: HarborConfig,
    pier: Pier,
    primitives: Primitives,
    delays: D,
}

/// Summary of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Events written to the log
    pub events: u64,
    /// Travelers that left, per category
    pub departed: Occupancy,
    /// Counters at teardown
    pub final_counts: PierCounts,
    /// Whether every primitive was back at its initial value
    pub clean_shutdown: bool,
}

impl<D: DelaySource> Harbor<D> {
    /// Fresh pier and primitives for one run
    pub fn new(config: HarborConfig, sink: LogSink, delays: D) -> Self {
        Self {
            pier: Pier::new(config.pier_capacity, sink),
            primitives: Primitives::new(),
            config,
            delays,
        }
    }

    pub fn config(&self) -> &HarborConfig {
        &self.config
    }

    pub fn pier(&self) -> &Pier {
        &self.pier
    }

    pub fn primitives(&self) -> &Primitives {
        &self.primitives
    }

    pub fn delays(&self) -> &D {
        &self.delays
    }

    /// Flush the log and close every primitive.
    ///
    /// Fails if travelers are still on the pier.
    pub async fn shutdown(&self, departed: Occupancy) -> Result<RunReport, HarborError> {
        let (events, final_counts) = {
            let mut pier = self.pier.lock().await;
            pier.flush()?;
            (pier.events_logged(), pier.counts().clone())
        };

        let clean_shutdown = self.primitives.close();
        if !clean_shutdown {
            warn!("primitives were not at their initial values at shutdown");
        }

        if final_counts != PierCounts::default() {
            return Err(HarborError::Invariant(format!(
                "{} travelers ({} reserved) still on the pier at shutdown",
                final_counts.available(),
                final_counts.grouped()
            )));
        }

        Ok(RunReport {
            events,
            departed,
            final_counts,
            clean_shutdown,
        })
    }
}

/// Run a whole simulation: both generators concurrently, then teardown.
pub async fn run<D: DelaySource>(
    config: HarborConfig,
    sink: LogSink,
    delays: D,
) -> Result<RunReport, HarborError> {
    info!(
        person_count = config.person_count,
        pier_capacity = config.pier_capacity,
        "starting harbor run"
    );

    let harbor = Arc::new(Harbor::new(config, sink, delays));
    let mut generators = JoinSet::new();
    for category in Category::ALL {
        let harbor = Arc::clone(&harbor);
        generators.spawn(async move {
            generate(harbor, category)
                .await
                .map(|departed| (category, departed))
        });
    }

    let mut departed = Occupancy::default();
    while let Some(joined) = generators.join_next().await {
        match joined.map_err(HarborError::from).and_then(|result| result) {
            Ok((category, count)) => departed.add(category, count),
            Err(e) => {
                error!(error = %e, "generator failed, aborting run");
                generators.shutdown().await;
                harbor.primitives().close();
                return Err(e);
            }
        }
    }

    let report = harbor.shutdown(departed).await?;
    info!(
        events = report.events,
        hackers = report.departed.hackers,
        serfs = report.departed.serfs,
        "harbor run finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "harbor_tests.rs"]
mod tests;
