// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counting gates and the exit rendezvous

use crate::error::HarborError;
use tokio::sync::Semaphore;

/// Counting semaphore: `wait` takes one unit or blocks, `post` adds one
#[derive(Debug)]
pub struct Gate {
    name: &'static str,
    units: Semaphore,
}

impl Gate {
    pub fn new(name: &'static str, initial: usize) -> Self {
        Self {
            name,
            units: Semaphore::new(initial),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Take one unit, blocking until one is posted
    pub async fn wait(&self) -> Result<(), HarborError> {
        let permit = self
            .units
            .acquire()
            .await
            .map_err(|_| HarborError::PrimitiveClosed(self.name))?;
        permit.forget();
        Ok(())
    }

    /// Add one unit, waking a waiter if there is one
    pub fn post(&self) {
        self.units.add_permits(1);
    }

    /// Units posted and not yet taken
    pub fn pending(&self) -> usize {
        self.units.available_permits()
    }

    pub fn close(&self) {
        self.units.close();
    }
}

/// Rendezvous between a captain and the members it released
///
/// Each member arrives exactly once; the captain waits once per member.
/// There is no ownership: any arrival counts toward any wait.
#[derive(Debug)]
pub struct ExitBarrier {
    arrivals: Gate,
}

impl ExitBarrier {
    pub fn new() -> Self {
        Self {
            arrivals: Gate::new("exit barrier", 0),
        }
    }

    /// A released member has logged its departure
    pub fn arrive(&self) {
        self.arrivals.post();
    }

    /// Block until `parties` arrivals have been observed
    pub async fn await_parties(&self, parties: u32) -> Result<(), HarborError> {
        for _ in 0..parties {
            self.arrivals.wait().await?;
        }
        Ok(())
    }

    pub fn pending(&self) -> usize {
        self.arrivals.pending()
    }

    pub fn close(&self) {
        self.arrivals.close();
    }
}

impl Default for ExitBarrier {
    fn default() -> Self {
        Self::new()
    }
}
