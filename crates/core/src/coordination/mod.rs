// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination primitives shared by every traveler
//!
//! This module provides:
//! - **Gate** - Counting semaphore a queued member waits on until its captain releases it
//! - **BoardingLock** - Binary lock that lets one group at a time board and depart
//! - **ExitBarrier** - Rendezvous counter the captain drains once per released member
//! - **Primitives** - The full set, created once per run

mod boarding;
mod gate;

pub use boarding::{BoardingLock, BoardingPermit};
pub use gate::{ExitBarrier, Gate};

use crate::category::Category;
use tracing::warn;

/// The gates, boarding lock and exit barrier of one run
///
/// The pier lock itself lives with the counters it guards, see [`crate::pier::Pier`].
#[derive(Debug)]
pub struct Primitives {
    hacker_gate: Gate,
    serf_gate: Gate,
    pub boarding: BoardingLock,
    pub exit_barrier: ExitBarrier,
}

impl Primitives {
    pub fn new() -> Self {
        Self {
            hacker_gate: Gate::new("hacker gate", 0),
            serf_gate: Gate::new("serf gate", 0),
            boarding: BoardingLock::new(),
            exit_barrier: ExitBarrier::new(),
        }
    }

    /// The gate travelers of `category` queue on
    pub fn gate(&self, category: Category) -> &Gate {
        match category {
            Category::Hacker => &self.hacker_gate,
            Category::Serf => &self.serf_gate,
        }
    }

    /// Close every primitive; any participant still waiting gets an error.
    ///
    /// Returns `true` when every primitive was back at its initial value.
    pub fn close(&self) -> bool {
        let mut clean = true;
        for gate in [&self.hacker_gate, &self.serf_gate] {
            if gate.pending() != 0 {
                warn!(gate = gate.name(), pending = gate.pending(), "gate closed with unconsumed releases");
                clean = false;
            }
            gate.close();
        }
        if self.exit_barrier.pending() != 0 {
            warn!(pending = self.exit_barrier.pending(), "exit barrier closed with unconsumed arrivals");
            clean = false;
        }
        if !self.boarding.is_free() {
            warn!("boarding lock closed while held");
            clean = false;
        }
        self.exit_barrier.close();
        self.boarding.close();
        clean
    }
}

impl Default for Primitives {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "primitives_tests.rs"]
mod tests;
