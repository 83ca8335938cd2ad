// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The locked pier: counters, action sequence and log sink

use super::counts::{GroupKind, PierCounts};
use crate::category::Category;
use crate::error::HarborError;
use crate::event::{LogEntry, PersonId, PierEvent};
use crate::sink::LogSink;
use tokio::sync::{Mutex, MutexGuard};

/// Everything guarded by the pier lock
#[derive(Debug)]
struct PierState {
    counts: PierCounts,
    next_seq: u64,
    sink: LogSink,
}

/// The shared pier
#[derive(Debug)]
pub struct Pier {
    capacity: u32,
    state: Mutex<PierState>,
}

impl Pier {
    /// An empty pier whose first logged event gets action number 1
    pub fn new(capacity: u32, sink: LogSink) -> Self {
        Self {
            capacity,
            state: Mutex::new(PierState {
                counts: PierCounts::default(),
                next_seq: 1,
                sink,
            }),
        }
    }

    /// Wait for exclusive access to the pier
    pub async fn lock(&self) -> PierGuard<'_> {
        PierGuard {
            state: self.state.lock().await,
            capacity: self.capacity,
        }
    }
}

/// Exclusive access to the pier
///
/// Dropping the guard releases the lock.
pub struct PierGuard<'a> {
    state: MutexGuard<'a, PierState>,
    capacity: u32,
}

impl PierGuard<'_> {
    pub fn counts(&self) -> &PierCounts {
        &self.state.counts
    }

    pub fn is_full(&self) -> bool {
        self.state.counts.is_full(self.capacity)
    }

    pub fn join(&mut self, category: Category) {
        self.state.counts.join(category);
    }

    pub fn try_reserve(&mut self, category: Category) -> Option<GroupKind> {
        self.state.counts.try_reserve(category)
    }

    pub fn finalize(&mut self, kind: GroupKind) -> Result<(), HarborError> {
        self.state.counts.finalize(kind)
    }

    /// Number the event, stamp it with the current counts and write it out.
    ///
    /// Returns the action number the event was logged under.
    pub fn record(&mut self, person: PersonId, event: PierEvent) -> Result<u64, HarborError> {
        let seq = self.state.next_seq;
        let counts = event
            .carries_counts()
            .then(|| self.state.counts.available());
        let entry = LogEntry {
            seq,
            person,
            event,
            counts,
        };

        self.state.sink.write_line(&entry.to_string())?;
        self.state.next_seq += 1;
        Ok(seq)
    }

    /// Events logged so far
    pub fn events_logged(&self) -> u64 {
        self.state.next_seq - 1
    }

    pub fn flush(&mut self) -> Result<(), HarborError> {
        Ok(self.state.sink.flush()?)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
