// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exclusive boarding rights

use crate::error::HarborError;
use tokio::sync::{Semaphore, SemaphorePermit};

/// Binary lock held by a captain from boarding until its group has left
#[derive(Debug)]
pub struct BoardingLock {
    rights: Semaphore,
}

/// Proof that the holder's group is the one boarding.
///
/// Boarding rights return to the lock when the permit is released or dropped.
#[derive(Debug)]
#[must_use = "dropping the permit lets the next group board"]
pub struct BoardingPermit<'a> {
    _permit: SemaphorePermit<'a>,
}

impl BoardingPermit<'_> {
    /// Hand boarding rights to the next captain
    pub fn release(self) {}
}

impl BoardingLock {
    pub fn new() -> Self {
        Self {
            rights: Semaphore::new(1),
        }
    }

    /// Block until no other group is boarding
    pub async fn acquire(&self) -> Result<BoardingPermit<'_>, HarborError> {
        let permit = self
            .rights
            .acquire()
            .await
            .map_err(|_| HarborError::PrimitiveClosed("boarding lock"))?;
        Ok(BoardingPermit { _permit: permit })
    }

    pub fn is_free(&self) -> bool {
        self.rights.available_permits() == 1
    }

    pub fn close(&self) {
        self.rights.close();
    }
}

impl Default for BoardingLock {
    fn default() -> Self {
        Self::new()
    }
}
