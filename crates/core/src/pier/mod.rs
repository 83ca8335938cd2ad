// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared pier state
//!
//! The counters and the action sequence live behind one lock; the only way to
//! read or change them is through a [`PierGuard`].

mod counts;
mod state;

pub use counts::{GroupKind, Occupancy, PierCounts, GROUP_SIZE};
pub use state::{Pier, PierGuard};
