// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delay abstraction for testable randomized pauses

use rand::Rng;
use std::time::Duration;

/// Picks how long a participant pauses
pub trait DelaySource: Clone + Send + Sync + 'static {
    /// Pick a duration in the inclusive range `[low, high]`.
    ///
    /// When `high <= low` the result is `low`.
    fn between(&self, low: Duration, high: Duration) -> Duration;
}

/// Uniformly random delays with microsecond resolution
#[derive(Clone, Debug, Default)]
pub struct RandomDelay;

impl DelaySource for RandomDelay {
    fn between(&self, low: Duration, high: Duration) -> Duration {
        if high <= low {
            return low;
        }
        let low_us = micros(low);
        let high_us = micros(high);
        Duration::from_micros(rand::thread_rng().gen_range(low_us..=high_us))
    }
}

/// Deterministic delays for testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixedDelay {
    /// Always the lower bound
    Shortest,
    /// Always the upper bound
    Longest,
}

impl DelaySource for FixedDelay {
    fn between(&self, low: Duration, high: Duration) -> Duration {
        match self {
            FixedDelay::Shortest => low,
            FixedDelay::Longest => high.max(low),
        }
    }
}

fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "delay_tests.rs"]
mod tests;
