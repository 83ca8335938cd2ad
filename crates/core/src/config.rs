// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validated simulation parameters
//!
//! Every run is described by six integers. They are checked once, before any
//! shared state exists, and then carried around as typed values.

use crate::category::Category;
use std::time::Duration;
use thiserror::Error;

/// Number of positional values a run is described by
pub const ARGUMENT_COUNT: usize = 6;
/// Smallest allowed number of travelers per category
pub const MIN_PERSON_COUNT: i64 = 2;
/// Upper bound for every millisecond parameter
pub const MAX_DELAY_MS: i64 = 2000;
/// Lower bound for the pier re-check interval
pub const MIN_CHECK_PIER_MS: i64 = 20;
/// Smallest pier that can hold a full group plus one arrival
pub const MIN_PIER_CAPACITY: i64 = 5;

/// Errors from parsing or validating run parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("expected {ARGUMENT_COUNT} arguments, got {0}")]
    ArgumentCount(usize),
    #[error("{name}: `{value}` is not an integer")]
    NotAnInteger { name: &'static str, value: String },
    #[error("{name} must be at least {min}, got {value}")]
    TooSmall {
        name: &'static str,
        min: i64,
        value: i64,
    },
    #[error("{name} must be at most {max}, got {value}")]
    TooLarge {
        name: &'static str,
        max: i64,
        value: i64,
    },
    #[error("person count must be even, got {0}")]
    OddPersonCount(i64),
}

/// Parameters of one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarborConfig {
    /// Travelers generated per category
    pub person_count: u32,
    /// Upper bound of the pause before each hacker is generated
    pub hacker_gen_time: Duration,
    /// Upper bound of the pause before each serf is generated
    pub serf_gen_time: Duration,
    /// Upper bound of a voyage
    pub sail_time: Duration,
    /// Upper bound of a retreat from a full pier
    pub check_pier: Duration,
    /// Travelers the pier admits before arrivals retreat
    pub pier_capacity: u32,
}

impl HarborConfig {
    /// Build a config from millisecond values, validating every bound
    pub fn new(
        person_count: i64,
        hacker_gen_time_ms: i64,
        serf_gen_time_ms: i64,
        sail_time_ms: i64,
        check_pier_ms: i64,
        pier_capacity: i64,
    ) -> Result<Self, ConfigError> {
        let person_count = at_least("person count", person_count, MIN_PERSON_COUNT)?;
        if person_count % 2 != 0 {
            return Err(ConfigError::OddPersonCount(person_count));
        }

        Ok(Self {
            person_count: to_u32("person count", person_count)?,
            hacker_gen_time: millis("hacker generation time", hacker_gen_time_ms, 0)?,
            serf_gen_time: millis("serf generation time", serf_gen_time_ms, 0)?,
            sail_time: millis("sail time", sail_time_ms, 0)?,
            check_pier: millis("pier check time", check_pier_ms, MIN_CHECK_PIER_MS)?,
            pier_capacity: to_u32(
                "pier capacity",
                at_least("pier capacity", pier_capacity, MIN_PIER_CAPACITY)?,
            )?,
        })
    }

    /// Parse the six positional values in order:
    /// person count, hacker generation, serf generation, sail time,
    /// pier check time, pier capacity.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let [count, hacker_gen, serf_gen, sail, check, capacity] = args else {
            return Err(ConfigError::ArgumentCount(args.len()));
        };

        Self::new(
            integer("person count", count.as_ref())?,
            integer("hacker generation time", hacker_gen.as_ref())?,
            integer("serf generation time", serf_gen.as_ref())?,
            integer("sail time", sail.as_ref())?,
            integer("pier check time", check.as_ref())?,
            integer("pier capacity", capacity.as_ref())?,
        )
    }

    /// Upper bound of the pause before generating the next traveler
    pub fn generation_time(&self, category: Category) -> Duration {
        match category {
            Category::Hacker => self.hacker_gen_time,
            Category::Serf => self.serf_gen_time,
        }
    }
}

fn integer(name: &'static str, value: &str) -> Result<i64, ConfigError> {
    value.parse().map_err(|_| ConfigError::NotAnInteger {
        name,
        value: value.to_string(),
    })
}

fn at_least(name: &'static str, value: i64, min: i64) -> Result<i64, ConfigError> {
    if value < min {
        return Err(ConfigError::TooSmall { name, min, value });
    }
    Ok(value)
}

fn millis(name: &'static str, value: i64, min: i64) -> Result<Duration, ConfigError> {
    let value = at_least(name, value, min)?;
    if value > MAX_DELAY_MS {
        return Err(ConfigError::TooLarge {
            name,
            max: MAX_DELAY_MS,
            value,
        });
    }
    Ok(Duration::from_millis(value.unsigned_abs()))
}

fn to_u32(name: &'static str, value: i64) -> Result<u32, ConfigError> {
    u32::try_from(value).map_err(|_| ConfigError::TooLarge {
        name,
        max: i64::from(u32::MAX),
        value,
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
