// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! harbor-core: River crossing simulation for hackers and serfs
//!
//! This crate provides:
//! - The shared pier counters, reachable only through the pier lock
//! - Gate, boarding lock and exit barrier primitives
//! - The person state machine, the per-category generator and the orchestrator
//! - A log auditor that checks a finished run against the boarding rules

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod category;
pub mod config;
pub mod delay;
pub mod error;
pub mod sink;

// Shared state and primitives (order matters for dependencies)
pub mod event;
pub mod pier;
pub mod coordination;

// Participants
pub mod worker;
pub mod generator;
pub mod harbor;

pub mod audit;

// Re-exports
pub use audit::{audit, AuditError, AuditOptions, AuditReport};
pub use category::Category;
pub use config::{ConfigError, HarborConfig};
pub use coordination::{BoardingLock, BoardingPermit, ExitBarrier, Gate, Primitives};
pub use delay::{DelaySource, FixedDelay, RandomDelay};
pub use error::HarborError;
pub use event::{LogEntry, ParseEntryError, PersonId, PierEvent};
pub use generator::generate;
pub use harbor::{run, Harbor, RunReport};
pub use pier::{GroupKind, Occupancy, Pier, PierCounts, PierGuard};
pub use sink::{LogSink, MemoryLog};
pub use worker::{run_person, Person, PersonState};
