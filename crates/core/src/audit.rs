// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event log auditing
//!
//! Replays a finished log and checks the rules every run must obey:
//! - action numbers run 1, 2, 3, ... without gaps
//! - logged counts match the arrivals and departures seen so far
//! - one group boards at a time, with exactly three members and one captain
//! - every group is four of a kind or two and two
//! - every retreat is followed by a return
//! - with a known person count, everyone who started also left

use crate::category::Category;
use crate::config::HarborConfig;
use crate::event::{LogEntry, ParseEntryError, PersonId, PierEvent};
use crate::pier::{GroupKind, Occupancy, GROUP_SIZE};
use std::collections::HashSet;
use thiserror::Error;

/// What the auditor knows about the run beyond the log itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditOptions {
    /// Travelers generated per category
    pub person_count: Option<u32>,
    /// Pier capacity the run used
    pub pier_capacity: Option<u32>,
}

impl AuditOptions {
    pub fn for_config(config: &HarborConfig) -> Self {
        Self {
            person_count: Some(config.person_count),
            pier_capacity: Some(config.pier_capacity),
        }
    }
}

/// A rule the log breaks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: ParseEntryError,
    },
    #[error("expected action {expected}, found {found}")]
    SequenceGap { expected: u64, found: u64 },
    #[error("action {seq}: {person} starts twice")]
    DuplicateStart { seq: u64, person: PersonId },
    #[error("action {seq}: {person} acts before starting")]
    NotStarted { seq: u64, person: PersonId },
    #[error("action {seq}: {person} acts after leaving")]
    AfterDeparture { seq: u64, person: PersonId },
    #[error("action {seq}: logged counts {logged}, expected {expected}")]
    CountMismatch {
        seq: u64,
        expected: Occupancy,
        logged: Occupancy,
    },
    #[error("action {seq}: {occupancy} on a pier of capacity {capacity}")]
    OverCapacity {
        seq: u64,
        occupancy: u32,
        capacity: u32,
    },
    #[error("action {seq}: {person} retreats from a pier with room ({occupancy} of {capacity})")]
    NeedlessRetreat {
        seq: u64,
        person: PersonId,
        occupancy: u32,
        capacity: u32,
    },
    #[error("action {seq}: {person} is back without having left")]
    BackWithoutRetreat { seq: u64, person: PersonId },
    #[error("action {seq}: {person} is not on the pier")]
    NotOnPier { seq: u64, person: PersonId },
    #[error("action {seq}: {person} joins the pier twice")]
    AlreadyOnPier { seq: u64, person: PersonId },
    #[error("action {seq}: {person} acts while retreated")]
    ActsWhileRetreated { seq: u64, person: PersonId },
    #[error("action {seq}: a group boards while another is still boarding")]
    BoardingOverlap { seq: u64 },
    #[error("action {seq}: {person} exits with no group boarding")]
    ExitWithoutGroup { seq: u64, person: PersonId },
    #[error("action {seq}: captain exit by {person}, but {captain} boarded the group")]
    CaptainMismatch {
        seq: u64,
        person: PersonId,
        captain: PersonId,
    },
    #[error("action {seq}: group has {size} travelers")]
    WrongGroupSize { seq: u64, size: u32 },
    #[error("action {seq}: group of {composition} is not a legal composition")]
    InvalidComposition { seq: u64, composition: Occupancy },
    #[error("the group boarded at action {seq} never finished")]
    UnfinishedGroup { seq: u64 },
    #[error("{person} never came back from a retreat")]
    UnfinishedRetreat { person: PersonId },
    #[error("{category}: {starts} started and {departures} left, expected {expected}")]
    Conservation {
        category: Category,
        starts: u32,
        departures: u32,
        expected: u32,
    },
}

/// Summary of a log that passed the audit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub events: u64,
    pub starts: Occupancy,
    pub departures: Occupancy,
    pub same_category_groups: u32,
    pub mixed_groups: u32,
    pub retreats: u32,
}

impl AuditReport {
    pub fn groups(&self) -> u32 {
        self.same_category_groups + self.mixed_groups
    }
}

/// The group between its "boards" line and its captain's exit
struct OpenGroup {
    seq: u64,
    captain: PersonId,
    before: Occupancy,
    after: Occupancy,
    members: Occupancy,
}

#[derive(Default)]
struct Auditor {
    options: AuditOptions,
    report: AuditReport,
    available: Occupancy,
    group: Option<OpenGroup>,
    started: HashSet<PersonId>,
    retreated: HashSet<PersonId>,
    on_pier: HashSet<PersonId>,
    departed: HashSet<PersonId>,
}

/// Audit a complete log
pub fn audit(log: &str, options: &AuditOptions) -> Result<AuditReport, AuditError> {
    let mut auditor = Auditor {
        options: options.clone(),
        ..Auditor::default()
    };

    for (number, line) in log.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry = line.parse::<LogEntry>().map_err(|source| AuditError::Malformed {
            line: number + 1,
            source,
        })?;
        auditor.check(entry)?;
    }

    auditor.finish()
}

impl Auditor {
    fn check(&mut self, entry: LogEntry) -> Result<(), AuditError> {
        let LogEntry {
            seq,
            person,
            event,
            counts,
        } = entry;

        let expected = self.report.events + 1;
        if seq != expected {
            return Err(AuditError::SequenceGap {
                expected,
                found: seq,
            });
        }
        self.report.events = seq;

        if self.departed.contains(&person) {
            return Err(AuditError::AfterDeparture { seq, person });
        }
        if event != PierEvent::Starts && !self.started.contains(&person) {
            return Err(AuditError::NotStarted { seq, person });
        }
        if event != PierEvent::IsBack && self.retreated.contains(&person) {
            return Err(AuditError::ActsWhileRetreated { seq, person });
        }

        let logged = counts.unwrap_or_default();
        match event {
            PierEvent::Starts => {
                if !self.started.insert(person) {
                    return Err(AuditError::DuplicateStart { seq, person });
                }
                self.report.starts.add(person.category, 1);
            }
            PierEvent::LeavesQueue => {
                self.expect_counts(seq, logged)?;
                if let Some(capacity) = self.options.pier_capacity {
                    let occupancy = logged.total();
                    if occupancy < capacity {
                        return Err(AuditError::NeedlessRetreat {
                            seq,
                            person,
                            occupancy,
                            capacity,
                        });
                    }
                }
                self.retreated.insert(person);
                self.report.retreats += 1;
            }
            PierEvent::IsBack => {
                if !self.retreated.remove(&person) {
                    return Err(AuditError::BackWithoutRetreat { seq, person });
                }
            }
            PierEvent::Waits => {
                if !self.on_pier.insert(person) {
                    return Err(AuditError::AlreadyOnPier { seq, person });
                }
                self.available.add(person.category, 1);
                self.expect_counts(seq, logged)?;
                if let Some(capacity) = self.options.pier_capacity {
                    if logged.total() > capacity {
                        return Err(AuditError::OverCapacity {
                            seq,
                            occupancy: logged.total(),
                            capacity,
                        });
                    }
                }
            }
            PierEvent::Boards => {
                if self.group.is_some() {
                    return Err(AuditError::BoardingOverlap { seq });
                }
                if !self.on_pier.contains(&person) {
                    return Err(AuditError::NotOnPier { seq, person });
                }
                if !self.available.covers(logged) {
                    return Err(AuditError::CountMismatch {
                        seq,
                        expected: self.available,
                        logged,
                    });
                }
                let mut members = Occupancy::default();
                members.add(person.category, 1);
                self.group = Some(OpenGroup {
                    seq,
                    captain: person,
                    before: self.available,
                    after: logged,
                    members,
                });
                self.available = logged;
            }
            PierEvent::MemberExits => {
                self.expect_counts(seq, logged)?;
                let group = self
                    .group
                    .as_mut()
                    .ok_or(AuditError::ExitWithoutGroup { seq, person })?;
                group.members.add(person.category, 1);
                if group.members.total() > GROUP_SIZE {
                    return Err(AuditError::WrongGroupSize {
                        seq,
                        size: group.members.total(),
                    });
                }
            }
            PierEvent::CaptainExits => {
                self.expect_counts(seq, logged)?;
                let group = self
                    .group
                    .take()
                    .ok_or(AuditError::ExitWithoutGroup { seq, person })?;
                self.close_group(seq, person, group)?;
            }
        }

        if event.is_departure() {
            self.depart(seq, person)?;
        }
        Ok(())
    }

    fn close_group(&mut self, seq: u64, person: PersonId, group: OpenGroup) -> Result<(), AuditError> {
        if person != group.captain {
            return Err(AuditError::CaptainMismatch {
                seq,
                person,
                captain: group.captain,
            });
        }
        if group.members.total() != GROUP_SIZE {
            return Err(AuditError::WrongGroupSize {
                seq,
                size: group.members.total(),
            });
        }
        let kind = GroupKind::from_composition(group.members).ok_or(
            AuditError::InvalidComposition {
                seq,
                composition: group.members,
            },
        )?;
        let debited = group.before.checked_sub(group.after);
        if debited != Some(group.members) {
            return Err(AuditError::CountMismatch {
                seq: group.seq,
                expected: group.before.checked_sub(group.members).unwrap_or_default(),
                logged: group.after,
            });
        }

        match kind {
            GroupKind::FourOf(_) => self.report.same_category_groups += 1,
            GroupKind::Mixed => self.report.mixed_groups += 1,
        }
        Ok(())
    }

    fn expect_counts(&self, seq: u64, logged: Occupancy) -> Result<(), AuditError> {
        if logged != self.available {
            return Err(AuditError::CountMismatch {
                seq,
                expected: self.available,
                logged,
            });
        }
        Ok(())
    }

    fn depart(&mut self, seq: u64, person: PersonId) -> Result<(), AuditError> {
        if !self.on_pier.remove(&person) {
            return Err(AuditError::NotOnPier { seq, person });
        }
        self.departed.insert(person);
        self.report.departures.add(person.category, 1);
        Ok(())
    }

    fn finish(self) -> Result<AuditReport, AuditError> {
        if let Some(group) = self.group {
            return Err(AuditError::UnfinishedGroup { seq: group.seq });
        }
        if let Some(person) = self.retreated.iter().min() {
            return Err(AuditError::UnfinishedRetreat { person: *person });
        }
        for category in Category::ALL {
            let starts = self.report.starts.get(category);
            let departures = self.report.departures.get(category);
            let expected = self.options.person_count.unwrap_or(starts);
            if starts != expected || departures != expected {
                return Err(AuditError::Conservation {
                    category,
                    starts,
                    departures,
                    expected,
                });
            }
        }
        Ok(self.report)
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
