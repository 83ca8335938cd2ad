// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logged pier events and the log line format
//!
//! One line per event:
//! `<seq>: <CATEGORY> <index>: <event>[: <hackers>: <serfs>]`

use crate::category::Category;
use crate::pier::Occupancy;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A traveler: category plus 1-based index within its generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId {
    pub category: Category,
    pub index: u32,
}

impl PersonId {
    pub fn new(category: Category, index: u32) -> Self {
        Self { category, index }
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category, self.index)
    }
}

/// Something a traveler does that ends up in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PierEvent {
    Starts,
    LeavesQueue,
    IsBack,
    Waits,
    Boards,
    CaptainExits,
    MemberExits,
}

impl PierEvent {
    pub const ALL: [PierEvent; 7] = [
        PierEvent::Starts,
        PierEvent::LeavesQueue,
        PierEvent::IsBack,
        PierEvent::Waits,
        PierEvent::Boards,
        PierEvent::CaptainExits,
        PierEvent::MemberExits,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PierEvent::Starts => "starts",
            PierEvent::LeavesQueue => "leaves queue",
            PierEvent::IsBack => "is back",
            PierEvent::Waits => "waits",
            PierEvent::Boards => "boards",
            PierEvent::CaptainExits => "captain exits",
            PierEvent::MemberExits => "member exits",
        }
    }

    /// Whether the line ends with the pier counts
    pub fn carries_counts(self) -> bool {
        !matches!(self, PierEvent::Starts | PierEvent::IsBack)
    }

    /// Whether the traveler leaves the harbor with this event
    pub fn is_departure(self) -> bool {
        matches!(self, PierEvent::CaptainExits | PierEvent::MemberExits)
    }
}

impl fmt::Display for PierEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PierEvent {
    type Err = ParseEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PierEvent::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| ParseEntryError::UnknownEvent(s.to_string()))
    }
}

/// One line of the event log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub seq: u64,
    pub person: PersonId,
    pub event: PierEvent,
    /// Available hackers and serfs, for events that carry them
    pub counts: Option<Occupancy>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.seq, self.person, self.event)?;
        if let Some(counts) = self.counts {
            write!(f, ": {counts}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a log line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEntryError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("invalid {field}: `{value}`")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{0}")]
    UnknownCategory(String),
    #[error("unknown event: `{0}`")]
    UnknownEvent(String),
    #[error("`{0}` must not carry counts")]
    UnexpectedCounts(PierEvent),
    #[error("`{0}` must carry counts")]
    MissingCounts(PierEvent),
    #[error("unexpected trailing field: `{0}`")]
    Trailing(String),
}

impl FromStr for LogEntry {
    type Err = ParseEntryError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = line.trim_end().split(": ");

        let seq = number("action number", fields.next())?;

        let person = fields.next().ok_or(ParseEntryError::Missing("person"))?;
        let (category, index) = person
            .split_once(' ')
            .ok_or(ParseEntryError::Missing("person index"))?;
        let category = category
            .parse::<Category>()
            .map_err(ParseEntryError::UnknownCategory)?;
        let index = number("person index", Some(index))?;

        let event = fields
            .next()
            .ok_or(ParseEntryError::Missing("event"))?
            .parse::<PierEvent>()?;

        let counts = match fields.next() {
            None => None,
            Some(hackers) => Some(Occupancy::new(
                number("hacker count", Some(hackers))?,
                number("serf count", fields.next())?,
            )),
        };
        if let Some(extra) = fields.next() {
            return Err(ParseEntryError::Trailing(extra.to_string()));
        }

        match (event.carries_counts(), counts.is_some()) {
            (true, false) => return Err(ParseEntryError::MissingCounts(event)),
            (false, true) => return Err(ParseEntryError::UnexpectedCounts(event)),
            _ => {}
        }

        Ok(LogEntry {
            seq,
            person: PersonId::new(category, index),
            event,
            counts,
        })
    }
}

fn number<T: FromStr>(field: &'static str, value: Option<&str>) -> Result<T, ParseEntryError> {
    let value = value.ok_or(ParseEntryError::Missing(field))?;
    value.parse().map_err(|_| ParseEntryError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
