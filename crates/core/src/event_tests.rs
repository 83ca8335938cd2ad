// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn entry(seq: u64, category: Category, index: u32, event: PierEvent) -> LogEntry {
    LogEntry {
        seq,
        person: PersonId::new(category, index),
        event,
        counts: event.carries_counts().then_some(Occupancy::new(2, 1)),
    }
}

#[parameterized(
    starts = { PierEvent::Starts, "7: SERF 3: starts" },
    leaves_queue = { PierEvent::LeavesQueue, "7: SERF 3: leaves queue: 2: 1" },
    is_back = { PierEvent::IsBack, "7: SERF 3: is back" },
    waits = { PierEvent::Waits, "7: SERF 3: waits: 2: 1" },
    boards = { PierEvent::Boards, "7: SERF 3: boards: 2: 1" },
    captain_exits = { PierEvent::CaptainExits, "7: SERF 3: captain exits: 2: 1" },
    member_exits = { PierEvent::MemberExits, "7: SERF 3: member exits: 2: 1" },
)]
fn formats_each_event(event: PierEvent, expected: &str) {
    let entry = entry(7, Category::Serf, 3, event);
    assert_eq!(entry.to_string(), expected);
    assert_eq!(expected.parse::<LogEntry>(), Ok(entry));
}

#[test]
fn only_exits_are_departures() {
    let departures: Vec<_> = PierEvent::ALL
        .into_iter()
        .filter(|event| event.is_departure())
        .collect();
    assert_eq!(
        departures,
        vec![PierEvent::CaptainExits, PierEvent::MemberExits]
    );
}

#[test]
fn parse_tolerates_trailing_newline() {
    let entry: LogEntry = "12: HACK 4: boards: 0: 1\n".parse().unwrap();
    assert_eq!(entry.seq, 12);
    assert_eq!(entry.person, PersonId::new(Category::Hacker, 4));
    assert_eq!(entry.counts, Some(Occupancy::new(0, 1)));
}

#[parameterized(
    empty = { "", ParseEntryError::InvalidNumber { field: "action number", value: String::new() } },
    no_person = { "1", ParseEntryError::Missing("person") },
    no_index = { "1: HACK: starts", ParseEntryError::Missing("person index") },
    bad_index = { "1: HACK x: starts", ParseEntryError::InvalidNumber { field: "person index", value: "x".to_string() } },
    bad_category = { "1: PIRATE 1: starts", ParseEntryError::UnknownCategory("unknown category: PIRATE".to_string()) },
    no_event = { "1: HACK 1", ParseEntryError::Missing("event") },
    bad_event = { "1: HACK 1: swims", ParseEntryError::UnknownEvent("swims".to_string()) },
    negative_count = { "1: HACK 1: waits: -1: 0", ParseEntryError::InvalidNumber { field: "hacker count", value: "-1".to_string() } },
    half_counts = { "1: HACK 1: waits: 1", ParseEntryError::Missing("serf count") },
    extra = { "1: HACK 1: waits: 1: 0: 9", ParseEntryError::Trailing("9".to_string()) },
    counts_on_starts = { "1: HACK 1: starts: 0: 0", ParseEntryError::UnexpectedCounts(PierEvent::Starts) },
    no_counts_on_boards = { "1: HACK 1: boards", ParseEntryError::MissingCounts(PierEvent::Boards) },
)]
fn rejects_malformed_lines(line: &str, expected: ParseEntryError) {
    assert_eq!(line.parse::<LogEntry>(), Err(expected));
}
