// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::pier::Occupancy;
use std::sync::Arc;

fn hacker(index: u32) -> PersonId {
    PersonId::new(Category::Hacker, index)
}

#[tokio::test]
async fn first_event_is_numbered_one() {
    let (sink, log) = LogSink::memory();
    let pier = Pier::new(5, sink);

    let seq = pier.lock().await.record(hacker(1), PierEvent::Starts).unwrap();

    assert_eq!(seq, 1);
    assert_eq!(log.lines(), vec!["1: HACK 1: starts"]);
}

#[tokio::test]
async fn counted_events_carry_available_counts() {
    let (sink, log) = LogSink::memory();
    let pier = Pier::new(5, sink);

    let mut guard = pier.lock().await;
    guard.record(hacker(1), PierEvent::Starts).unwrap();
    guard.join(Category::Hacker);
    guard.record(hacker(1), PierEvent::Waits).unwrap();
    guard.record(hacker(1), PierEvent::IsBack).unwrap();
    drop(guard);

    assert_eq!(
        log.lines(),
        vec![
            "1: HACK 1: starts",
            "2: HACK 1: waits: 1: 0",
            "3: HACK 1: is back",
        ]
    );
}

#[tokio::test]
async fn guard_tracks_capacity() {
    let (sink, _log) = LogSink::memory();
    let pier = Pier::new(5, sink);

    let mut guard = pier.lock().await;
    for _ in 0..4 {
        guard.join(Category::Serf);
    }
    assert!(!guard.is_full());
    guard.join(Category::Hacker);
    assert!(guard.is_full());
    assert_eq!(guard.counts().available(), Occupancy::new(1, 4));
}

#[tokio::test]
async fn reservation_and_boarding_go_through_the_guard() {
    let (sink, _log) = LogSink::memory();
    let pier = Pier::new(5, sink);

    let mut guard = pier.lock().await;
    for _ in 0..4 {
        guard.join(Category::Serf);
    }
    let kind = guard.try_reserve(Category::Serf).unwrap();
    assert_eq!(guard.counts().grouped(), Occupancy::new(0, 4));
    guard.finalize(kind).unwrap();
    assert_eq!(guard.counts().available(), Occupancy::default());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_recorders_never_share_a_number() {
    let (sink, log) = LogSink::memory();
    let pier = Arc::new(Pier::new(5, sink));

    let mut tasks = Vec::new();
    for index in 1..=8 {
        let pier = Arc::clone(&pier);
        tasks.push(tokio::spawn(async move {
            for _ in 0..25 {
                pier.lock().await.record(hacker(index), PierEvent::IsBack).unwrap();
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let seqs: Vec<u64> = log
        .lines()
        .iter()
        .map(|line| line.parse::<LogEntry>().unwrap().seq)
        .collect();
    let expected: Vec<u64> = (1..=200).collect();
    assert_eq!(seqs, expected);
    assert_eq!(pier.lock().await.events_logged(), 200);
}
