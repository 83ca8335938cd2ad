// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::audit::{audit, AuditOptions};
use crate::delay::{FixedDelay, RandomDelay};
use std::time::Duration;

fn config(values: [i64; 6]) -> HarborConfig {
    let [a, b, c, d, e, f] = values;
    HarborConfig::new(a, b, c, d, e, f).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn everyone_crosses_in_the_smallest_scenario() {
    let config = config([4, 0, 0, 0, 20, 5]);
    let options = AuditOptions::for_config(&config);
    let (sink, log) = LogSink::memory();

    let report = tokio::time::timeout(Duration::from_secs(10), run(config, sink, RandomDelay))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(report.departed, Occupancy::new(4, 4));
    assert_eq!(report.final_counts, PierCounts::default());
    assert!(report.clean_shutdown);
    assert_eq!(report.events, log.len() as u64);

    let audited = audit(&log.text(), &options).unwrap();
    assert_eq!(audited.groups(), 2);
    assert!(
        (audited.same_category_groups == 2 && audited.mixed_groups == 0)
            || (audited.same_category_groups == 0 && audited.mixed_groups == 2),
        "unexpected groups: {audited:?}"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn deterministic_delays_still_conserve_travelers() {
    let config = config([6, 1, 2, 1, 20, 5]);
    let options = AuditOptions::for_config(&config);
    let (sink, log) = LogSink::memory();

    let report = run(config, sink, FixedDelay::Longest).await.unwrap();

    assert_eq!(report.departed, Occupancy::new(6, 6));
    let audited = audit(&log.text(), &options).unwrap();
    assert_eq!(audited.starts, Occupancy::new(6, 6));
    assert_eq!(audited.departures, Occupancy::new(6, 6));
}

#[tokio::test]
async fn shutdown_refuses_travelers_left_on_the_pier() {
    let (sink, _log) = LogSink::memory();
    let harbor = Harbor::new(config([2, 0, 0, 0, 20, 5]), sink, FixedDelay::Shortest);
    harbor.pier().lock().await.join(Category::Hacker);

    let err = harbor.shutdown(Occupancy::default()).await.unwrap_err();
    assert!(matches!(err, HarborError::Invariant(_)));
}

#[tokio::test]
async fn shutdown_of_unused_harbor_is_clean() {
    let (sink, _log) = LogSink::memory();
    let harbor = Harbor::new(config([2, 0, 0, 0, 20, 5]), sink, FixedDelay::Shortest);

    let report = harbor.shutdown(Occupancy::default()).await.unwrap();
    assert_eq!(report.events, 0);
    assert!(report.clean_shutdown);
}
