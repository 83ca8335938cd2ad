// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn parses_six_valid_values() {
    let config = HarborConfig::from_args(&["4", "100", "200", "300", "20", "5"]).unwrap();

    assert_eq!(config.person_count, 4);
    assert_eq!(config.hacker_gen_time, Duration::from_millis(100));
    assert_eq!(config.serf_gen_time, Duration::from_millis(200));
    assert_eq!(config.sail_time, Duration::from_millis(300));
    assert_eq!(config.check_pier, Duration::from_millis(20));
    assert_eq!(config.pier_capacity, 5);
}

#[test]
fn generation_time_follows_category() {
    let config = HarborConfig::new(2, 10, 20, 0, 20, 5).unwrap();
    assert_eq!(
        config.generation_time(Category::Hacker),
        Duration::from_millis(10)
    );
    assert_eq!(
        config.generation_time(Category::Serf),
        Duration::from_millis(20)
    );
}

#[parameterized(
    none = { &[] },
    five = { &["4", "0", "0", "0", "20"] },
    seven = { &["4", "0", "0", "0", "20", "5", "1"] },
)]
fn wrong_argument_count_is_rejected(args: &[&str]) {
    assert_eq!(
        HarborConfig::from_args(args),
        Err(ConfigError::ArgumentCount(args.len()))
    );
}

#[parameterized(
    word = { "four" },
    trailing_garbage = { "4x" },
    float = { "4.0" },
    empty = { "" },
)]
fn non_integer_is_rejected(value: &str) {
    let err = HarborConfig::from_args(&[value, "0", "0", "0", "20", "5"]).unwrap_err();
    assert!(matches!(err, ConfigError::NotAnInteger { name: "person count", .. }));
}

#[parameterized(
    person_count_too_small = { [0, 0, 0, 0, 20, 5] },
    person_count_negative = { [-2, 0, 0, 0, 20, 5] },
    hacker_gen_negative = { [2, -1, 0, 0, 20, 5] },
    serf_gen_negative = { [2, 0, -1, 0, 20, 5] },
    sail_negative = { [2, 0, 0, -1, 20, 5] },
    check_pier_below_floor = { [2, 0, 0, 0, 19, 5] },
    capacity_too_small = { [2, 0, 0, 0, 20, 4] },
)]
fn values_below_minimum_are_rejected(values: [i64; 6]) {
    let [a, b, c, d, e, f] = values;
    let err = HarborConfig::new(a, b, c, d, e, f).unwrap_err();
    assert!(matches!(err, ConfigError::TooSmall { .. }), "got {err:?}");
}

#[parameterized(
    hacker_gen = { [2, 2001, 0, 0, 20, 5] },
    serf_gen = { [2, 0, 2001, 0, 20, 5] },
    sail = { [2, 0, 0, 2001, 20, 5] },
    check_pier = { [2, 0, 0, 0, 2001, 5] },
    capacity_overflow = { [2, 0, 0, 0, 20, 5_000_000_000] },
)]
fn values_above_maximum_are_rejected(values: [i64; 6]) {
    let [a, b, c, d, e, f] = values;
    let err = HarborConfig::new(a, b, c, d, e, f).unwrap_err();
    assert!(matches!(err, ConfigError::TooLarge { .. }), "got {err:?}");
}

#[test]
fn odd_person_count_is_rejected() {
    assert_eq!(
        HarborConfig::new(3, 0, 0, 0, 20, 5),
        Err(ConfigError::OddPersonCount(3))
    );
}

#[test]
fn bounds_are_inclusive() {
    assert!(HarborConfig::new(2, 2000, 2000, 2000, 2000, 5).is_ok());
    assert!(HarborConfig::new(2, 0, 0, 0, 20, 5).is_ok());
}

#[test]
fn error_message_names_the_parameter() {
    let err = HarborConfig::new(2, 0, 0, 0, 10, 5).unwrap_err();
    assert_eq!(err.to_string(), "pier check time must be at least 20, got 10");
}
