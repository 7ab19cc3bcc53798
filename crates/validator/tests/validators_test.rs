//! Satisfaction tables for every built-in validator.
//!
//! Each table runs against both the struct literal and the `valid_*`
//! factory, which must behave identically.

#![cfg(all(feature = "temporal", feature = "json"))]

use regex::Regex;
use rstest::rstest;
use sieve_validator::prelude::*;

// ============================================================================
// REQUIRED
// ============================================================================

#[rstest]
#[case::nil_data(Value::Nil, false)]
#[case::non_empty_string(Value::from("Testing"), true)]
#[case::empty_string(Value::from(""), false)]
#[case::true_boolean(Value::from(true), true)]
#[case::false_boolean(Value::from(false), false)]
#[case::positive_integer(Value::from(1), true)]
#[case::negative_integer(Value::from(-1), true)]
#[case::zero_integer(Value::from(0), false)]
#[case::current_time(Value::from(chrono::Utc::now()), true)]
#[case::zero_time(Value::from(Value::ZERO_TIME), false)]
#[case::unix_epoch(Value::from(chrono::DateTime::<chrono::Utc>::UNIX_EPOCH), true)]
#[case::empty_seq(Value::from(Vec::<i32>::new()), false)]
#[case::empty_map(Value::Map(indexmap::IndexMap::new()), true)]
#[case::function(Value::opaque(|| {}), true)]
fn required(
    #[values(Required, valid_required())] validator: Required,
    #[case] input: Value,
    #[case] expected: bool,
) {
    assert_eq!(validator.is_satisfied(&input), expected, "input = {input:?}");
}

// ============================================================================
// MIN / MAX
// ============================================================================

#[rstest]
#[case::above_min(Value::from(11), true)]
#[case::equal_min(Value::from(10), true)]
#[case::below_min(Value::from(9), false)]
#[case::not_an_int(Value::from(true), false)]
fn min(
    #[values(Min { min: 10 }, valid_min(10))] validator: Min,
    #[case] input: Value,
    #[case] expected: bool,
) {
    assert_eq!(validator.is_satisfied(&input), expected, "input = {input:?}");
}

#[rstest]
#[case::below_max(Value::from(9), true)]
#[case::equal_max(Value::from(10), true)]
#[case::above_max(Value::from(11), false)]
#[case::not_an_int(Value::from(true), false)]
fn max(
    #[values(Max { max: 10 }, valid_max(10))] validator: Max,
    #[case] input: Value,
    #[case] expected: bool,
) {
    assert_eq!(validator.is_satisfied(&input), expected, "input = {input:?}");
}

// ============================================================================
// RANGE
// ============================================================================

#[rstest]
#[case::inside(50, true)]
#[case::equal_min(10, true)]
#[case::equal_max(100, true)]
#[case::below_min(9, false)]
#[case::above_max(101, false)]
fn range(
    #[values(Range { min: Min { min: 10 }, max: Max { max: 100 } }, valid_range(10, 100))]
    validator: Range,
    #[case] input: i64,
    #[case] expected: bool,
) {
    assert_eq!(validator.is_satisfied_by(input), expected);
}

#[rstest]
#[case::equal(10, true)]
#[case::below(9, false)]
#[case::above(11, false)]
fn range_with_equal_bounds(
    #[values(Range { min: Min { min: 10 }, max: Max { max: 10 } }, valid_range(10, 10))]
    validator: Range,
    #[case] input: i64,
    #[case] expected: bool,
) {
    assert_eq!(validator.is_satisfied_by(input), expected);
}

#[rstest]
fn range_with_swapped_bounds_is_never_satisfied(
    #[values(Range { min: Min { min: 100 }, max: Max { max: 10 } }, valid_range(100, 10))]
    validator: Range,
    #[values(50, 100, 10, 9, 101, 0, -1)] input: i64,
) {
    assert!(!validator.is_satisfied_by(input));
}

// ============================================================================
// SIZES
// ============================================================================

#[rstest]
#[case::two_chars(Value::from("12"), true)]
#[case::three_chars(Value::from("123"), true)]
#[case::two_elements(Value::from(vec![1, 2]), true)]
#[case::three_elements(Value::from(vec![1, 2, 3]), true)]
#[case::empty_string(Value::from(""), false)]
#[case::one_wide_char(Value::from("手"), false)]
#[case::empty_seq(Value::from(Vec::<i32>::new()), false)]
#[case::nil(Value::Nil, false)]
fn min_size(
    #[values(MinSize { min: 2 }, valid_min_size(2))] validator: MinSize,
    #[case] input: Value,
    #[case] expected: bool,
) {
    assert_eq!(validator.is_satisfied(&input), expected, "input = {input:?}");
}

#[rstest]
#[case::empty_string(Value::from(""), true)]
#[case::two_chars(Value::from("12"), true)]
#[case::three_wide_chars(Value::from("ルビー"), true)]
#[case::empty_seq(Value::from(Vec::<i32>::new()), true)]
#[case::two_elements(Value::from(vec![1, 2]), true)]
#[case::three_elements(Value::from(vec![1, 2, 3]), true)]
#[case::four_chars(Value::from("1234"), false)]
#[case::four_elements(Value::from(vec![1, 2, 3, 4]), false)]
fn max_size(
    #[values(MaxSize { max: 3 }, valid_max_size(3))] validator: MaxSize,
    #[case] input: Value,
    #[case] expected: bool,
) {
    assert_eq!(validator.is_satisfied(&input), expected, "input = {input:?}");
}

#[rstest]
#[case::two_chars(Value::from("12"), true)]
#[case::two_wide_chars(Value::from("火箭"), true)]
#[case::two_elements(Value::from(vec![1, 2]), true)]
#[case::three_chars(Value::from("123"), false)]
#[case::three_elements(Value::from(vec![1, 2, 3]), false)]
#[case::one_char(Value::from("1"), false)]
#[case::one_element(Value::from(vec![1]), false)]
#[case::nil(Value::Nil, false)]
fn length(
    #[values(Length { length: 2 }, valid_length(2))] validator: Length,
    #[case] input: Value,
    #[case] expected: bool,
) {
    assert_eq!(validator.is_satisfied(&input), expected, "input = {input:?}");
}

// ============================================================================
// MATCH
// ============================================================================

fn abc_digits() -> Regex {
    Regex::new(r"[abc]{3}\d*").unwrap()
}

#[rstest]
#[case::matches("bca123", true)]
#[case::too_few_letters("bc123", false)]
#[case::empty("", false)]
fn matches(
    #[values(Match { pattern: abc_digits() }, valid_match(abc_digits()))] validator: Match,
    #[case] input: &str,
    #[case] expected: bool,
) {
    assert_eq!(validator.is_satisfied_by(input), expected);
}

// ============================================================================
// CONTRACT
// ============================================================================

fn all_validators() -> Vec<Box<dyn Validator>> {
    vec![
        Box::new(valid_required()),
        Box::new(valid_min(10)),
        Box::new(valid_max(10)),
        Box::new(valid_range(10, 100)),
        Box::new(valid_range(100, 10)),
        Box::new(valid_min_size(2)),
        Box::new(valid_max_size(3)),
        Box::new(valid_length(2)),
        Box::new(valid_match(abc_digits())),
        Box::new(valid_email()),
    ]
}

fn odd_inputs() -> Vec<Value> {
    vec![
        Value::Nil,
        Value::opaque(|| {}),
        Value::opaque(std::sync::Mutex::new(0_u8)),
        Value::Float(f64::NAN),
        Value::Float(-0.0),
        Value::Int(i64::MIN),
        Value::Int(i64::MAX),
        Value::from("\u{0}\u{FFFF}"),
        Value::from(vec![Value::Nil, Value::from(vec![Value::Nil])]),
        Value::from(serde_json::json!({"nested": {"deep": [1, "two", null]}})),
        Value::from(chrono::DateTime::<chrono::Utc>::MAX_UTC),
    ]
}

#[test]
fn every_validator_is_total_over_odd_inputs() {
    for validator in all_validators() {
        for input in odd_inputs() {
            let first = validator.is_satisfied(&input);
            let second = validator.is_satisfied(&input);
            assert_eq!(first, second, "{validator:?} is not idempotent on {input:?}");
            assert_eq!(validator.validate(&input).is_ok(), first);
        }
    }
}

#[test]
fn validators_are_shared_across_threads() {
    let validators = std::sync::Arc::new(all_validators());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validators = std::sync::Arc::clone(&validators);
            std::thread::spawn(move || {
                validators
                    .iter()
                    .map(|v| v.is_satisfied(&Value::Int(10 + i)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let results = handle.join().unwrap();
        let expected: Vec<bool> = all_validators()
            .iter()
            .map(|v| v.is_satisfied(&Value::Int(10 + i as i64)))
            .collect();
        assert_eq!(results, expected);
    }
}
