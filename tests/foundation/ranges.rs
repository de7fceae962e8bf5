//! Integration tests for data ranges
//!
//! Tests parsing, formatting, and intersection of `DataRange`.

use itemalias_foundation::{DataRange, ErrorKind};
use proptest::prelude::*;

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn parse_empty_is_wildcard() {
    let r = DataRange::parse("").unwrap();
    assert!(r.is_wildcard());
    assert_eq!(r, DataRange::default());
}

#[test]
fn parse_open_bounds() {
    assert_eq!(DataRange::parse("5-").unwrap(), DataRange::new(5, DataRange::OPEN));
    assert_eq!(DataRange::parse("-5").unwrap(), DataRange::new(DataRange::OPEN, 5));
}

#[test]
fn parse_errors_name_the_input() {
    let err = DataRange::parse("red").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidDataRange(_)));
    assert_eq!(err.to_string(), "'red' is not a valid item data");
}

#[test]
fn reversed_range_is_rejected() {
    let err = DataRange::parse("9-3").unwrap_err();
    assert!(err.to_string().contains("9-3"));
}

// =============================================================================
// Intersection
// =============================================================================

#[test]
fn zero_and_wildcard() {
    let zero = DataRange::exact(0);
    assert!(zero.is_zero());
    assert_eq!(zero.intersect(DataRange::WILDCARD), Some(zero));
}

#[test]
fn open_ranges_overlap() {
    let low = DataRange::new(DataRange::OPEN, 6);
    let high = DataRange::new(4, DataRange::OPEN);
    assert_eq!(low.intersect(high), Some(DataRange::new(4, 6)));
}

#[test]
fn exceeds_block_limit() {
    assert!(DataRange::exact(16).exceeds(15));
    assert!(DataRange::new(3, 20).exceeds(15));
    assert!(!DataRange::new(DataRange::OPEN, 15).exceeds(15));
}

proptest! {
    #[test]
    fn parse_format_round_trip(a in 0i16..2000, b in 0i16..2000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let text = if lo == hi { lo.to_string() } else { format!("{lo}-{hi}") };
        prop_assert_eq!(DataRange::parse(&text).unwrap().to_string(), text);
    }

    #[test]
    fn intersection_is_contained(a in 0i16..50, b in 0i16..50, c in 0i16..50, d in 0i16..50) {
        let x = DataRange::new(a.min(b), a.max(b));
        let y = DataRange::new(c.min(d), c.max(d));
        if let Some(z) = x.intersect(y) {
            prop_assert!(z.min >= x.min && z.min >= y.min);
            prop_assert!(z.max <= x.max && z.max <= y.max);
            prop_assert!(z.min <= z.max);
        }
    }
}
