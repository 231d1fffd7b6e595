//! Classification, display and comparison of `UniversalValue`.

use std::cmp::Ordering;

use ordlist::{DateOrder, ParseConfig, UniversalValue, ValueKind};

fn v(text: &str) -> UniversalValue {
    UniversalValue::parse(text)
}

// ============================================================================
// Parse precedence
// ============================================================================

#[test]
fn test_parse_integer() {
    let value = v("42");
    assert_eq!(value.kind(), ValueKind::Integer);
    assert_eq!(value.as_integer(), Some(42));
}

#[test]
fn test_parse_float() {
    let value = v("3.25");
    assert_eq!(value.kind(), ValueKind::Float);
    assert_eq!(value.as_float(), Some(3.25));
}

#[test]
fn test_parse_timestamp() {
    let value = v("2024-01-15");
    assert_eq!(value.kind(), ValueKind::Timestamp);
    assert_eq!(
        value.as_timestamp().map(|instant| instant.to_rfc3339()),
        Some("2024-01-15T00:00:00+00:00".to_string())
    );
}

#[test]
fn test_parse_text() {
    let value = v("hello");
    assert_eq!(value.kind(), ValueKind::Text);
    assert_eq!(value.as_text(), Some("hello"));
}

#[test]
fn test_parse_trims() {
    let value = v("  7  ");
    assert_eq!(value.kind(), ValueKind::Integer);
    assert_eq!(value.raw(), "7");
}

/// Decimal commas are not part of the invariant number syntax.
#[test]
fn test_decimal_comma_is_text() {
    assert_eq!(v("3,14").kind(), ValueKind::Text);
}

#[test]
fn test_text_with_inner_spaces_is_kept() {
    let value = v("  hello   world ");
    assert_eq!(value.kind(), ValueKind::Text);
    assert_eq!(value.raw(), "hello   world");
}

#[test]
fn test_config_changes_only_date_reading() {
    let month_first = ParseConfig::builder()
        .date_order(DateOrder::MonthFirst)
        .build();

    let a = UniversalValue::parse_with("03/04/2024", &month_first);
    let b = v("03/04/2024");
    assert_eq!(a.kind(), ValueKind::Timestamp);
    assert_eq!(b.kind(), ValueKind::Timestamp);
    assert_ne!(a, b);
    assert!(a < b); // March 4 before April 3

    assert_eq!(UniversalValue::parse_with("42", &month_first), v("42"));
}

// ============================================================================
// Equality and ordering
// ============================================================================

#[test]
fn test_integer_equals_float() {
    assert_eq!(v("2"), v("2.0"));
    assert_eq!(v("2").cmp(&v("2.0")), Ordering::Equal);
}

#[test]
fn test_raw_differs_but_values_equal() {
    assert_eq!(v("10"), v("1e1"));
    assert_ne!(v("10").raw(), v("1e1").raw());
}

#[test]
fn test_rank_order() {
    assert!(v("999999") < v("1970-01-01"));
    assert!(v("0.5") < v("1970-01-01"));
    assert!(v("2999-12-31") < v("a"));
    assert!(v("-1") < v("text"));
}

#[test]
fn test_timestamps_compare_chronologically() {
    assert!(v("2023-12-31") < v("2024-01-01"));
    assert!(v("2024-01-01T23:59:59") < v("2024-01-02"));
}

#[test]
fn test_large_integers_compare_as_floats() {
    // 2^53 and 2^53 + 1 widen to the same f64.
    assert_eq!(v("9007199254740992"), v("9007199254740993"));
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_is_raw() {
    for raw in ["007", "3.140", "2024-1-5", "15/01/2024", "Hola"] {
        assert_eq!(v(raw).to_string(), raw);
        assert_eq!(v(raw).to_display_string(), raw);
    }
}

#[test]
fn test_kind_display() {
    assert_eq!(ValueKind::Timestamp.to_string(), "Timestamp");
    assert_eq!(v("x").kind().type_name(), "Text");
}

/// Two-digit years are read in the 1950-2049 window, not as the first century.
#[test]
fn test_two_digit_year_sorts_with_its_century() {
    let short = v("15/01/24");
    assert_eq!(short.kind(), ValueKind::Timestamp);
    assert_eq!(short, v("15/01/2024"));
    assert!(short > v("01/01/1999"));
    assert_eq!(v("24-01-15"), v("2024-01-15"));
    assert_eq!(v("01/01/75"), v("1975-01-01"));
}

#[test]
fn test_month_name_dates_are_timestamps() {
    let iso = v("2024-01-15");
    for raw in ["15 Jan 2024", "January 15, 2024", "15-Jan-2024"] {
        let value = v(raw);
        assert_eq!(value.kind(), ValueKind::Timestamp, "{raw}");
        assert_eq!(value, iso, "{raw}");
        assert_eq!(value.raw(), raw);
    }
    assert!(v("15 Jan 2024") < v("Feb 1, 2024"));
}
