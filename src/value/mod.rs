//! Tagged scalar values classified from user input.
//!
//! A [`UniversalValue`] remembers the exact (trimmed) text it was built from and a
//! parsed payload. Display always uses the raw text; equality, ordering
//! and hashing use the payload.

mod parse;

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use parse::{
    DATE_ORDER_ENV, DateOrder, ParseConfig, ParseConfigBuilder, TWO_DIGIT_YEAR_PIVOT,
};

/// Discriminant of a [`UniversalValue`].
///
/// Variants are declared in rank order: when two values of different categories
/// are compared (and they are not both numeric), the lower rank sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// 64-bit signed integer
    Integer,
    /// Finite 64-bit float
    Float,
    /// Calendar instant, normalized to UTC
    Timestamp,
    /// Anything else
    Text,
}

impl ValueKind {
    /// Returns the type name of this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::Timestamp => "Timestamp",
            Self::Text => "Text",
        }
    }

    /// Returns true for `Integer` and `Float`.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Parsed payload. `Text` has none: its content is the raw form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scalar {
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
    Text,
}

impl Scalar {
    fn kind(self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Text => ValueKind::Text,
        }
    }

    /// Integers widen to f64 for every numeric comparison, mixed or not.
    #[allow(clippy::cast_precision_loss)]
    fn as_number(self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(value as f64),
            Self::Float(value) => Some(value),
            _ => None,
        }
    }
}

/// An immutable scalar value: integer, float, timestamp or text.
///
/// Classification happens once, in [`UniversalValue::parse`]. The value keeps the
/// trimmed input for display.
///
/// # Ordering
///
/// - two numeric values (integer or float, mixed allowed) compare by numeric value
/// - two timestamps compare by instant
/// - otherwise by kind rank `Integer < Float < Timestamp < Text`, then by raw text
///
/// Equality agrees with ordering: `2` equals `2.0`, two timestamps written
/// differently but naming the same instant are equal, and text equals text only
/// when the raw forms are identical.
///
/// # Example
///
/// ```
/// use ordlist::{UniversalValue, ValueKind};
///
/// let two = UniversalValue::parse("2");
/// let two_point_oh = UniversalValue::parse(" 2.0 ");
///
/// assert_eq!(two.kind(), ValueKind::Integer);
/// assert_eq!(two_point_oh.kind(), ValueKind::Float);
/// assert_eq!(two, two_point_oh);
/// assert_eq!(two_point_oh.to_string(), "2.0");
/// ```
#[derive(Clone)]
pub struct UniversalValue {
    raw: String,
    scalar: Scalar,
}

impl UniversalValue {
    /// Classifies `text` with the default [`ParseConfig`].
    ///
    /// Never fails: text that is not a number or a timestamp becomes `Text`.
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, &ParseConfig::default())
    }

    /// Classifies `text` with an explicit [`ParseConfig`].
    pub fn parse_with(text: &str, config: &ParseConfig) -> Self {
        let raw = text.trim();
        let scalar = parse::classify(raw, config);

        #[cfg(feature = "logging")]
        log::trace!("classified {raw:?} as {}", scalar.kind());

        Self {
            raw: raw.to_string(),
            scalar,
        }
    }

    /// Returns the variant of this value.
    pub fn kind(&self) -> ValueKind {
        self.scalar.kind()
    }

    /// Returns the trimmed input text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the raw text as an owned string.
    pub fn to_display_string(&self) -> String {
        self.raw.clone()
    }

    /// Returns true for integer and float values.
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Returns the value as an i64 if this is an `Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self.scalar {
            Scalar::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value as an f64 if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self.scalar {
            Scalar::Float(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the numeric value of an `Integer` or `Float`, widened to f64.
    pub fn as_number(&self) -> Option<f64> {
        self.scalar.as_number()
    }

    /// Returns the instant if this is a `Timestamp`.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self.scalar {
            Scalar::Timestamp(instant) => Some(instant),
            _ => None,
        }
    }

    /// Returns the text if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self.scalar {
            Scalar::Text => Some(&self.raw),
            _ => None,
        }
    }
}

impl PartialEq for UniversalValue {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.scalar.as_number(), other.scalar.as_number()) {
            return a == b;
        }
        match (self.scalar, other.scalar) {
            (Scalar::Timestamp(a), Scalar::Timestamp(b)) => a == b,
            (Scalar::Text, Scalar::Text) => self.raw == other.raw,
            // Identical raw text never classifies into two categories under one config.
            _ => false,
        }
    }
}

impl Eq for UniversalValue {}

impl Ord for UniversalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        if let (Some(a), Some(b)) = (self.scalar.as_number(), other.scalar.as_number()) {
            // Both finite.
            return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        }
        if let (Scalar::Timestamp(a), Scalar::Timestamp(b)) = (self.scalar, other.scalar) {
            return a.cmp(&b);
        }
        self.kind()
            .cmp(&other.kind())
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for UniversalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for UniversalValue {
    #[allow(clippy::float_cmp)]
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(number) = self.scalar.as_number() {
            // -0.0 == 0.0
            let normalized = if number == 0.0 { 0.0 } else { number };
            0u8.hash(state);
            normalized.to_bits().hash(state);
            return;
        }
        match self.scalar {
            Scalar::Timestamp(instant) => {
                1u8.hash(state);
                instant.hash(state);
            }
            _ => {
                2u8.hash(state);
                self.raw.hash(state);
            }
        }
    }
}

impl fmt::Display for UniversalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for UniversalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind(), self.raw)
    }
}

impl FromStr for UniversalValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for UniversalValue {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for UniversalValue {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<i64> for UniversalValue {
    fn from(value: i64) -> Self {
        Self {
            raw: value.to_string(),
            scalar: Scalar::Integer(value),
        }
    }
}

/// Serialized as the raw text plus its classified payload.
impl Serialize for UniversalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        EncodedRef {
            raw: &self.raw,
            payload: Payload::from(self.scalar),
        }
        .serialize(serializer)
    }
}

/// Deserialized from raw text and payload. The payload must be one that some
/// [`ParseConfig`] produces for that text.
impl<'de> Deserialize<'de> for UniversalValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Encoded { raw, payload } = Encoded::deserialize(deserializer)?;
        let scalar = payload
            .into_scalar()
            .ok_or_else(|| D::Error::custom("timestamp out of range"))?;
        if !parse::admits(&raw, scalar) {
            return Err(D::Error::custom(format!(
                "payload {payload:?} does not match text {raw:?}"
            )));
        }
        Ok(Self { raw, scalar })
    }
}

#[derive(Serialize)]
#[serde(rename = "UniversalValue")]
struct EncodedRef<'a> {
    raw: &'a str,
    payload: Payload,
}

#[derive(Deserialize)]
#[serde(rename = "UniversalValue")]
struct Encoded {
    raw: String,
    payload: Payload,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum Payload {
    Integer(i64),
    Float(f64),
    Timestamp { seconds: i64, nanos: u32 },
    Text,
}

impl Payload {
    fn into_scalar(self) -> Option<Scalar> {
        Some(match self {
            Self::Integer(value) => Scalar::Integer(value),
            Self::Float(value) => Scalar::Float(value),
            Self::Timestamp { seconds, nanos } => {
                Scalar::Timestamp(DateTime::from_timestamp(seconds, nanos)?)
            }
            Self::Text => Scalar::Text,
        })
    }
}

impl From<Scalar> for Payload {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Integer(value) => Self::Integer(value),
            Scalar::Float(value) => Self::Float(value),
            Scalar::Timestamp(instant) => Self::Timestamp {
                seconds: instant.timestamp(),
                nanos: instant.timestamp_subsec_nanos(),
            },
            Scalar::Text => Self::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::DefaultHasher;

    fn v(text: &str) -> UniversalValue {
        UniversalValue::parse(text)
    }

    fn hash_of(value: &UniversalValue) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_parse_precedence() {
        assert_eq!(v("42").kind(), ValueKind::Integer);
        assert_eq!(v("3.25").kind(), ValueKind::Float);
        assert_eq!(v("2024-01-15").kind(), ValueKind::Timestamp);
        assert_eq!(v("hello").kind(), ValueKind::Text);
    }

    #[test]
    fn test_parse_trims_raw_form() {
        let value = v("  7  ");
        assert_eq!(value.kind(), ValueKind::Integer);
        assert_eq!(value.raw(), "7");
        assert_eq!(value.to_display_string(), "7");
    }

    #[test]
    fn test_empty_input_is_text() {
        let value = v("   ");
        assert_eq!(value.kind(), ValueKind::Text);
        assert_eq!(value.raw(), "");
    }

    #[test]
    fn test_display_keeps_raw_spelling() {
        assert_eq!(v("1e3").to_string(), "1e3");
        assert_eq!(v("+05").to_string(), "+05");
        assert_eq!(v("2024-01-15T10:30:00+02:00").to_string(), "2024-01-15T10:30:00+02:00");
    }

    #[test]
    fn test_accessors_are_variant_specific() {
        let int = v("42");
        assert_eq!(int.as_integer(), Some(42));
        assert_eq!(int.as_float(), None);
        assert_eq!(int.as_number(), Some(42.0));

        let float = v("2.5");
        assert_eq!(float.as_integer(), None);
        assert_eq!(float.as_float(), Some(2.5));

        let text = v("pear");
        assert_eq!(text.as_text(), Some("pear"));
        assert_eq!(text.as_number(), None);
        assert!(text.as_timestamp().is_none());

        assert!(v("2024-01-15").as_timestamp().is_some());
    }

    #[test]
    fn test_mixed_numeric_equality() {
        assert_eq!(v("2"), v("2.0"));
        assert_eq!(v("-0.0"), v("0"));
        assert_ne!(v("2"), v("2.5"));
    }

    #[test]
    fn test_text_never_equals_number() {
        assert_ne!(v("2"), v("two"));
        assert_ne!(v("2024-01-15"), v("hello"));
    }

    #[test]
    fn test_timestamp_equality_by_instant() {
        assert_eq!(v("2024-01-15"), v("2024-01-15T00:00:00"));
        assert_eq!(v("2024-01-15T12:00:00+02:00"), v("2024-01-15 10:00"));
    }

    #[test]
    fn test_category_rank_order() {
        let mut values = vec![v("zebra"), v("2024-01-15"), v("1.5"), v("7"), v("apple")];
        values.sort();
        let raws: Vec<&str> = values.iter().map(UniversalValue::raw).collect();
        assert_eq!(raws, ["1.5", "7", "2024-01-15", "apple", "zebra"]);
    }

    #[test]
    fn test_numeric_beats_rank_for_mixed_numbers() {
        assert!(v("10") > v("2.5"));
        assert!(v("1.5") < v("2"));
        assert_eq!(v("3").cmp(&v("3.0")), Ordering::Equal);
    }

    #[test]
    fn test_text_compares_by_code_point() {
        assert!(v("Zebra") < v("apple"));
        assert!(v("apple") < v("apples"));
        assert!(v("é") > v("z"));
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        assert_eq!(hash_of(&v("2")), hash_of(&v("2.0")));
        assert_eq!(hash_of(&v("0")), hash_of(&v("-0.0")));
        assert_eq!(
            hash_of(&v("2024-01-15")),
            hash_of(&v("2024-01-15T00:00:00Z"))
        );
    }

    #[test]
    fn test_from_conversions() {
        let parsed: UniversalValue = "12".parse().unwrap();
        assert_eq!(parsed, UniversalValue::from(12));
        assert_eq!(UniversalValue::from("x"), UniversalValue::from("x".to_string()));
        assert_eq!(UniversalValue::from(-3).raw(), "-3");
    }

    #[test]
    fn test_debug_shows_kind_and_raw() {
        assert_eq!(format!("{:?}", v("7")), "Integer(\"7\")");
        assert_eq!(format!("{:?}", v("hi")), "Text(\"hi\")");
    }

    #[test]
    fn test_kind_rank() {
        assert!(ValueKind::Integer < ValueKind::Float);
        assert!(ValueKind::Float < ValueKind::Timestamp);
        assert!(ValueKind::Timestamp < ValueKind::Text);
        assert!(ValueKind::Float.is_numeric());
        assert!(!ValueKind::Timestamp.is_numeric());
    }
}
