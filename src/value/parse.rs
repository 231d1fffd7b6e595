//! Classification of raw text into scalar variants.
//!
//! Precedence is fixed: integer, then float, then timestamp, then text. Numbers use
//! invariant syntax (`.` as the decimal separator, no grouping). Timestamps follow a
//! fixed calendar convention chosen through [`ParseConfig`] instead of the ambient
//! locale, so classification is identical on every machine.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::Scalar;
use crate::error::ConfigError;

/// Environment variable consulted by [`DateOrder::from_env`].
pub const DATE_ORDER_ENV: &str = "ORDLIST_DATE_ORDER";

/// Date-time shapes carrying an explicit numeric offset that RFC 3339 rejects.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%z",
];

/// ISO date-time shapes without an offset. Interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// English month-name dates, independent of [`DateOrder`].
const MONTH_NAME_FORMATS: &[&str] = &[
    "%d %b %Y",
    "%d %B %Y",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
];

/// Time suffixes accepted after a separated date.
const TIME_SUFFIXES: &[&str] = &["%H:%M:%S", "%H:%M"];

const TIME_OF_DAY_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Two-digit years up to this value fall in the 2000s; larger ones in the 1900s.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 49;

/// How ambiguous separated numeric dates such as `01/02/2024` are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateOrder {
    /// `dd/mm/yyyy`
    #[default]
    DayFirst,
    /// `mm/dd/yyyy`
    MonthFirst,
    /// `yyyy/mm/dd`
    YearFirst,
}

impl DateOrder {
    /// Every order, default first.
    pub const ALL: [DateOrder; 3] = [Self::DayFirst, Self::MonthFirst, Self::YearFirst];

    /// Returns the short name used on the command line.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::DayFirst => "dmy",
            Self::MonthFirst => "mdy",
            Self::YearFirst => "ymd",
        }
    }

    /// Reads the date order from `ORDLIST_DATE_ORDER`.
    ///
    /// Returns `Ok(None)` when the variable is unset or empty.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        match std::env::var(DATE_ORDER_ENV) {
            Ok(value) if !value.trim().is_empty() => value.parse().map(Some),
            _ => Ok(None),
        }
    }

    fn date_formats(self) -> &'static [&'static str] {
        match self {
            Self::DayFirst => &["%d/%m/%Y", "%d.%m.%Y", "%d-%m-%Y"],
            Self::MonthFirst => &["%m/%d/%Y", "%m.%d.%Y", "%m-%d-%Y"],
            Self::YearFirst => &["%Y/%m/%d", "%Y.%m.%d"],
        }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for DateOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dmy" | "day-first" => Ok(Self::DayFirst),
            "mdy" | "month-first" => Ok(Self::MonthFirst),
            "ymd" | "year-first" => Ok(Self::YearFirst),
            _ => Err(ConfigError::UnknownDateOrder(s.to_string())),
        }
    }
}

/// Settings for turning raw text into a [`UniversalValue`](super::UniversalValue).
///
/// # Example
///
/// ```
/// use ordlist::{DateOrder, ParseConfig, UniversalValue, ValueKind};
///
/// let config = ParseConfig::builder()
///     .date_order(DateOrder::MonthFirst)
///     .build();
///
/// let value = UniversalValue::parse_with("02/01/2024", &config);
/// assert_eq!(value.kind(), ValueKind::Timestamp);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseConfig {
    /// Reading of ambiguous separated dates.
    ///
    /// Default: [`DateOrder::DayFirst`]
    pub date_order: DateOrder,

    /// Whether a bare time of day (`14:30`) is a timestamp.
    ///
    /// Bare times are anchored to 1970-01-01 UTC so that classification does not
    /// depend on the current date.
    ///
    /// Default: `false`
    pub accept_time_of_day: bool,
}

impl ParseConfig {
    /// Returns a builder starting from the default settings.
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder::new()
    }
}

/// Builder for [`ParseConfig`].
#[derive(Debug, Clone, Default)]
pub struct ParseConfigBuilder {
    config: ParseConfig,
}

impl ParseConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how ambiguous separated dates are read.
    #[must_use]
    pub fn date_order(mut self, order: DateOrder) -> Self {
        self.config.date_order = order;
        self
    }

    /// Accepts bare times of day as timestamps.
    #[must_use]
    pub fn accept_time_of_day(mut self, accept: bool) -> Self {
        self.config.accept_time_of_day = accept;
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> ParseConfig {
        self.config
    }
}

/// Classifies already-trimmed text.
pub(super) fn classify(text: &str, config: &ParseConfig) -> Scalar {
    if let Ok(value) = text.parse::<i64>() {
        return Scalar::Integer(value);
    }

    if let Some(value) = parse_float(text) {
        return Scalar::Float(value);
    }

    if let Some(instant) = parse_timestamp(text, config) {
        return Scalar::Timestamp(instant);
    }

    Scalar::Text
}

/// Returns true when some configuration classifies `text` as `scalar`.
pub(super) fn admits(text: &str, scalar: Scalar) -> bool {
    DateOrder::ALL.into_iter().any(|date_order| {
        [false, true].into_iter().any(|accept_time_of_day| {
            let config = ParseConfig {
                date_order,
                accept_time_of_day,
            };
            classify(text, &config) == scalar
        })
    })
}

/// Invariant float syntax. Non-finite results are rejected: `nan` has no equality
/// and infinities have no portable spelling.
fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_timestamp(text: &str, config: &ParseConfig) -> Option<DateTime<Utc>> {
    parse_dated(text, config, YearDigits::Four)
        .or_else(|| parse_dated(text, config, YearDigits::Two))
        .or_else(|| {
            if config.accept_time_of_day {
                parse_time_of_day(text)
            } else {
                None
            }
        })
}

/// Tries every calendar shape whose year field has the given width.
fn parse_dated(text: &str, config: &ParseConfig, year: YearDigits) -> Option<DateTime<Utc>> {
    if year == YearDigits::Four {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text)
            && spells_full_year(text, dt.year())
        {
            return Some(dt.with_timezone(&Utc));
        }

        for fmt in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(text, fmt)
                && spells_full_year(text, dt.year())
            {
                return Some(dt.with_timezone(&Utc));
            }
        }
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(text, &year.format(fmt))
            && let Some(ndt) = year.resolve_datetime(text, ndt)
        {
            return Some(ndt.and_utc());
        }
    }

    if let Some(instant) = parse_calendar(text, &[ISO_DATE_FORMAT], year) {
        return Some(instant);
    }
    if let Some(instant) = parse_calendar(text, config.date_order.date_formats(), year) {
        return Some(instant);
    }
    // Four-digit-year-first slashes are unambiguous under every order.
    if year == YearDigits::Four
        && config.date_order != DateOrder::YearFirst
        && let Some(instant) = parse_calendar(text, DateOrder::YearFirst.date_formats(), year)
    {
        return Some(instant);
    }

    parse_calendar(text, MONTH_NAME_FORMATS, year)
}

/// Date formats, each alone or followed by a time from [`TIME_SUFFIXES`].
fn parse_calendar(text: &str, formats: &[&str], year: YearDigits) -> Option<DateTime<Utc>> {
    for date_fmt in formats {
        let date_fmt = year.format(date_fmt);
        if let Ok(date) = NaiveDate::parse_from_str(text, &date_fmt)
            && let Some(date) = year.resolve(text, date)
        {
            return midnight(date);
        }
        for time_fmt in TIME_SUFFIXES {
            let fmt = format!("{date_fmt} {time_fmt}");
            if let Ok(ndt) = NaiveDateTime::parse_from_str(text, &fmt)
                && let Some(ndt) = year.resolve_datetime(text, ndt)
            {
                return Some(ndt.and_utc());
            }
        }
    }
    None
}

fn parse_time_of_day(text: &str) -> Option<DateTime<Utc>> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    TIME_OF_DAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
        .map(|time| epoch.and_time(time).and_utc())
}

/// Width of the year field a format family is tried with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearDigits {
    /// `%Y`, accepted only when the text spells at least four digits.
    Four,
    /// `%y`, expanded around [`TWO_DIGIT_YEAR_PIVOT`].
    Two,
}

impl YearDigits {
    fn format(self, fmt: &str) -> Cow<'_, str> {
        match self {
            Self::Four => Cow::Borrowed(fmt),
            Self::Two => Cow::Owned(fmt.replace("%Y", "%y")),
        }
    }

    fn resolve(self, text: &str, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Four => spells_full_year(text, date.year()).then_some(date),
            Self::Two if spells_two_digit_year(text, date.year()) => {
                expand_two_digit_year(date)
            }
            Self::Two => None,
        }
    }

    fn resolve_datetime(self, text: &str, ndt: NaiveDateTime) -> Option<NaiveDateTime> {
        self.resolve(text, ndt.date())
            .map(|date| date.and_time(ndt.time()))
    }
}

/// True when `text` writes `year` with four or more digits. `%Y` also matches one
/// to three digits, which would read `15/01/24` as the year 24.
fn spells_full_year(text: &str, year: i32) -> bool {
    text.split(|c: char| !c.is_ascii_digit())
        .any(|run| run.len() >= 4 && run.parse::<i32>() == Ok(year))
}

/// `%y` also matches a single digit; require the year as written to be two digits.
fn spells_two_digit_year(text: &str, year: i32) -> bool {
    let yy = year.rem_euclid(100);
    text.split(|c: char| !c.is_ascii_digit())
        .any(|run| run.len() == 2 && run.parse::<i32>() == Ok(yy))
}

/// Re-centers a `%y` year on [`TWO_DIGIT_YEAR_PIVOT`].
fn expand_two_digit_year(date: NaiveDate) -> Option<NaiveDate> {
    let yy = date.year().rem_euclid(100);
    let century = if yy <= TWO_DIGIT_YEAR_PIVOT { 2000 } else { 1900 };
    date.with_year(century + yy)
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|ndt| ndt.and_utc())
}
