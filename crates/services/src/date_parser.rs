//! Lenient date parsing for column detection and chart labels.
//!
//! Accepts the shapes people actually put in spreadsheets: ISO dates and
//! timestamps, RFC 2822, slash dates and a handful of month-name forms.
//! Anything with an explicit offset is normalised to UTC.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;
use shared::CellValue;
use std::fmt::Write;
use std::sync::OnceLock;

/// Label used when a value cannot be read as a date
pub const INVALID_DATE: &str = "Invalid Date";

pub const DEFAULT_LABEL_FORMAT: &str = "%-m/%-d/%Y";

const DATETIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d %b %Y",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

fn iso_pattern() -> &'static Regex {
    static ISO: OnceLock<Regex> = OnceLock::new();
    ISO.get_or_init(|| {
        Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[T ](\d{1,2}):(\d{2})(?::(\d{2})(?:\.(\d{1,9}))?)?\s*(Z|z|[+-]\d{2}:?\d{2})?)?$",
        )
        .expect("ISO date pattern is valid")
    })
}

/// Parse a string as a date, returning `None` when no known shape matches.
pub fn parse_date(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    parse_iso(s)
        .or_else(|| DateTime::parse_from_rfc2822(s).ok().map(|dt| dt.naive_utc()))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    let caps = iso_pattern().captures(s)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, num(2)?, num(3)?)?;

    let nanos = match caps.get(7) {
        Some(frac) => {
            let digits = frac.as_str();
            let scale = 10u32.pow(9 - digits.len() as u32);
            digits.parse::<u32>().ok()? * scale
        }
        None => 0,
    };
    let time = match caps.get(4) {
        Some(_) => NaiveTime::from_hms_nano_opt(num(4)?, num(5)?, num(6).unwrap_or(0), nanos)?,
        None => NaiveTime::MIN,
    };
    let naive = date.and_time(time);

    match caps.get(8).map(|m| m.as_str()) {
        None | Some("Z") | Some("z") => Some(naive),
        Some(offset) => {
            let sign = if offset.starts_with('-') { -1 } else { 1 };
            let digits: String = offset[1..].chars().filter(char::is_ascii_digit).collect();
            let hours: i32 = digits.get(0..2)?.parse().ok()?;
            let minutes: i32 = digits.get(2..4)?.parse().ok()?;
            let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;
            offset
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.naive_utc())
        }
    }
}

/// Read a cell as a point in time.
///
/// Text goes through [`parse_date`]; numbers are milliseconds since the Unix
/// epoch; empty cells have no date.
pub fn cell_date(value: &CellValue) -> Option<NaiveDateTime> {
    match value {
        CellValue::Text(s) => parse_date(s),
        CellValue::Number(ms) if ms.is_finite() => {
            DateTime::from_timestamp_millis(ms.trunc() as i64).map(|dt| dt.naive_utc())
        }
        _ => None,
    }
}

/// Render a date with a chrono strftime pattern.
///
/// An unusable pattern falls back to [`DEFAULT_LABEL_FORMAT`].
pub fn format_date(dt: &NaiveDateTime, pattern: &str) -> String {
    let items: Vec<Item> = StrftimeItems::new(pattern).collect();
    if !items.iter().any(|item| matches!(item, Item::Error)) {
        let mut out = String::new();
        if write!(out, "{}", dt.format_with_items(items.iter())).is_ok() {
            return out;
        }
    }
    tracing::debug!(pattern, "unusable date label format, using default");
    dt.format(DEFAULT_LABEL_FORMAT).to_string()
}

/// Chart label for a cell: its formatted date, or [`INVALID_DATE`].
pub fn date_label(value: &CellValue, pattern: &str) -> String {
    cell_date(value)
        .map(|dt| format_date(&dt, pattern))
        .unwrap_or_else(|| INVALID_DATE.to_string())
}
