//! Date lexical shapes and canonical instant conversion.
//!
//! # Responsibility
//! - Decide whether a key or literal is date-like.
//! - Convert date literals into canonical UTC instants.
//!
//! # Invariants
//! - Decoder and encoder both call `is_date_field` / `is_date_like`; there is
//!   no second definition of "looks like a date".
//! - Canonical instants are UTC with millisecond precision, rendered with `Z`.
//! - Inside documents, naive literals (no zone) are read as UTC.
//! - The editor helpers read naive date-times as local wall-clock time, so
//!   `format_date_for_site(format_date_for_input(x))` returns `x` at minute
//!   precision.

use crate::logging::sanitize_message;
use chrono::{
    DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc,
};
use std::fmt::Display;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

/// Extension keys that always carry dates.
pub const DATE_FIELD_NAMES: &[&str] = &[
    "lastmod",
    "publishDate",
    "expiryDate",
    "lastModified",
    "updated",
    "modified",
];

const MAX_LOGGED_LITERAL_CHARS: usize = 40;

/// Lexical date shapes, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `2026-01-29`
    Date,
    /// `2026-01-29T16:55`, optional zone.
    DateTimeMinutes,
    /// `2026-01-29T16:55:00`, optional fraction and zone.
    DateTimeSeconds,
}

static DATE_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static DATE_TIME_MINUTES_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(?:Z|[+-]\d{2}:?\d{2})?$")
        .expect("valid date-time regex")
});
static DATE_TIME_SECONDS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:?\d{2})?$")
        .expect("valid timestamp regex")
});

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Returns the first lexical shape matching `value`.
pub fn date_shape(value: &str) -> Option<DateShape> {
    let value = value.trim();
    if DATE_ONLY_RE.is_match(value) {
        Some(DateShape::Date)
    } else if DATE_TIME_MINUTES_RE.is_match(value) {
        Some(DateShape::DateTimeMinutes)
    } else if DATE_TIME_SECONDS_RE.is_match(value) {
        Some(DateShape::DateTimeSeconds)
    } else {
        None
    }
}

pub fn is_date_like(value: &str) -> bool {
    date_shape(value).is_some()
}

/// Returns whether `key` names a date field regardless of its literal.
pub fn is_date_field(key: &str) -> bool {
    key == "date" || DATE_FIELD_NAMES.contains(&key)
}

/// Parses a date literal into a canonical instant, reading naive literals
/// as UTC.
///
/// Accepts RFC 3339, offsets with or without colon, minute precision, a space
/// instead of `T`, naive date-times and plain dates.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    parse_instant_in(value, &Utc)
}

/// Like `parse_instant`, but reads naive date-times as wall-clock time in
/// `zone`. Plain dates stay UTC midnight.
pub fn parse_instant_in<Tz: TimeZone>(value: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(canonical(parsed.with_timezone(&Utc)));
    }

    let zoned = match value.strip_suffix(['Z', 'z']) {
        Some(head) => format!("{head}+0000"),
        None => value.to_string(),
    };
    for format in ZONED_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(&zoned, format) {
            return Some(canonical(parsed.with_timezone(&Utc)));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            // Wall-clock times skipped by a DST jump have no local reading.
            let instant = zone
                .from_local_datetime(&parsed)
                .earliest()
                .map(|local| local.with_timezone(&Utc))
                .unwrap_or_else(|| parsed.and_utc());
            return Some(canonical(instant));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Parses `value`, substituting the current instant when it is not a date.
pub fn normalize_or_now(value: &str) -> DateTime<Utc> {
    or_now(parse_instant(value), value)
}

fn or_now(parsed: Option<DateTime<Utc>>, value: &str) -> DateTime<Utc> {
    match parsed {
        Some(instant) => instant,
        None => {
            warn!(
                "event=date_fallback module=matter status=degraded literal={}",
                sanitize_message(value, MAX_LOGGED_LITERAL_CHARS)
            );
            now_instant()
        }
    }
}

/// Truncates an instant to the canonical millisecond precision.
pub fn canonical(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(3)
}

pub fn now_instant() -> DateTime<Utc> {
    canonical(Utc::now())
}

/// Renders the canonical string form, e.g. `2024-01-01T00:00:00.000Z`.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Canonical string for a date literal found in a document.
pub fn canonical_literal(value: &str) -> String {
    format_instant(&normalize_or_now(value))
}

/// Normalizes an editor date value to the form written into front matter.
pub fn format_date_for_site(value: &str) -> String {
    format_date_for_site_in(value, &Local)
}

pub fn format_date_for_site_in<Tz: TimeZone>(value: &str, zone: &Tz) -> String {
    format_instant(&or_now(parse_instant_in(value, zone), value))
}

/// Renders a date literal as a local `YYYY-MM-DDTHH:MM` editor input value.
pub fn format_date_for_input(value: &str) -> String {
    format_date_for_input_in(value, &Local)
}

pub fn format_date_for_input_in<Tz>(value: &str, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    or_now(parse_instant_in(value, zone), value)
        .with_timezone(zone)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{
        canonical_literal, date_shape, format_date_for_input, format_date_for_input_in,
        format_date_for_site_in, format_instant, is_date_field, is_date_like, normalize_or_now,
        parse_instant, DateShape,
    };
    use chrono::{FixedOffset, TimeZone, Utc};

    fn instant(value: &str) -> String {
        format_instant(&parse_instant(value).expect("literal should parse"))
    }

    #[test]
    fn shapes_are_checked_in_priority_order() {
        assert_eq!(date_shape("2026-01-29"), Some(DateShape::Date));
        assert_eq!(
            date_shape("2026-01-29T16:55"),
            Some(DateShape::DateTimeMinutes)
        );
        assert_eq!(
            date_shape("2026-01-29T16:55:00.123+08:00"),
            Some(DateShape::DateTimeSeconds)
        );
        assert_eq!(date_shape("29/01/2026"), None);
        assert_eq!(date_shape("2026-01-29 is the day"), None);
    }

    #[test]
    fn date_field_names_are_exact() {
        assert!(is_date_field("lastmod"));
        assert!(is_date_field("publishDate"));
        assert!(!is_date_field("publishdate"));
        assert!(!is_date_like("v1.2.3"));
    }

    #[test]
    fn parses_supported_literals_to_utc() {
        assert_eq!(instant("2024-01-01"), "2024-01-01T00:00:00.000Z");
        assert_eq!(instant("2026-01-29T14:30"), "2026-01-29T14:30:00.000Z");
        assert_eq!(
            instant("2026-01-29T14:30:00+08:00"),
            "2026-01-29T06:30:00.000Z"
        );
        assert_eq!(instant("2026-01-29T14:30:00+0800"), "2026-01-29T06:30:00.000Z");
        assert_eq!(instant("2026-01-29T14:30Z"), "2026-01-29T14:30:00.000Z");
        assert_eq!(
            instant("2026-01-29T14:30:00.123456789Z"),
            "2026-01-29T14:30:00.123Z"
        );
        assert_eq!(instant("2026-01-29 14:30:00"), "2026-01-29T14:30:00.000Z");
    }

    #[test]
    fn unparseable_literal_falls_back_to_now() {
        let before = Utc::now() - chrono::Duration::seconds(1);
        let value = normalize_or_now("next tuesday");
        assert!(value >= before);
        assert!(parse_instant("").is_none());
    }

    #[test]
    fn canonical_form_uses_millis_and_z() {
        let value = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        assert_eq!(format_instant(&value), "2024-05-06T07:08:09.000Z");
    }

    #[test]
    fn input_format_is_minute_precision() {
        let value = format_date_for_input("2024-05-06T07:08:09Z");
        assert_eq!(value.len(), 16);
        assert_eq!(&value[10..11], "T");
    }

    #[test]
    fn editor_round_trip_keeps_instant_in_offset_zones() {
        let shanghai = FixedOffset::east_opt(8 * 3600).unwrap();
        let input = format_date_for_input_in("2024-05-06T07:08:00.000Z", &shanghai);
        assert_eq!(input, "2024-05-06T15:08");
        assert_eq!(
            format_date_for_site_in(&input, &shanghai),
            "2024-05-06T07:08:00.000Z"
        );

        let pacific = FixedOffset::west_opt(7 * 3600).unwrap();
        let input = format_date_for_input_in("2024-05-06T03:30:00.000Z", &pacific);
        assert_eq!(input, "2024-05-05T20:30");
        assert_eq!(
            format_date_for_site_in(&input, &pacific),
            "2024-05-06T03:30:00.000Z"
        );
    }

    #[test]
    fn editor_site_format_keeps_explicit_zones_and_plain_dates() {
        let shanghai = FixedOffset::east_opt(8 * 3600).unwrap();
        assert_eq!(
            format_date_for_site_in("2024-05-06T07:08:00Z", &shanghai),
            "2024-05-06T07:08:00.000Z"
        );
        assert_eq!(
            format_date_for_site_in("2024-05-06", &shanghai),
            "2024-05-06T00:00:00.000Z"
        );
    }

    #[test]
    fn document_literals_stay_utc() {
        assert_eq!(canonical_literal("2026-01-29T14:30"), "2026-01-29T14:30:00.000Z");
    }
}
