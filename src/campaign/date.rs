// Calendar date formatting for campaign rows.
// Shows only the date part of a timestamp, in a locale-dependent order.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Shown when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Field order used for displaying a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// 3/1/2024
    #[default]
    Us,
    /// 2024-03-01
    Iso,
    /// 01/03/2024
    DayFirst,
}

impl DateStyle {
    /// Pick a style from a POSIX locale string such as `en_US.UTF-8`.
    pub fn from_locale(locale: &str) -> Self {
        let tag = locale.split(['.', '@']).next().unwrap_or_default();
        let mut parts = tag.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        let region = parts.next().unwrap_or_default();
        match (language, region) {
            ("C" | "POSIX", _) => DateStyle::Us,
            (_, "US" | "PH" | "BZ") => DateStyle::Us,
            (_, "SE" | "LT" | "CA" | "CN" | "JP" | "KR" | "TW" | "HU") => DateStyle::Iso,
            // Language-only tags take the order of the language's main region
            ("en", "") => DateStyle::Us,
            ("ja" | "zh" | "ko" | "sv" | "lt" | "hu", "") => DateStyle::Iso,
            _ => DateStyle::DayFirst,
        }
    }

    /// Style for the current process environment (`LC_ALL`, `LC_TIME`, then `LANG`).
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.is_empty())
            .map(|value| Self::from_locale(&value))
            .unwrap_or_default()
    }

    fn format(&self, date: NaiveDate) -> String {
        match self {
            DateStyle::Us => date.format("%-m/%-d/%Y").to_string(),
            DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
            DateStyle::DayFirst => date.format("%d/%m/%Y").to_string(),
        }
    }
}

/// Naive date-time layouts tried after the zoned forms.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse the calendar date out of a stored timestamp.
///
/// Accepts RFC 3339 and RFC 2822 (the date is taken in the timestamp's own
/// offset), naive date-times with or without seconds and with a `T` or space
/// separator, and bare `YYYY-MM-DD` dates. A trailing `Z` on a naive
/// date-time is read as UTC.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }

    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format a stored timestamp as a calendar date with no time component.
pub fn format_calendar_date(raw: &str, style: DateStyle) -> String {
    match parse_calendar_date(raw) {
        Some(date) => style.format(date),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_styles() {
        assert_eq!(format_calendar_date("2024-03-01", DateStyle::Us), "3/1/2024");
        assert_eq!(format_calendar_date("2024-03-01", DateStyle::Iso), "2024-03-01");
        assert_eq!(
            format_calendar_date("2024-03-01", DateStyle::DayFirst),
            "01/03/2024"
        );
    }

    #[test]
    fn test_time_component_dropped() {
        assert_eq!(
            format_calendar_date("2024-04-15T23:59:59Z", DateStyle::Us),
            "4/15/2024"
        );
        assert_eq!(
            format_calendar_date("2024-04-15T08:00:00.123+02:00", DateStyle::Iso),
            "2024-04-15"
        );
        assert_eq!(
            format_calendar_date("2024-04-15T08:00:00", DateStyle::Iso),
            "2024-04-15"
        );
    }

    #[test]
    fn test_loose_timestamps() {
        for raw in [
            "2024-03-01T10:00",
            "2024-03-01T10:00Z",
            "2024-03-01 10:00:00",
            "2024-03-01 10:00:00.5",
            "2024-03-01 10:00",
            "Fri, 01 Mar 2024 10:00:00 GMT",
            "Fri, 01 Mar 2024 23:30:00 -0500",
        ] {
            assert_eq!(format_calendar_date(raw, DateStyle::Us), "3/1/2024", "{raw}");
        }
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(format_calendar_date("yesterday", DateStyle::Us), INVALID_DATE);
        assert_eq!(format_calendar_date("", DateStyle::Iso), INVALID_DATE);
        assert_eq!(format_calendar_date("2024-02-30", DateStyle::Us), INVALID_DATE);
        assert_eq!(format_calendar_date("2024-03-01T", DateStyle::Us), INVALID_DATE);
        assert_eq!(format_calendar_date("Z", DateStyle::Us), INVALID_DATE);
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(DateStyle::from_locale("en_US.UTF-8"), DateStyle::Us);
        assert_eq!(DateStyle::from_locale("C"), DateStyle::Us);
        assert_eq!(DateStyle::from_locale("en_GB.UTF-8"), DateStyle::DayFirst);
        assert_eq!(DateStyle::from_locale("de_DE@euro"), DateStyle::DayFirst);
        assert_eq!(DateStyle::from_locale("sv_SE"), DateStyle::Iso);
        assert_eq!(DateStyle::from_locale("ja-JP"), DateStyle::Iso);
        assert_eq!(DateStyle::from_locale("POSIX"), DateStyle::Us);
    }

    #[test]
    fn test_from_language_only_locale() {
        assert_eq!(DateStyle::from_locale("de"), DateStyle::DayFirst);
        assert_eq!(DateStyle::from_locale("fr.UTF-8"), DateStyle::DayFirst);
        assert_eq!(DateStyle::from_locale("en"), DateStyle::Us);
        assert_eq!(DateStyle::from_locale("ja"), DateStyle::Iso);
    }
}
