//! Date and string formatting.

use crate::utils::error::{HelperError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

pub const DEFAULT_TRUNCATE_SUFFIX: &str = "...";

const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Anything `format_date` accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// A calendar date, formatted as-is.
    Calendar(NaiveDate),
    /// A wall-clock time taken to be local.
    Local(NaiveDateTime),
    Instant(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Calendar(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::Local(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::Instant(value.with_timezone(&Utc))
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::Timestamp(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl DateInput {
    /// 轉為本地時區的日曆日期
    pub fn to_local_date(&self) -> Result<NaiveDate> {
        match self {
            DateInput::Calendar(date) => Ok(*date),
            DateInput::Local(datetime) => Ok(datetime.date()),
            DateInput::Instant(instant) => local_date_of(instant),
            DateInput::Timestamp(ms) => {
                let instant = DateTime::from_timestamp_millis(*ms).ok_or_else(|| {
                    HelperError::InvalidDate {
                        input: ms.to_string(),
                        reason: "timestamp out of range".to_string(),
                    }
                })?;
                local_date_of(&instant)
            }
            DateInput::Text(text) => parse_date_text(text),
        }
    }
}

/// The local offset can push an in-range instant past `NaiveDateTime::MAX`/`MIN`.
fn local_date_of(instant: &DateTime<Utc>) -> Result<NaiveDate> {
    let utc = instant.naive_utc();
    let offset = Local.offset_from_utc_datetime(&utc).fix();
    utc.checked_add_offset(offset)
        .map(|local| local.date())
        .ok_or_else(|| HelperError::InvalidDate {
            input: format!("{} UTC", utc),
            reason: "out of range after local offset".to_string(),
        })
}

fn parse_date_text(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return local_date_of(&instant.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    Err(HelperError::InvalidDate {
        input: text.to_string(),
        reason: "expected YYYY-MM-DD, RFC 3339 or a local datetime".to_string(),
    })
}

/// Formats the local calendar date of `input` as `YYYY-MM-DD`.
pub fn format_date(input: impl Into<DateInput>) -> Result<String> {
    let date = input.into().to_local_date()?;
    Ok(date.format(DATE_FORMAT).to_string())
}

pub fn truncate(text: &str, max_length: usize) -> String {
    truncate_with(text, max_length, DEFAULT_TRUNCATE_SUFFIX)
}

/// Lengths are counted in chars. The result never exceeds `max_length`; when
/// the suffix alone is longer, only its first `max_length` chars are returned.
pub fn truncate_with(text: &str, max_length: usize, suffix: &str) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let suffix_length = suffix.chars().count();
    if max_length < suffix_length {
        return suffix.chars().take(max_length).collect();
    }

    let mut truncated: String = text.chars().take(max_length - suffix_length).collect();
    truncated.push_str(suffix);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date).unwrap(), "2024-01-05");
        assert_eq!(format_date("2024-01-05").unwrap(), "2024-01-05");
    }

    #[test]
    fn test_format_timestamp_uses_local_date() {
        let timestamp = Local
            .with_ymd_and_hms(2024, 12, 25, 0, 0, 0)
            .single()
            .unwrap()
            .timestamp_millis();
        assert_eq!(format_date(timestamp).unwrap(), "2024-12-25");
    }

    #[test]
    fn test_format_datetime_values() {
        let local = Local.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).single().unwrap();
        assert_eq!(format_date(local).unwrap(), "2024-07-01");

        let naive = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        assert_eq!(format_date(naive).unwrap(), "2024-03-09");
        assert_eq!(format_date("2024-03-09T23:59:00").unwrap(), "2024-03-09");
        assert_eq!(format_date("2024-03-09 08:00:00.250").unwrap(), "2024-03-09");
    }

    #[test]
    fn test_format_rfc3339_converts_to_local() {
        let text = "2024-03-10T12:00:00+00:00";
        let expected = DateTime::parse_from_rfc3339(text)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string();
        assert_eq!(format_date(text).unwrap(), expected);
    }

    #[test]
    fn test_format_extreme_instants_follow_local_offset() {
        for instant in [DateTime::<Utc>::MAX_UTC, DateTime::<Utc>::MIN_UTC] {
            let offset = Local
                .offset_from_utc_datetime(&instant.naive_utc())
                .fix()
                .local_minus_utc();
            let overflows = (instant == DateTime::<Utc>::MAX_UTC && offset > 0)
                || (instant == DateTime::<Utc>::MIN_UTC && offset < 0);

            for result in [format_date(instant.timestamp_millis()), format_date(instant)] {
                if overflows {
                    assert!(matches!(result, Err(HelperError::InvalidDate { .. })));
                } else {
                    assert!(result.is_ok());
                }
            }
        }
    }

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(format_date("0999-02-03").unwrap(), "0999-02-03");
    }

    #[test]
    fn test_format_invalid_date() {
        assert!(matches!(
            format_date("not a date"),
            Err(HelperError::InvalidDate { .. })
        ));
        assert!(format_date(i64::MAX).is_err());
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("这是一个很长的字符串", 5), "这是...");
    }

    #[test]
    fn test_truncate_keeps_short_string() {
        assert_eq!(truncate("短字符串", 10), "短字符串");
        assert_eq!(truncate("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_custom_suffix() {
        assert_eq!(truncate_with("很长的字符串", 5, "~"), "很长的字~");
        assert_eq!(truncate_with("abcdef", 3, ""), "abc");
    }

    #[test]
    fn test_truncate_saturates_when_suffix_too_long() {
        assert_eq!(truncate("abcdef", 2), "..");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abcdef", 3), "...");
    }
}
