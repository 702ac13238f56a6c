// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Durations and timestamps.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, ParseError, Utc};
use jiff::SignedDuration;

use crate::{
    error::{FillError, Result},
    shape::ShapeKind
};

/// Well-known layout names and their strftime patterns.
const LAYOUTS: &[(&str, &str)] = &[
    ("DateTime", "%Y-%m-%d %H:%M:%S"),
    ("DateOnly", "%Y-%m-%d"),
    ("TimeOnly", "%H:%M:%S"),
    ("Kitchen", "%I:%M%p"),
    ("ANSIC", "%a %b %e %H:%M:%S %Y"),
    ("UnixDate", "%a %b %e %H:%M:%S %Z %Y"),
    ("RubyDate", "%a %b %d %H:%M:%S %z %Y"),
    ("RFC822", "%d %b %y %H:%M %Z"),
    ("RFC822Z", "%d %b %y %H:%M %z"),
    ("RFC850", "%A, %d-%b-%y %H:%M:%S %Z"),
    ("RFC1123", "%a, %d %b %Y %H:%M:%S %Z"),
    ("RFC1123Z", "%a, %d %b %Y %H:%M:%S %z"),
    ("Stamp", "%b %e %H:%M:%S"),
    ("StampMilli", "%b %e %H:%M:%S%.3f"),
    ("StampMicro", "%b %e %H:%M:%S%.6f"),
    ("StampNano", "%b %e %H:%M:%S%.9f")
];

/// Duration units and the spelling handed to jiff.
const DURATION_UNITS: &[(&str, &str)] = &[
    ("ns", "ns"),
    ("us", "us"),
    ("\u{b5}s", "us"),
    ("\u{3bc}s", "us"),
    ("ms", "ms"),
    ("s", "s"),
    ("m", "m"),
    ("h", "h")
];

/// Duration literal: an optional sign followed by one or more
/// `<decimal><unit>` terms with no separators, such as `3s`, `5h30m15s`,
/// `1.5h30m` or `.5s`. A lone `0` is zero.
///
/// Negative spans fail: `std::time::Duration` is unsigned.
pub(super) fn parse_duration(input: &str) -> Result<Duration> {
    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input)
    };
    if body == "0" {
        return Ok(Duration::ZERO);
    }
    if body.is_empty() {
        return Err(FillError::parse(ShapeKind::Duration, input, "empty duration"));
    }

    let mut total = SignedDuration::ZERO;
    let mut rest = body;
    while !rest.is_empty() {
        let split = rest
            .find(|ch: char| !(ch.is_ascii_digit() || ch == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(split);
        let split = tail
            .find(|ch: char| ch.is_ascii_digit() || ch == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(split);
        rest = tail;

        let term = duration_term(number, unit).ok_or_else(|| {
            FillError::parse(
                ShapeKind::Duration,
                input,
                format!("`{number}{unit}` is not a <number><unit> term")
            )
        })?;
        let part: SignedDuration = term
            .parse()
            .map_err(|err: jiff::Error| FillError::parse(ShapeKind::Duration, input, err))?;
        total = total
            .checked_add(part)
            .ok_or_else(|| FillError::parse(ShapeKind::Duration, input, "duration overflows"))?;
    }

    if negative && !total.is_zero() {
        return Err(FillError::parse(
            ShapeKind::Duration,
            input,
            "negative durations are not representable"
        ));
    }
    Ok(total.unsigned_abs())
}

/// One term in jiff's friendly format, or `None` when the number or unit is
/// not valid.
fn duration_term(number: &str, unit: &str) -> Option<String> {
    let (_, unit) = DURATION_UNITS.iter().find(|(name, _)| *name == unit)?;
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return None;
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    Some(if fraction.is_empty() {
        format!("{whole}{unit}")
    } else {
        format!("{whole}.{fraction}{unit}")
    })
}

/// Timestamp in `layout`: a well-known layout name or a strftime pattern.
///
/// Inputs without an offset are UTC; a missing date is January 1 of year 0
/// and a missing year is year 0.
pub(super) fn parse_timestamp(input: &str, layout: &str) -> Result<DateTime<Utc>> {
    if matches!(layout, "RFC3339" | "RFC3339Nano") {
        return DateTime::parse_from_rfc3339(input)
            .map(|stamp| stamp.with_timezone(&Utc))
            .map_err(|err| FillError::parse(ShapeKind::Timestamp, input, err));
    }

    let pattern = LAYOUTS
        .iter()
        .find(|(name, _)| *name == layout)
        .map_or(layout, |(_, pattern)| *pattern);

    parse_with(input, pattern).map_err(|err| {
        FillError::parse(ShapeKind::Timestamp, input, format!("{err} (layout `{layout}`)"))
    })
}

fn parse_with(input: &str, pattern: &str) -> std::result::Result<DateTime<Utc>, ParseError> {
    let first = match DateTime::parse_from_str(input, pattern) {
        Ok(stamp) => return Ok(stamp.with_timezone(&Utc)),
        Err(err) => err
    };

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, pattern) {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    let with_year = format!("0000 {input}");
    let pattern_with_year = format!("%Y {pattern}");
    if let Ok(naive) = NaiveDateTime::parse_from_str(&with_year, &pattern_with_year) {
        return Ok(naive.and_utc());
    }

    if let Ok(time) = NaiveTime::parse_from_str(input, pattern)
        && let Some(date) = NaiveDate::from_ymd_opt(0, 1, 1)
    {
        return Ok(date.and_time(time).and_utc());
    }

    Err(first)
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn duration_grammar() {
        let cases = [
            ("3s", Duration::from_secs(3)),
            ("5h30m15s", Duration::from_secs(5 * 3600 + 30 * 60 + 15)),
            ("1.5h", Duration::from_secs(5400)),
            ("300ms", Duration::from_millis(300)),
            ("1.5h30m", Duration::from_secs(7200)),
            (".5s", Duration::from_millis(500)),
            ("2.s", Duration::from_secs(2)),
            ("1m1m", Duration::from_secs(120)),
            ("10us", Duration::from_micros(10)),
            ("10\u{b5}s", Duration::from_micros(10)),
            ("+7ns", Duration::from_nanos(7)),
            ("-0s", Duration::ZERO),
            ("0", Duration::ZERO)
        ];
        for (input, expected) in cases {
            assert_eq!(parse_duration(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn negative_duration_is_parse_error() {
        let err = parse_duration("-3s").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn garbage_duration() {
        for input in ["soon", "", "-", "3", "1 hour", "1h 30m", "PT1H", "1d", "..5s", "1.2.3s", "h"] {
            assert_eq!(parse_duration(input).unwrap_err().kind(), ErrorKind::Parse, "{input}");
        }
    }

    #[test]
    fn rfc3339_default() {
        let stamp = parse_timestamp("2024-12-09T02:20:35Z", "RFC3339").unwrap();
        assert_eq!(stamp.to_rfc3339(), "2024-12-09T02:20:35+00:00");

        let stamp = parse_timestamp("2024-12-09T04:20:35+02:00", "RFC3339").unwrap();
        assert_eq!(stamp.hour(), 2);
    }

    #[test]
    fn named_layouts() {
        let stamp = parse_timestamp("2024-12-09 02:20:35", "DateTime").unwrap();
        assert_eq!((stamp.year(), stamp.month(), stamp.day()), (2024, 12, 9));

        let stamp = parse_timestamp("2024-12-09", "DateOnly").unwrap();
        assert_eq!(stamp.hour(), 0);

        let stamp = parse_timestamp("3:04PM", "Kitchen").unwrap();
        assert_eq!((stamp.year(), stamp.hour(), stamp.minute()), (0, 15, 4));

        let stamp = parse_timestamp("Mon, 09 Dec 2024 02:20:35 +0100", "RFC1123Z").unwrap();
        assert_eq!(stamp.hour(), 1);

        let stamp = parse_timestamp("Dec 19 02:20:35", "Stamp").unwrap();
        assert_eq!((stamp.year(), stamp.month(), stamp.day()), (0, 12, 19));
    }

    #[test]
    fn strftime_layout() {
        let stamp = parse_timestamp("09/12/2024 02:20", "%d/%m/%Y %H:%M").unwrap();
        assert_eq!((stamp.month(), stamp.minute()), (12, 20));
    }

    #[test]
    fn mismatch_names_layout() {
        let err = parse_timestamp("yesterday", "DateOnly").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("DateOnly"));
    }
}
