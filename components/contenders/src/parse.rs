//! Parsing benchmarks: timestamps, ISO 8601, RFC 3339, durations
//!
//! Each table builds one contender per library that supports the operation,
//! with the input captured up front so the timed body is the parse alone.

use crate::contender::{Contender, Library};
use crate::error::ContenderError;
use crate::normalized::NormalizedDateTime;
use std::time::{Duration, UNIX_EPOCH};
use time::format_description::well_known::Rfc3339;

/// A representative unix timestamp: 1996-12-19T16:39:57Z.
pub const UNIX_TIMESTAMP_SAMPLE: i64 = 851_013_597;

/// An aware ISO 8601 datetime with a fractional second.
///
/// Uses the `Z` designator so that humantime, which accepts no other
/// offset spelling, can take part.
pub const ISO8601_SAMPLE: &str = "2013-11-03T08:45:12.123456Z";

/// The parseable example datetimes from RFC 3339 itself.
///
/// The leap-second examples (`23:59:60`) are excluded: none of the
/// contenders parse them out of the box.
pub const RFC3339_SAMPLES: [&str; 3] = [
    "1985-04-12T23:20:50.52Z",
    "1996-12-19T16:39:57-08:00",
    "1937-01-01T12:00:27.87+00:20",
];

/// An ISO 8601 duration: one and a half days.
pub const ISO8601_DURATION_SAMPLE: &str = "P1DT12H";

/// Contenders for "UTC datetime from a unix timestamp".
pub fn from_timestamp_contenders(unix: i64) -> Vec<Contender<NormalizedDateTime>> {
    vec![
        Contender::new(Library::Chrono, move || {
            let dt = chrono::DateTime::from_timestamp(unix, 0).ok_or_else(|| {
                ContenderError::out_of_range(Library::Chrono, format!("timestamp {unix}"))
            })?;
            Ok(NormalizedDateTime::from_chrono(&dt))
        }),
        Contender::new(Library::Time, move || {
            let dt = time::OffsetDateTime::from_unix_timestamp(unix)
                .map_err(|e| ContenderError::out_of_range(Library::Time, e))?;
            Ok(NormalizedDateTime::from_time(&dt))
        }),
        Contender::new(Library::Jiff, move || {
            let ts = jiff::Timestamp::from_second(unix)
                .map_err(|e| ContenderError::out_of_range(Library::Jiff, e))?;
            Ok(NormalizedDateTime::from_jiff_timestamp(&ts))
        }),
        Contender::new(Library::Speedate, move || {
            let dt = speedate::DateTime::from_timestamp(unix, 0)
                .map_err(|e| ContenderError::out_of_range(Library::Speedate, format!("{e:?}")))?;
            Ok(NormalizedDateTime::from_speedate(&dt))
        }),
        Contender::new(Library::Stdlib, move || {
            let secs = u64::try_from(unix).map_err(|_| {
                ContenderError::out_of_range(Library::Stdlib, format!("timestamp {unix}"))
            })?;
            let t = UNIX_EPOCH
                .checked_add(Duration::from_secs(secs))
                .ok_or_else(|| {
                    ContenderError::out_of_range(Library::Stdlib, format!("timestamp {unix}"))
                })?;
            NormalizedDateTime::from_system_time(Library::Stdlib, t)
        }),
        // humantime: not supported.
    ]
}

/// Contenders for "aware datetime from an ISO 8601 string".
///
/// humantime takes part only when the input carries a `Z` designator,
/// which [`ISO8601_SAMPLE`] guarantees.
pub fn iso8601_contenders(input: &str) -> Vec<Contender<NormalizedDateTime>> {
    let chrono_input = input.to_string();
    let time_input = input.to_string();
    let jiff_input = input.to_string();
    let speedate_input = input.to_string();
    let humantime_input = input.to_string();

    vec![
        Contender::new(Library::Chrono, move || {
            let dt = chrono::DateTime::parse_from_rfc3339(&chrono_input)
                .map_err(|e| ContenderError::parse(Library::Chrono, &chrono_input, e))?;
            Ok(NormalizedDateTime::from_chrono(&dt))
        }),
        Contender::new(Library::Time, move || {
            let dt = time::OffsetDateTime::parse(&time_input, &Rfc3339)
                .map_err(|e| ContenderError::parse(Library::Time, &time_input, e))?;
            Ok(NormalizedDateTime::from_time(&dt))
        }),
        Contender::new(Library::Jiff, move || {
            let ts: jiff::Timestamp = jiff_input
                .parse()
                .map_err(|e| ContenderError::parse(Library::Jiff, &jiff_input, e))?;
            Ok(NormalizedDateTime::from_jiff_timestamp(&ts))
        }),
        Contender::new(Library::Speedate, move || {
            let dt = speedate::DateTime::parse_str(&speedate_input).map_err(|e| {
                ContenderError::parse(Library::Speedate, &speedate_input, format!("{e:?}"))
            })?;
            Ok(NormalizedDateTime::from_speedate(&dt))
        }),
        Contender::new(Library::Humantime, move || {
            let t = humantime::parse_rfc3339(&humantime_input)
                .map_err(|e| ContenderError::parse(Library::Humantime, &humantime_input, e))?;
            NormalizedDateTime::from_system_time(Library::Humantime, t)
        }),
        // std: not supported.
    ]
}

/// Contenders for "parse the RFC 3339 example datetimes".
///
/// Each run parses all of [`RFC3339_SAMPLES`] in one batch. humantime is
/// omitted: it accepts no offset spelling other than `Z`.
pub fn rfc3339_contenders() -> Vec<Contender<Vec<NormalizedDateTime>>> {
    vec![
        Contender::new(Library::Chrono, || {
            RFC3339_SAMPLES
                .iter()
                .map(|s| {
                    let dt = chrono::DateTime::parse_from_rfc3339(s)
                        .map_err(|e| ContenderError::parse(Library::Chrono, s, e))?;
                    Ok(NormalizedDateTime::from_chrono(&dt))
                })
                .collect()
        }),
        Contender::new(Library::Time, || {
            RFC3339_SAMPLES
                .iter()
                .map(|s| {
                    let dt = time::OffsetDateTime::parse(s, &Rfc3339)
                        .map_err(|e| ContenderError::parse(Library::Time, s, e))?;
                    Ok(NormalizedDateTime::from_time(&dt))
                })
                .collect()
        }),
        Contender::new(Library::Jiff, || {
            RFC3339_SAMPLES
                .iter()
                .map(|s| {
                    let ts: jiff::Timestamp = s
                        .parse()
                        .map_err(|e| ContenderError::parse(Library::Jiff, s, e))?;
                    Ok(NormalizedDateTime::from_jiff_timestamp(&ts))
                })
                .collect()
        }),
        Contender::new(Library::Speedate, || {
            RFC3339_SAMPLES
                .iter()
                .map(|s| {
                    let dt = speedate::DateTime::parse_str(s)
                        .map_err(|e| ContenderError::parse(Library::Speedate, s, format!("{e:?}")))?;
                    Ok(NormalizedDateTime::from_speedate(&dt))
                })
                .collect()
        }),
    ]
}

/// Contenders for "total seconds of an ISO 8601 duration string".
pub fn iso8601_duration_contenders(input: &str) -> Vec<Contender<f64>> {
    let jiff_input = input.to_string();
    let speedate_input = input.to_string();

    vec![
        Contender::new(Library::Jiff, move || {
            let span: jiff::Span = jiff_input
                .parse()
                .map_err(|e| ContenderError::parse(Library::Jiff, &jiff_input, e))?;
            span.total(jiff::SpanTotal::from(jiff::Unit::Second).days_are_24_hours())
                .map_err(|e| ContenderError::out_of_range(Library::Jiff, e))
        }),
        Contender::new(Library::Speedate, move || {
            let d = speedate::Duration::parse_str(&speedate_input).map_err(|e| {
                ContenderError::parse(Library::Speedate, &speedate_input, format!("{e:?}"))
            })?;
            let magnitude = d.day as f64 * 86_400.0
                + d.second as f64
                + d.microsecond as f64 / 1_000_000.0;
            Ok(if d.positive { magnitude } else { -magnitude })
        }),
        // chrono, time, std: no ISO 8601 duration parser.
    ]
}
