//! Arithmetic benchmarks: shifts, durations, weekdays
//!
//! The base datetime values are prepared once per table; the shift amounts
//! are applied inside the closures, matching what an application does when
//! it builds a delta and adds it.

use crate::contender::{Contender, Library};
use crate::error::{ContenderError, ContenderResult};
use crate::normalized::NormalizedDateTime;
use chrono::Datelike;
use jiff::civil::Weekday;
use std::time::Duration;

/// A mixed day-hour-minute-microsecond shift amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeShift {
    /// Whole days
    pub days: i64,
    /// Whole hours
    pub hours: i64,
    /// Whole minutes
    pub minutes: i64,
    /// Microseconds
    pub microseconds: i64,
}

impl TimeShift {
    /// A representative shift with every component in the 400–500 range.
    pub fn sample() -> Self {
        TimeShift {
            days: 451,
            hours: 433,
            minutes: 417,
            microseconds: 468,
        }
    }

    /// The same shift pointed backwards.
    pub fn negated(self) -> Self {
        TimeShift {
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            microseconds: -self.microseconds,
        }
    }

    /// The shift as a single microsecond count.
    pub fn total_microseconds(self) -> i64 {
        self.days * 86_400_000_000
            + self.hours * 3_600_000_000
            + self.minutes * 60_000_000
            + self.microseconds
    }
}

/// Contenders for "shift a datetime by a mixed delta".
///
/// Works for forward and backward shifts; pass [`TimeShift::negated`] for
/// the backward variant.
pub fn shift_contenders(
    base_unix: i64,
    shift: TimeShift,
) -> ContenderResult<Vec<Contender<NormalizedDateTime>>> {
    let chrono_dt = chrono::DateTime::from_timestamp(base_unix, 0).ok_or_else(|| {
        ContenderError::out_of_range(Library::Chrono, format!("timestamp {base_unix}"))
    })?;
    let time_dt = time::OffsetDateTime::from_unix_timestamp(base_unix)
        .map_err(|e| ContenderError::out_of_range(Library::Time, e))?;
    let jiff_zdt = jiff::Timestamp::from_second(base_unix)
        .map_err(|e| ContenderError::out_of_range(Library::Jiff, e))?
        .to_zoned(jiff::tz::TimeZone::UTC);
    let system_time = system_time_from_unix(base_unix)?;

    Ok(vec![
        Contender::new(Library::Chrono, move || {
            let delta = chrono::TimeDelta::microseconds(shift.total_microseconds());
            chrono_dt
                .checked_add_signed(delta)
                .map(|dt| NormalizedDateTime::from_chrono(&dt))
                .ok_or_else(|| {
                    ContenderError::out_of_range(Library::Chrono, format!("shift {shift:?}"))
                })
        }),
        Contender::new(Library::Time, move || {
            let delta = time::Duration::microseconds(shift.total_microseconds());
            time_dt
                .checked_add(delta)
                .map(|dt| NormalizedDateTime::from_time(&dt))
                .ok_or_else(|| {
                    ContenderError::out_of_range(Library::Time, format!("shift {shift:?}"))
                })
        }),
        Contender::new(Library::Jiff, move || {
            let span = jiff_span(shift)?;
            let shifted = jiff_zdt
                .checked_add(span)
                .map_err(|e| ContenderError::out_of_range(Library::Jiff, e))?;
            Ok(NormalizedDateTime::from_jiff_zoned(&shifted))
        }),
        Contender::new(Library::Stdlib, move || {
            let total = shift.total_microseconds();
            let magnitude = Duration::from_micros(total.unsigned_abs());
            let shifted = if total >= 0 {
                system_time.checked_add(magnitude)
            } else {
                system_time.checked_sub(magnitude)
            };
            let shifted = shifted.ok_or_else(|| {
                ContenderError::out_of_range(Library::Stdlib, format!("shift {shift:?}"))
            })?;
            NormalizedDateTime::from_system_time(Library::Stdlib, shifted)
        }),
        // speedate, humantime: no datetime arithmetic.
    ])
}

/// Contenders for "duration to total seconds". The durations are prepared
/// up front so the closures time the conversion alone.
///
/// `shift` must be non-negative; the std baseline's `Duration` is unsigned.
pub fn total_seconds_contenders(shift: TimeShift) -> ContenderResult<Vec<Contender<f64>>> {
    let total = shift.total_microseconds();
    if total < 0 {
        return Err(ContenderError::out_of_range(
            Library::Stdlib,
            format!("negative shift {shift:?}"),
        ));
    }

    let chrono_delta = chrono::TimeDelta::microseconds(total);
    let time_delta = time::Duration::microseconds(total);
    let jiff_duration = jiff::SignedDuration::from_micros(total);
    let std_duration = Duration::from_micros(total as u64);

    Ok(vec![
        Contender::new(Library::Chrono, move || {
            let micros = chrono_delta.num_microseconds().ok_or_else(|| {
                ContenderError::out_of_range(Library::Chrono, "microsecond overflow")
            })?;
            Ok(micros as f64 / 1_000_000.0)
        }),
        Contender::new(Library::Time, move || Ok(time_delta.as_seconds_f64())),
        Contender::new(Library::Jiff, move || Ok(jiff_duration.as_secs_f64())),
        Contender::new(Library::Stdlib, move || Ok(std_duration.as_secs_f64())),
        // speedate, humantime: not relevant.
    ])
}

/// Contenders for "ISO weekday number" (Monday = 1 through Sunday = 7).
pub fn weekday_contenders(base_unix: i64) -> ContenderResult<Vec<Contender<u8>>> {
    let chrono_dt = chrono::DateTime::from_timestamp(base_unix, 0).ok_or_else(|| {
        ContenderError::out_of_range(Library::Chrono, format!("timestamp {base_unix}"))
    })?;
    let time_dt = time::OffsetDateTime::from_unix_timestamp(base_unix)
        .map_err(|e| ContenderError::out_of_range(Library::Time, e))?;
    let jiff_zdt = jiff::Timestamp::from_second(base_unix)
        .map_err(|e| ContenderError::out_of_range(Library::Jiff, e))?
        .to_zoned(jiff::tz::TimeZone::UTC);

    Ok(vec![
        Contender::new(Library::Chrono, move || {
            Ok(chrono_dt.weekday().number_from_monday() as u8)
        }),
        Contender::new(Library::Time, move || {
            Ok(time_dt.weekday().number_from_monday())
        }),
        Contender::new(Library::Jiff, move || {
            Ok(jiff_zdt.weekday().to_monday_one_offset() as u8)
        }),
        // std: no calendar.
    ])
}

/// Contenders for "find the coming Saturday".
///
/// Every contender uses the same rule: the base date itself when it already
/// falls on a Saturday, otherwise the next one, preserving the time of day.
pub fn next_saturday_contenders(
    base_unix: i64,
) -> ContenderResult<Vec<Contender<NormalizedDateTime>>> {
    let chrono_dt = chrono::DateTime::from_timestamp(base_unix, 0).ok_or_else(|| {
        ContenderError::out_of_range(Library::Chrono, format!("timestamp {base_unix}"))
    })?;
    let time_dt = time::OffsetDateTime::from_unix_timestamp(base_unix)
        .map_err(|e| ContenderError::out_of_range(Library::Time, e))?;
    let jiff_zdt = jiff::Timestamp::from_second(base_unix)
        .map_err(|e| ContenderError::out_of_range(Library::Jiff, e))?
        .to_zoned(jiff::tz::TimeZone::UTC);

    Ok(vec![
        Contender::new(Library::Chrono, move || {
            let ahead = days_until_saturday(chrono_dt.weekday().num_days_from_monday() as i64);
            chrono_dt
                .checked_add_signed(chrono::TimeDelta::days(ahead))
                .map(|dt| NormalizedDateTime::from_chrono(&dt))
                .ok_or_else(|| {
                    ContenderError::out_of_range(Library::Chrono, "date overflow")
                })
        }),
        Contender::new(Library::Time, move || {
            let ahead = days_until_saturday(time_dt.weekday().number_days_from_monday() as i64);
            time_dt
                .checked_add(time::Duration::days(ahead))
                .map(|dt| NormalizedDateTime::from_time(&dt))
                .ok_or_else(|| ContenderError::out_of_range(Library::Time, "date overflow"))
        }),
        Contender::new(Library::Jiff, move || {
            let saturday = if jiff_zdt.weekday() == Weekday::Saturday {
                jiff_zdt.clone()
            } else {
                jiff_zdt
                    .date()
                    .nth_weekday(1, Weekday::Saturday)
                    .map_err(|e| ContenderError::out_of_range(Library::Jiff, e))?
                    .to_datetime(jiff_zdt.time())
                    .to_zoned(jiff::tz::TimeZone::UTC)
                    .map_err(|e| ContenderError::out_of_range(Library::Jiff, e))?
            };
            Ok(NormalizedDateTime::from_jiff_zoned(&saturday))
        }),
        // std: no calendar.
    ])
}

/// Days from a Monday-zero weekday number to the coming Saturday.
fn days_until_saturday(weekday_from_monday: i64) -> i64 {
    (5 - weekday_from_monday).rem_euclid(7)
}

fn jiff_span(shift: TimeShift) -> ContenderResult<jiff::Span> {
    let build = || -> Result<jiff::Span, jiff::Error> {
        jiff::Span::new()
            .try_days(shift.days)?
            .try_hours(shift.hours)?
            .try_minutes(shift.minutes)?
            .try_microseconds(shift.microseconds)
    };
    build().map_err(|e| ContenderError::out_of_range(Library::Jiff, e))
}

fn system_time_from_unix(unix: i64) -> ContenderResult<std::time::SystemTime> {
    let secs = u64::try_from(unix)
        .map_err(|_| ContenderError::out_of_range(Library::Stdlib, format!("timestamp {unix}")))?;
    std::time::UNIX_EPOCH
        .checked_add(Duration::from_secs(secs))
        .ok_or_else(|| ContenderError::out_of_range(Library::Stdlib, format!("timestamp {unix}")))
}
