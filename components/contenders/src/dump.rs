//! Formatting benchmarks: datetime to RFC 3339 string
//!
//! The native values are prepared once, from the same whole-second UTC
//! instant, so each closure times the rendering alone. For such an instant
//! every contender must produce the identical `...Z` string, which the
//! agreement tests rely on.

use crate::contender::{Contender, Library};
use crate::error::{ContenderError, ContenderResult};
use std::time::{Duration, UNIX_EPOCH};
use time::format_description::well_known::Rfc3339;

/// Contenders for "render a UTC datetime as an RFC 3339 string".
///
/// `unix` must be a non-negative whole-second timestamp.
pub fn rfc3339_string_contenders(unix: i64) -> ContenderResult<Vec<Contender<String>>> {
    let chrono_dt = chrono::DateTime::from_timestamp(unix, 0).ok_or_else(|| {
        ContenderError::out_of_range(Library::Chrono, format!("timestamp {unix}"))
    })?;
    let time_dt = time::OffsetDateTime::from_unix_timestamp(unix)
        .map_err(|e| ContenderError::out_of_range(Library::Time, e))?;
    let jiff_ts = jiff::Timestamp::from_second(unix)
        .map_err(|e| ContenderError::out_of_range(Library::Jiff, e))?;
    let secs = u64::try_from(unix)
        .map_err(|_| ContenderError::out_of_range(Library::Stdlib, format!("timestamp {unix}")))?;
    let system_time = UNIX_EPOCH
        .checked_add(Duration::from_secs(secs))
        .ok_or_else(|| {
            ContenderError::out_of_range(Library::Stdlib, format!("timestamp {unix}"))
        })?;

    Ok(vec![
        Contender::new(Library::Chrono, move || {
            Ok(chrono_dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
        }),
        Contender::new(Library::Time, move || {
            time_dt
                .format(&Rfc3339)
                .map_err(|e| ContenderError::format(Library::Time, e))
        }),
        Contender::new(Library::Jiff, move || Ok(jiff_ts.to_string())),
        Contender::new(Library::Humantime, move || {
            Ok(humantime::format_rfc3339_seconds(system_time).to_string())
        }),
        // speedate, std: not relevant.
    ])
}
