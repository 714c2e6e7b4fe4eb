//! Reading the current time from each contender
//!
//! Mirrors the simplest operations a datetime library performs: the current
//! instant in UTC and in the system's local zone.

use crate::contender::{Contender, Library};
use crate::normalized::NormalizedDateTime;

/// Contenders for "current instant in UTC".
pub fn now_utc_contenders() -> Vec<Contender<NormalizedDateTime>> {
    vec![
        Contender::new(Library::Chrono, || {
            Ok(NormalizedDateTime::from_chrono(&chrono::Utc::now()))
        }),
        Contender::new(Library::Time, || {
            Ok(NormalizedDateTime::from_time(&time::OffsetDateTime::now_utc()))
        }),
        Contender::new(Library::Jiff, || {
            Ok(NormalizedDateTime::from_jiff_timestamp(&jiff::Timestamp::now()))
        }),
        Contender::new(Library::Stdlib, || {
            NormalizedDateTime::from_system_time(Library::Stdlib, std::time::SystemTime::now())
        }),
        // speedate, humantime: not relevant.
    ]
}

/// Contenders for "current instant in the local zone".
///
/// `time` is omitted: its local-offset lookup refuses to run once the
/// process has more than one thread, which both the test runner and
/// criterion guarantee.
pub fn now_local_contenders() -> Vec<Contender<NormalizedDateTime>> {
    vec![
        Contender::new(Library::Chrono, || {
            Ok(NormalizedDateTime::from_chrono(&chrono::Local::now()))
        }),
        Contender::new(Library::Jiff, || {
            Ok(NormalizedDateTime::from_jiff_zoned(&jiff::Zoned::now()))
        }),
        // std: no timezone database.
    ]
}
