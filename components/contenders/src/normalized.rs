//! Normalized datetime representation for cross-library comparison
//!
//! Every contender reduces its native result to a [`NormalizedDateTime`] so
//! that results from different libraries can be compared. The normalization
//! is deliberately instant-based (seconds since the unix epoch) rather than
//! civil-field-based: it is the strongest agreement check that every
//! contender can express.

use crate::contender::Library;
use crate::error::{ContenderError, ContenderResult};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A datetime reduced to an instant plus the offset the library retained.
///
/// Libraries that normalize parsed offsets away (jiff's `Timestamp`) report
/// an offset of zero; agreement between libraries is judged on the instant,
/// never on the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedDateTime {
    /// Whole seconds since the unix epoch
    pub unix_seconds: i64,
    /// Fractional part of the instant, in nanoseconds (`0..1_000_000_000`)
    pub subsec_nanosecond: u32,
    /// UTC offset retained by the library, in seconds (zero if discarded)
    pub offset_seconds: i32,
}

impl NormalizedDateTime {
    /// Create a normalized datetime from raw parts.
    pub fn new(unix_seconds: i64, subsec_nanosecond: u32, offset_seconds: i32) -> Self {
        NormalizedDateTime {
            unix_seconds,
            subsec_nanosecond,
            offset_seconds,
        }
    }

    /// The instant as total nanoseconds since the epoch.
    ///
    /// Used by tests that compare instants from different libraries, and by
    /// the clock agreement checks that allow a small tolerance.
    pub fn instant_nanos(&self) -> i128 {
        self.unix_seconds as i128 * 1_000_000_000 + self.subsec_nanosecond as i128
    }

    /// Whether two results denote the same instant, ignoring offsets.
    pub fn same_instant(&self, other: &NormalizedDateTime) -> bool {
        self.instant_nanos() == other.instant_nanos()
    }

    /// Normalize a chrono datetime in any timezone.
    pub fn from_chrono<Tz: chrono::TimeZone>(dt: &chrono::DateTime<Tz>) -> Self {
        use chrono::Offset;

        NormalizedDateTime {
            unix_seconds: dt.timestamp(),
            subsec_nanosecond: dt.timestamp_subsec_nanos(),
            offset_seconds: dt.offset().fix().local_minus_utc(),
        }
    }

    /// Normalize a `time` offset datetime.
    pub fn from_time(dt: &time::OffsetDateTime) -> Self {
        NormalizedDateTime {
            unix_seconds: dt.unix_timestamp(),
            subsec_nanosecond: dt.nanosecond(),
            offset_seconds: dt.offset().whole_seconds(),
        }
    }

    /// Normalize a jiff timestamp. The offset is reported as zero because
    /// `jiff::Timestamp` does not retain one.
    pub fn from_jiff_timestamp(ts: &jiff::Timestamp) -> Self {
        let mut seconds = ts.as_second();
        let mut nanos = ts.subsec_nanosecond();
        // jiff keeps the fraction signed for pre-epoch instants.
        if nanos < 0 {
            seconds -= 1;
            nanos += 1_000_000_000;
        }
        NormalizedDateTime {
            unix_seconds: seconds,
            subsec_nanosecond: nanos as u32,
            offset_seconds: 0,
        }
    }

    /// Normalize a jiff zoned datetime.
    pub fn from_jiff_zoned(zdt: &jiff::Zoned) -> Self {
        let mut normalized = NormalizedDateTime::from_jiff_timestamp(&zdt.timestamp());
        normalized.offset_seconds = zdt.offset().seconds();
        normalized
    }

    /// Normalize a speedate datetime.
    pub fn from_speedate(dt: &speedate::DateTime) -> Self {
        NormalizedDateTime {
            unix_seconds: dt.timestamp_tz(),
            subsec_nanosecond: dt.time.microsecond * 1_000,
            offset_seconds: dt.time.tz_offset.unwrap_or(0),
        }
    }

    /// Normalize a `SystemTime`. Pre-epoch instants are out of range for
    /// the baseline contender.
    pub fn from_system_time(library: Library, t: SystemTime) -> ContenderResult<Self> {
        let since_epoch = t
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ContenderError::out_of_range(library, e))?;
        Ok(NormalizedDateTime {
            unix_seconds: since_epoch.as_secs() as i64,
            subsec_nanosecond: since_epoch.subsec_nanos(),
            offset_seconds: 0,
        })
    }
}
