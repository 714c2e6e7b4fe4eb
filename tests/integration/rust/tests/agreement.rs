//! Cross-Library Agreement Tests
//!
//! Before timing the contenders against each other, make sure they are
//! doing the same work: every library that implements an operation must
//! produce the same result for the same input.

use contenders::manipulate::{self, TimeShift};
use contenders::normalized::NormalizedDateTime;
use contenders::{clock, dump, parse, ContenderError, Library};
use rand::Rng;
use std::ops::RangeInclusive;

/// Random post-epoch unix timestamps, bounded to keep every contender in
/// range.
fn random_timestamps(count: usize) -> Vec<i64> {
    random_timestamps_in(count, 0..=2_000_000_000)
}

fn random_timestamps_in(count: usize, range: RangeInclusive<i64>) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(range.clone())).collect()
}

fn assert_same_instant(operation: &str, results: &[(contenders::Library, NormalizedDateTime)]) {
    let (_, reference) = results[0];
    for (library, result) in results {
        assert!(
            result.same_instant(&reference),
            "{operation}: {library} produced {result:?}, expected instant {reference:?}"
        );
    }
}

/// Test: clock reads from every library agree to within a second
#[test]
fn test_now_utc_agreement() {
    let readings: Vec<(contenders::Library, NormalizedDateTime)> = clock::now_utc_contenders()
        .iter()
        .map(|c| (c.library, c.run().expect("clock read failed")))
        .collect();

    let reference = readings[0].1.instant_nanos();
    for (library, reading) in &readings {
        let diff = (reading.instant_nanos() - reference).abs();
        assert!(diff < 1_000_000_000, "{library} clock diverged: {readings:?}");
    }
}

/// Test: local clock reads denote the same instant as UTC reads
#[test]
fn test_now_local_agreement() {
    let utc = clock::now_utc_contenders()[0]
        .run()
        .expect("clock read failed");

    for contender in clock::now_local_contenders() {
        let local = contender.run().expect("clock read failed");
        let diff = (local.instant_nanos() - utc.instant_nanos()).abs();
        assert!(
            diff < 2_000_000_000,
            "{} local reading diverged from UTC",
            contender.library
        );
    }
}

/// Test: random unix timestamps parse to the same instant everywhere
#[test]
fn test_parse_from_timestamp_agreement() {
    for unix in random_timestamps(50) {
        let results: Vec<_> = parse::from_timestamp_contenders(unix)
            .iter()
            .map(|c| (c.library, c.run().expect("parse failed")))
            .collect();

        assert_same_instant("parse_from_timestamp", &results);
        assert_eq!(results[0].1.unix_seconds, unix);
    }
}

/// Test: the ISO 8601 fixture parses to the same instant everywhere
#[test]
fn test_parse_iso8601_agreement() {
    let results: Vec<_> = parse::iso8601_contenders(parse::ISO8601_SAMPLE)
        .iter()
        .map(|c| (c.library, c.run().expect("parse failed")))
        .collect();

    assert_same_instant("parse_iso8601", &results);
}

/// Test: every RFC 3339 example parses to the same instant everywhere
#[test]
fn test_parse_rfc3339_agreement() {
    let batches: Vec<_> = parse::rfc3339_contenders()
        .iter()
        .map(|c| (c.library, c.run().expect("parse failed")))
        .collect();

    let (_, reference) = &batches[0];
    for (library, batch) in &batches {
        assert_eq!(batch.len(), parse::RFC3339_SAMPLES.len());
        for (sample, (parsed, expected)) in
            parse::RFC3339_SAMPLES.iter().zip(batch.iter().zip(reference))
        {
            assert!(
                parsed.same_instant(expected),
                "{library} parsed {sample:?} as {parsed:?}, expected {expected:?}"
            );
        }
    }
}

/// Test: the ISO 8601 duration fixture means the same thing everywhere
#[test]
fn test_parse_iso8601_duration_agreement() {
    for contender in parse::iso8601_duration_contenders(parse::ISO8601_DURATION_SAMPLE) {
        let seconds = contender.run().expect("parse failed");
        assert_eq!(seconds, 129_600.0, "{} disagreed", contender.library);
    }
}

/// Test: every library renders random whole-second instants identically
#[test]
fn test_to_rfc3339_string_agreement() {
    for unix in random_timestamps(50) {
        let contenders = dump::rfc3339_string_contenders(unix).expect("timestamp in range");
        let strings: Vec<(contenders::Library, String)> = contenders
            .iter()
            .map(|c| (c.library, c.run().expect("format failed")))
            .collect();

        let (_, reference) = &strings[0];
        for (library, rendered) in &strings {
            assert_eq!(rendered, reference, "{library} rendered {unix} differently");
        }
    }
}

/// Test: forward and backward shifts land on the same instant everywhere
#[test]
fn test_shift_agreement() {
    let shift = TimeShift::sample();
    // Lower bound clears the backward shift so the std baseline, which
    // cannot represent pre-epoch instants, stays in range.
    for unix in random_timestamps_in(20, 50_000_000..=2_000_000_000) {
        for shift in [shift, shift.negated()] {
            let contenders =
                manipulate::shift_contenders(unix, shift).expect("timestamp in range");
            let results: Vec<_> = contenders
                .iter()
                .map(|c| (c.library, c.run().expect("shift failed")))
                .collect();

            assert_same_instant("shift", &results);

            let expected_nanos =
                unix as i128 * 1_000_000_000 + shift.total_microseconds() as i128 * 1_000;
            assert_eq!(results[0].1.instant_nanos(), expected_nanos);
        }
    }
}

/// Test: a backward shift that crosses the epoch is out of range for the
/// std baseline only; every other contender still agrees on the instant
#[test]
fn test_backward_shift_across_epoch() {
    let shift = TimeShift::sample().negated();
    let contenders = manipulate::shift_contenders(1_000_000, shift).expect("timestamp in range");

    let mut agreed: Vec<(Library, NormalizedDateTime)> = Vec::new();
    for contender in &contenders {
        match contender.run() {
            Ok(result) => agreed.push((contender.library, result)),
            Err(error) => {
                assert_eq!(contender.library, Library::Stdlib, "{error}");
                assert!(matches!(error, ContenderError::OutOfRange { .. }), "{error}");
            }
        }
    }

    assert!(agreed.len() >= 3, "too few contenders succeeded: {agreed:?}");
    assert_same_instant("shift_backward", &agreed);
    assert!(agreed[0].1.unix_seconds < 0);
}

/// Test: duration-to-seconds conversions agree everywhere
#[test]
fn test_duration_to_seconds_agreement() {
    let shift = TimeShift::sample();
    let expected = shift.total_microseconds() as f64 / 1_000_000.0;

    for contender in manipulate::total_seconds_contenders(shift).expect("non-negative shift") {
        let seconds = contender.run().expect("conversion failed");
        assert_eq!(seconds, expected, "{} disagreed", contender.library);
    }
}

/// Test: ISO weekday numbers agree everywhere for random dates
#[test]
fn test_isoweekday_agreement() {
    for unix in random_timestamps(50) {
        let contenders = manipulate::weekday_contenders(unix).expect("timestamp in range");
        let weekdays: Vec<(contenders::Library, u8)> = contenders
            .iter()
            .map(|c| (c.library, c.run().expect("weekday failed")))
            .collect();

        let (_, reference) = weekdays[0];
        for (library, weekday) in &weekdays {
            assert!((1..=7).contains(weekday), "{library} weekday out of range");
            assert_eq!(*weekday, reference, "{library} disagreed for {unix}");
        }
    }
}

/// Test: next-Saturday agrees everywhere and actually lands on a Saturday
#[test]
fn test_next_saturday_agreement() {
    for unix in random_timestamps(50) {
        let contenders = manipulate::next_saturday_contenders(unix).expect("timestamp in range");
        let results: Vec<_> = contenders
            .iter()
            .map(|c| (c.library, c.run().expect("next saturday failed")))
            .collect();

        assert_same_instant("next_saturday", &results);

        let saturday_unix = results[0].1.unix_seconds;
        let weekdays = manipulate::weekday_contenders(saturday_unix).expect("in range");
        assert_eq!(weekdays[0].run().expect("weekday failed"), 6);

        // Never more than a week out, never in the past.
        let days_ahead = (saturday_unix - unix) / 86_400;
        assert!((0..7).contains(&days_ahead));
    }
}
