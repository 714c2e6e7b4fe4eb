//! Suite builders wiring the contender tables into the runner
//!
//! One suite per operation family: clock reads, parsing, formatting, and
//! arithmetic.

use crate::runner::BenchmarkSuite;
use contenders::manipulate::TimeShift;
use contenders::{clock, dump, manipulate, parse, ContenderResult};

/// The names of every suite, in run order.
pub const SUITE_NAMES: [&str; 4] = ["clock", "parse", "dump", "manipulate"];

/// Clock reads: current instant in UTC and in the local zone.
pub fn clock_suite() -> ContenderResult<BenchmarkSuite> {
    let mut suite = BenchmarkSuite::new("clock");
    suite.add_contenders("now_utc", clock::now_utc_contenders());
    suite.add_contenders("now_local", clock::now_local_contenders());
    Ok(suite)
}

/// Parsing: timestamps, ISO 8601, the RFC 3339 examples, durations.
pub fn parse_suite() -> ContenderResult<BenchmarkSuite> {
    let mut suite = BenchmarkSuite::new("parse");
    suite.add_contenders(
        "parse_from_timestamp",
        parse::from_timestamp_contenders(parse::UNIX_TIMESTAMP_SAMPLE),
    );
    suite.add_contenders(
        "parse_iso8601",
        parse::iso8601_contenders(parse::ISO8601_SAMPLE),
    );
    suite.add_contenders("parse_rfc3339_examples", parse::rfc3339_contenders());
    suite.add_contenders(
        "parse_iso8601_duration",
        parse::iso8601_duration_contenders(parse::ISO8601_DURATION_SAMPLE),
    );
    Ok(suite)
}

/// Formatting: datetime to RFC 3339 string.
pub fn dump_suite() -> ContenderResult<BenchmarkSuite> {
    let mut suite = BenchmarkSuite::new("dump");
    suite.add_contenders(
        "to_rfc3339_string",
        dump::rfc3339_string_contenders(parse::UNIX_TIMESTAMP_SAMPLE)?,
    );
    Ok(suite)
}

/// Arithmetic: shifts, duration conversion, weekday queries.
pub fn manipulate_suite() -> ContenderResult<BenchmarkSuite> {
    let base = parse::UNIX_TIMESTAMP_SAMPLE;
    let shift = TimeShift::sample();

    let mut suite = BenchmarkSuite::new("manipulate");
    suite.add_contenders("shift_forward", manipulate::shift_contenders(base, shift)?);
    suite.add_contenders(
        "shift_backward",
        manipulate::shift_contenders(base, shift.negated())?,
    );
    suite.add_contenders(
        "duration_to_seconds",
        manipulate::total_seconds_contenders(shift)?,
    );
    suite.add_contenders("isoweekday", manipulate::weekday_contenders(base)?);
    suite.add_contenders(
        "next_saturday",
        manipulate::next_saturday_contenders(base)?,
    );
    Ok(suite)
}

/// Every suite, in run order.
pub fn all_suites() -> ContenderResult<Vec<BenchmarkSuite>> {
    Ok(vec![
        clock_suite()?,
        parse_suite()?,
        dump_suite()?,
        manipulate_suite()?,
    ])
}
