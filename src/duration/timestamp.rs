use super::error::TimestampError;
use chrono::{NaiveDateTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// Leading `MM-DD HH:MM:SS.mmm` field of a logcat line
static TIMESTAMP_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9-]+ [0-9:.]+)").expect("valid timestamp prefix regex"));

/// Human readable layout reported in errors
pub const TIMESTAMP_FORMAT: &str = "%m-%d %H:%M:%S.%f";

/// Year assumed for year-less logcat timestamps
pub const DEFAULT_REFERENCE_YEAR: i32 = 2000;

/// Padding that widens the log's millisecond field to microseconds
const MICROS_PADDING: &str = "000";

/// Maximum fractional digits the log may carry before padding
const MAX_FRACTION_DIGITS: usize = 3;

/// Parses the timestamp prefix of logcat lines
#[derive(Debug, Clone, Copy)]
pub struct TimestampParser {
    reference_year: i32,
}

impl Default for TimestampParser {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_YEAR)
    }
}

impl TimestampParser {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Extract and parse the timestamp at the start of `line`
    pub fn parse(&self, line: &str) -> Result<NaiveDateTime, TimestampError> {
        let prefix = TIMESTAMP_PREFIX_RE
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| timestamp_error(line, "no leading timestamp".to_string()))?;

        let fraction_digits = prefix.rsplit_once('.').map(|(_, frac)| frac.len());
        if fraction_digits.is_some_and(|digits| digits > MAX_FRACTION_DIGITS) {
            return Err(timestamp_error(
                line,
                format!("fractional seconds in '{prefix}' exceed millisecond precision"),
            ));
        }

        let padded = format!("{}-{prefix}{MICROS_PADDING}", self.reference_year);
        let ts = NaiveDateTime::parse_from_str(&padded, "%Y-%m-%d %H:%M:%S%.f")
            .map_err(|e| timestamp_error(line, format!("'{prefix}': {e}")))?;

        // chrono stores second 60 as a leap second in the nanosecond field
        if ts.nanosecond() >= 1_000_000_000 {
            return Err(timestamp_error(line, format!("'{prefix}': second out of range")));
        }

        Ok(ts)
    }
}

fn timestamp_error(line: &str, reason: String) -> TimestampError {
    TimestampError {
        line: line.trim_end_matches(['\r', '\n']).to_string(),
        format: TIMESTAMP_FORMAT,
        reason,
    }
}
