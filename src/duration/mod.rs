//! Test duration extraction
//!
//! Scans a log for the first start marker and the first finish marker that
//! follows it, then subtracts their leading timestamps.

pub mod error;
pub mod timestamp;

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use error::TimestampError;
pub use timestamp::{DEFAULT_REFERENCE_YEAR, TIMESTAMP_FORMAT, TimestampParser};

pub const DEFAULT_START_MARKER: &str = "TEST STARTED";
pub const DEFAULT_FINISH_MARKER: &str = "TEST FINISHED";

/// Literal text that delimits a test run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub start: String,
    pub finish: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            finish: DEFAULT_FINISH_MARKER.to_string(),
        }
    }
}

/// Elapsed time between the start and finish marker lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDuration {
    pub start: NaiveDateTime,
    pub finish: NaiveDateTime,
    /// 1-based line number of the start marker
    pub start_line: usize,
    /// 1-based line number of the finish marker
    pub finish_line: usize,
}

impl TestDuration {
    pub fn elapsed(&self) -> TimeDelta {
        self.finish.signed_duration_since(self.start)
    }

    /// Elapsed time truncated to whole milliseconds
    pub fn elapsed_ms(&self) -> i64 {
        self.elapsed().num_milliseconds()
    }
}

/// Formats as `H:MM:SS.mmm`, hours are not wrapped into days
impl fmt::Display for TestDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_ms = self.elapsed_ms();
        let sign = if total_ms < 0 { "-" } else { "" };
        let ms = total_ms.unsigned_abs();

        let hours = ms / 3_600_000;
        let minutes = (ms / 60_000) % 60;
        let seconds = (ms / 1_000) % 60;
        let millis = ms % 1_000;

        write!(f, "{sign}{hours}:{minutes:02}:{seconds:02}.{millis:03}")
    }
}

/// Result of a completed duration scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Found(TestDuration),
    /// No start marker, or no finish marker after it
    NotFound,
}

/// Scan lines in order for the start/finish markers and compute the duration
///
/// The first start marker fixes the start time; later start markers are
/// ignored. The scan stops at the first finish marker after it. A marker line
/// with a bad timestamp aborts the whole scan.
pub fn extract_duration<I, S>(
    lines: I,
    markers: &Markers,
    parser: &TimestampParser,
) -> Result<ScanOutcome, TimestampError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut start: Option<(NaiveDateTime, usize)> = None;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = index + 1;

        match start {
            None => {
                if line.contains(markers.start.as_str()) {
                    let ts = parser.parse(line)?;
                    tracing::debug!(line = line_number, timestamp = %ts, "Found start marker");
                    start = Some((ts, line_number));
                }
            }
            Some((start_ts, start_line)) => {
                if line.contains(markers.finish.as_str()) {
                    let finish = parser.parse(line)?;
                    tracing::debug!(line = line_number, timestamp = %finish, "Found finish marker");
                    return Ok(ScanOutcome::Found(TestDuration {
                        start: start_ts,
                        finish,
                        start_line,
                        finish_line: line_number,
                    }));
                }
            }
        }
    }

    tracing::debug!(start_found = start.is_some(), "Markers not found");
    Ok(ScanOutcome::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(lines: &[&str]) -> Result<ScanOutcome, TimestampError> {
        extract_duration(lines, &Markers::default(), &TimestampParser::default())
    }

    fn found(lines: &[&str]) -> TestDuration {
        match scan(lines).unwrap() {
            ScanOutcome::Found(d) => d,
            ScanOutcome::NotFound => panic!("expected a duration"),
        }
    }

    #[test]
    fn test_duration_between_markers() {
        let d = found(&[
            "01-01 09:59:59.000 I App: boot\n",
            "01-01 10:00:00.000 I TestRunner: TEST STARTED\n",
            "01-01 10:00:01.000 I App: working\n",
            "01-01 10:00:02.500 I TestRunner: TEST FINISHED\n",
        ]);
        assert_eq!(d.to_string(), "0:00:02.500");
        assert_eq!(d.elapsed_ms(), 2500);
        assert_eq!((d.start_line, d.finish_line), (2, 4));
    }

    #[test]
    fn test_no_markers_is_not_found() {
        assert_eq!(
            scan(&["01-01 10:00:00.000 I App: hi\n"]).unwrap(),
            ScanOutcome::NotFound
        );
        assert_eq!(scan(&[]).unwrap(), ScanOutcome::NotFound);
    }

    #[test]
    fn test_start_without_finish_is_not_found() {
        let outcome = scan(&["01-01 10:00:00.000 I T: TEST STARTED\n"]).unwrap();
        assert_eq!(outcome, ScanOutcome::NotFound);
    }

    #[test]
    fn test_finish_before_start_is_ignored() {
        let d = found(&[
            "01-01 09:00:00.000 I T: TEST FINISHED\n",
            "01-01 10:00:00.000 I T: TEST STARTED\n",
            "01-01 10:00:03.000 I T: TEST FINISHED\n",
        ]);
        assert_eq!(d.elapsed_ms(), 3000);
    }

    #[test]
    fn test_second_start_marker_is_ignored() {
        let d = found(&[
            "01-01 10:00:00.000 I T: TEST STARTED\n",
            "01-01 10:00:05.000 I T: TEST STARTED\n",
            "01-01 10:00:06.000 I T: TEST FINISHED\n",
        ]);
        assert_eq!(d.elapsed_ms(), 6000);
        assert_eq!(d.start_line, 1);
    }

    #[test]
    fn test_scan_stops_at_first_finish() {
        let d = found(&[
            "01-01 10:00:00.000 I T: TEST STARTED\n",
            "01-01 10:00:01.000 I T: TEST FINISHED\n",
            "garbage TEST FINISHED\n",
        ]);
        assert_eq!(d.finish_line, 2);
    }

    #[test]
    fn test_both_markers_on_one_line_only_start() {
        let d = found(&[
            "01-01 10:00:00.000 I T: TEST STARTED TEST FINISHED\n",
            "01-01 10:00:00.250 I T: TEST FINISHED\n",
        ]);
        assert_eq!(d.to_string(), "0:00:00.250");
    }

    #[test]
    fn test_bad_start_timestamp_aborts() {
        let err = scan(&[
            "I TestRunner: TEST STARTED\n",
            "01-01 10:00:01.000 I T: TEST FINISHED\n",
        ])
        .unwrap_err();
        assert_eq!(err.line, "I TestRunner: TEST STARTED");
    }

    #[test]
    fn test_bad_finish_timestamp_aborts() {
        let err = scan(&[
            "01-01 10:00:00.000 I T: TEST STARTED\n",
            "xx-yy I T: TEST FINISHED\n",
        ])
        .unwrap_err();
        assert_eq!(err.line, "xx-yy I T: TEST FINISHED");
    }

    #[test]
    fn test_leap_second_finish_aborts() {
        let err = scan(&[
            "01-01 10:00:59.500 I T: TEST STARTED\n",
            "01-01 10:00:60.000 I T: TEST FINISHED\n",
        ])
        .unwrap_err();
        assert_eq!(err.line, "01-01 10:00:60.000 I T: TEST FINISHED");
    }

    #[test]
    fn test_unrelated_bad_lines_are_skipped() {
        let d = found(&[
            "--------- beginning of main\n",
            "01-01 10:00:00.000 I T: TEST STARTED\n",
            "--------- beginning of system\n",
            "01-01 10:00:00.001 I T: TEST FINISHED\n",
        ]);
        assert_eq!(d.to_string(), "0:00:00.001");
    }

    #[test]
    fn test_custom_markers() {
        let markers = Markers {
            start: "run begin".to_string(),
            finish: "run end".to_string(),
        };
        let lines = [
            "01-01 10:00:00.000 I T: run begin\n",
            "01-01 10:01:00.000 I T: run end\n",
        ];
        let outcome = extract_duration(lines, &markers, &TimestampParser::default()).unwrap();
        match outcome {
            ScanOutcome::Found(d) => assert_eq!(d.to_string(), "0:01:00.000"),
            ScanOutcome::NotFound => panic!("expected a duration"),
        }
    }

    #[test]
    fn test_display_long_and_negative_durations() {
        let d = found(&[
            "01-01 00:00:00.000 I T: TEST STARTED\n",
            "01-02 01:02:03.004 I T: TEST FINISHED\n",
        ]);
        assert_eq!(d.to_string(), "25:02:03.004");

        let d = found(&[
            "12-31 23:59:59.000 I T: TEST STARTED\n",
            "12-31 23:59:58.500 I T: TEST FINISHED\n",
        ]);
        assert_eq!(d.to_string(), "-0:00:00.500");
    }
}
