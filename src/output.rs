use crate::duration::TestDuration;
use anyhow::Context;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::Path;

/// Layout used to echo marker timestamps back, without the assumed year
const ECHO_TIMESTAMP_FORMAT: &str = "%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone, Serialize)]
pub struct FilterReport<'a> {
    pub emitted: usize,
    pub lines: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
pub struct DurationReport {
    pub duration: String,
    pub duration_ms: i64,
    pub start_line: usize,
    pub finish_line: usize,
    pub start: String,
    pub finish: String,
}

impl From<&TestDuration> for DurationReport {
    fn from(d: &TestDuration) -> Self {
        Self {
            duration: d.to_string(),
            duration_ms: d.elapsed_ms(),
            start_line: d.start_line,
            finish_line: d.finish_line,
            start: echo_timestamp(&d.start),
            finish: echo_timestamp(&d.finish),
        }
    }
}

fn echo_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(ECHO_TIMESTAMP_FORMAT).to_string()
}

/// Emitted lines joined as-is, followed by a final newline
pub fn format_filter_text(lines: &[String]) -> String {
    let mut out = lines.concat();
    out.push('\n');
    out
}

pub fn format_filter_json(lines: &[String]) -> anyhow::Result<String> {
    let report = FilterReport {
        emitted: lines.len(),
        lines,
    };
    to_json(&report)
}

pub fn format_duration_text(duration: &TestDuration) -> String {
    format!("Test duration: {duration}\n")
}

pub fn format_duration_json(duration: &TestDuration) -> anyhow::Result<String> {
    to_json(&DurationReport::from(duration))
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Error serializing output")?;
    json.push('\n');
    Ok(json)
}

pub fn write_output_file(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::{Markers, ScanOutcome, TimestampParser, extract_duration};

    fn sample_duration() -> TestDuration {
        let lines = [
            "01-01 10:00:00.000 I T: TEST STARTED\n",
            "01-01 10:00:02.500 I T: TEST FINISHED\n",
        ];
        match extract_duration(lines, &Markers::default(), &TimestampParser::default()).unwrap() {
            ScanOutcome::Found(d) => d,
            ScanOutcome::NotFound => panic!("expected a duration"),
        }
    }

    #[test]
    fn test_filter_text_is_concatenation() {
        let lines = vec!["a\n".to_string(), "b\n".to_string()];
        assert_eq!(format_filter_text(&lines), "a\nb\n\n");
        assert_eq!(format_filter_text(&[]), "\n");
    }

    #[test]
    fn test_filter_json() {
        let lines = vec!["ERROR bad\n".to_string()];
        let value: serde_json::Value =
            serde_json::from_str(&format_filter_json(&lines).unwrap()).unwrap();
        assert_eq!(value["emitted"], 1);
        assert_eq!(value["lines"][0], "ERROR bad\n");
    }

    #[test]
    fn test_duration_text() {
        assert_eq!(
            format_duration_text(&sample_duration()),
            "Test duration: 0:00:02.500\n"
        );
    }

    #[test]
    fn test_duration_json() {
        let value: serde_json::Value =
            serde_json::from_str(&format_duration_json(&sample_duration()).unwrap()).unwrap();
        assert_eq!(value["duration"], "0:00:02.500");
        assert_eq!(value["duration_ms"], 2500);
        assert_eq!(value["start_line"], 1);
        assert_eq!(value["finish_line"], 2);
        assert_eq!(value["start"], "01-01 10:00:00.000");
        assert_eq!(value["finish"], "01-01 10:00:02.500");
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn test_serialization_failure_is_error() {
        let err = to_json(&Unserializable).unwrap_err();
        let app_err = crate::AppError::from(err);
        assert_eq!(app_err.exit_status(), crate::ExitStatus::Io);
        assert!(format!("{app_err:#}").contains("serializing"), "{app_err:#}");
    }

    #[test]
    fn test_write_output_file_reports_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("no-such-dir").join("out.txt");
        let err = write_output_file(&path, "x").unwrap_err();
        assert!(format!("{err:#}").contains("out.txt"), "{err:#}");
    }
}
