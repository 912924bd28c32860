use thiserror::Error;

/// A marker line whose leading timestamp is missing or unparseable
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Timestamp at line \"{line}\" is not in correct format: {format} ({reason})")]
pub struct TimestampError {
    /// The offending log line, without its line terminator
    pub line: String,
    /// Expected timestamp layout
    pub format: &'static str,
    pub reason: String,
}
