use crate::config::ConfigError;
use crate::duration::TimestampError;
use crate::filter::PatternError;
use crate::source::SourceError;
use std::process::ExitCode;
use thiserror::Error;

/// Process exit codes of the `logcat-parser` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    MissingPath = 1,
    PathNotFound = 2,
    TimestampFormat = 3,
    MarkersNotFound = 4,
    Config = 5,
    Io = 6,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Everything that ends a run with a non-zero exit code
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please provide path to logcat file.")]
    MissingPath,

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    #[error("No \"{start}\" and/or \"{finish}\" text sequences in log file.")]
    MarkersNotFound { start: String, finish: String },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

impl AppError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            AppError::MissingPath => ExitStatus::MissingPath,
            AppError::Source(SourceError::NotFound(_)) => ExitStatus::PathNotFound,
            AppError::Source(SourceError::Io { .. }) => ExitStatus::Io,
            AppError::Timestamp(_) => ExitStatus::TimestampFormat,
            AppError::MarkersNotFound { .. } => ExitStatus::MarkersNotFound,
            AppError::Pattern(_) | AppError::Config(_) => ExitStatus::Config,
            AppError::Output(_) => ExitStatus::Io,
        }
    }
}
