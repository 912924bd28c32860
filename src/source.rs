use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Desired path \"{}\" does not exist.", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read log file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads every line of a log file, each keeping its line terminator
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, logcat
/// captures regularly contain binary noise.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, SourceError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

/// Split text into lines, keeping the trailing `\n` of each
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}
