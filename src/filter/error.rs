use thiserror::Error;

/// Errors that can occur when compiling include/exclude patterns
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Invalid pattern '{pattern}': {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// The pattern text that failed to compile
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::Compile { pattern, .. } => pattern,
        }
    }
}
