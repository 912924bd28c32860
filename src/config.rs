use crate::duration::{DEFAULT_REFERENCE_YEAR, Markers, TimestampParser};
use crate::filter::DuplicatePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub markers: Markers,
    pub timestamp: TimestampRules,
    pub filter: FilterRules,
}

impl ParserConfig {
    pub fn timestamp_parser(&self) -> TimestampParser {
        TimestampParser::new(self.timestamp.reference_year)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampRules {
    /// Year assumed for the year-less logcat timestamps
    pub reference_year: i32,
}

impl Default for TimestampRules {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRules {
    pub keep_duplicates: bool,
}

impl FilterRules {
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.keep_duplicates {
            DuplicatePolicy::Repeat
        } else {
            DuplicatePolicy::Collapse
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ParserConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(ParserConfig::default())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ParserConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<ParserConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}
