use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Returns logcat lines which match or do not match particular words, or the
/// test duration between the 'TEST STARTED' and 'TEST FINISHED' lines.
///
/// Words are separated with commas, without blank characters:
///
///   logcat-parser logcat.txt -i word1,word2,word3
///   logcat-parser logcat.txt -i word1 -e word2,word3
///   logcat-parser logcat.txt -s
#[derive(Debug, Parser)]
#[command(author, version, about, verbatim_doc_comment)]
pub struct Cli {
    /// Path to the logcat file
    pub path: Option<PathBuf>,

    /// Prints out lines that contain any of the comma separated words
    #[arg(short, long, value_name = "INCLUDED_WORD[,INCLUDED_WORD]")]
    pub include: Option<String>,

    /// Prints out lines that do not contain any of the comma separated words
    #[arg(short, long, value_name = "EXCLUDED_WORD[,EXCLUDED_WORD]")]
    pub exclude: Option<String>,

    /// Prints out the test time duration
    #[arg(short = 's', long = "test-duration")]
    pub test_duration: bool,

    /// Print a line twice when it passes through both the include and the default path
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the result to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML file with marker and timestamp settings
    #[arg(long, env = "LOGCAT_PARSER_CONFIG")]
    pub config: Option<PathBuf>,

    /// When to colorize diagnostics
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// Include words, split on literal commas
    pub fn include_words(&self) -> Vec<String> {
        self.include
            .as_deref()
            .map(crate::filter::split_words)
            .unwrap_or_default()
    }

    /// Exclude words, split on literal commas
    pub fn exclude_words(&self) -> Vec<String> {
        self.exclude
            .as_deref()
            .map(crate::filter::split_words)
            .unwrap_or_default()
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
