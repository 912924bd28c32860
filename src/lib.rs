pub mod cli;
pub mod config;
pub mod duration;
pub mod errors;
pub mod filter;
pub mod logging;
pub mod output;
pub mod source;

use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

pub use cli::{Cli, ColorMode, OutputFormat, cli_parse};
pub use config::{ParserConfig, load_config};
pub use duration::{
    Markers, ScanOutcome, TestDuration, TimestampError, TimestampParser, extract_duration,
};
pub use errors::{AppError, ExitStatus};
pub use filter::{DuplicatePolicy, LineFilter, PatternError, PatternSet};
pub use source::{SourceError, read_lines};

/// Compile include/exclude words into a line filter
pub fn build_line_filter(
    include: &[String],
    exclude: &[String],
    policy: DuplicatePolicy,
) -> Result<LineFilter, PatternError> {
    let include = PatternSet::compile(include)?;
    let exclude = PatternSet::compile(exclude)?;
    Ok(LineFilter::new(include, exclude).with_policy(policy))
}

fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
}

/// Run the filter or the duration scan selected by `cli`, returning the rendered report
pub fn execute(cli: &Cli) -> Result<String, AppError> {
    let path = cli.path.as_deref().ok_or(AppError::MissingPath)?;
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()).into());
    }

    let config = load_config(cli.config.as_deref())?;

    let rendered = if cli.test_duration {
        if cli.include.is_some() || cli.exclude.is_some() {
            tracing::warn!("Ignoring --include/--exclude in test duration mode");
        }
        run_duration(path, &config, cli.format)?
    } else {
        let policy = if cli.keep_duplicates {
            DuplicatePolicy::Repeat
        } else {
            config.filter.duplicate_policy()
        };
        let filter = build_line_filter(&cli.include_words(), &cli.exclude_words(), policy)?;
        run_filter(path, &filter, cli.format)?
    };

    if let Some(out_path) = &cli.output {
        output::write_output_file(out_path, &rendered)?;
    }

    Ok(rendered)
}

fn run_filter(path: &Path, filter: &LineFilter, format: OutputFormat) -> Result<String, AppError> {
    let lines = read_lines(path)?;
    let emitted = filter.filter(&lines);

    Ok(match format {
        OutputFormat::Text => output::format_filter_text(&emitted),
        OutputFormat::Json => output::format_filter_json(&emitted)?,
    })
}

fn run_duration(
    path: &Path,
    config: &ParserConfig,
    format: OutputFormat,
) -> Result<String, AppError> {
    let lines = read_lines(path)?;

    match extract_duration(&lines, &config.markers, &config.timestamp_parser())? {
        ScanOutcome::Found(duration) => Ok(match format {
            OutputFormat::Text => output::format_duration_text(&duration),
            OutputFormat::Json => output::format_duration_json(&duration)?,
        }),
        ScanOutcome::NotFound => Err(AppError::MarkersNotFound {
            start: config.markers.start.clone(),
            finish: config.markers.finish.clone(),
        }),
    }
}

pub fn run() -> ExitCode {
    let cli = cli_parse();
    logging::init(cli.verbose);
    apply_color_mode(cli.color);

    match execute(&cli) {
        Ok(rendered) => {
            print!("{rendered}");
            ExitStatus::Success.into()
        }
        Err(e) => {
            let status = e.exit_status();
            tracing::debug!(error = ?e, code = status.code(), "Run failed");
            eprintln!("{}", e.to_string().red());
            status.into()
        }
    }
}
