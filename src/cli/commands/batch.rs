//! The `batch` command: parse every report file under a directory
//!
//! Walks the input directory for files with the configured extension and
//! parses each non-empty line of each file as one report, aggregating
//! success statistics across the whole run.

use std::path::{Path, PathBuf};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::app::services::report_parser::{BatchStats, ReportParser};
use crate::cli::args::{BatchArgs, OutputFormat};
use crate::{Error, Result};

/// Parse all report files under the input directory and render a summary
pub fn run(
    args: &BatchArgs,
    format: &OutputFormat,
    show_progress: bool,
    use_color: bool,
) -> Result<String> {
    let files = discover_report_files(&args.input_path, &args.extension)?;
    info!(
        files = files.len(),
        path = %args.input_path.display(),
        "starting batch parse"
    );

    let progress = if show_progress && *format == OutputFormat::Human {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    } else {
        None
    };

    let mut stats = BatchStats::new();
    for path in &files {
        if let Some(bar) = &progress {
            bar.set_message(
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
        }
        match std::fs::read_to_string(path) {
            Ok(content) => parse_file_reports(path, &content, &mut stats),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read report file");
                stats.record_failed_file(format!("{}: {e}", path.display()));
                if args.stop_on_error {
                    if let Some(bar) = &progress {
                        bar.abandon();
                    }
                    return Err(Error::report_file(
                        path.display().to_string(),
                        e.to_string(),
                    ));
                }
            }
        }
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    render_summary(&stats, format, use_color)
}

/// Collect report files with the configured extension, sorted for stable
/// output
fn discover_report_files(input_path: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(input_path) {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("failed to walk {}", input_path.display()), e)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse every non-empty line of a file as one report
fn parse_file_reports(path: &Path, content: &str, stats: &mut BatchStats) {
    for (line_number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let result = ReportParser::parse(line);
        match result.error {
            None => stats.record_report(true),
            Some(error) => {
                debug!(
                    path = %path.display(),
                    line = line_number + 1,
                    %error,
                    "report failed to parse"
                );
                stats.record_report(false);
                stats
                    .errors
                    .push(format!("{}:{}: {error}", path.display(), line_number + 1));
            }
        }
    }
}

fn render_summary(stats: &BatchStats, format: &OutputFormat, use_color: bool) -> Result<String> {
    if *format == OutputFormat::Json {
        return serde_json::to_string_pretty(stats)
            .map_err(|e| Error::json("failed to serialize batch statistics", e));
    }
    let mut out = String::new();
    let headline = format!(
        "parsed {} reports: {} ok, {} with errors ({:.1}% success)",
        stats.reports_processed,
        stats.reports_ok,
        stats.reports_with_errors,
        stats.success_rate()
    );
    if use_color {
        let colored_headline = if stats.is_successful() {
            headline.bright_green()
        } else {
            headline.bright_yellow()
        };
        out.push_str(&format!("{colored_headline}\n"));
    } else {
        out.push_str(&headline);
        out.push('\n');
    }
    if stats.files_failed > 0 {
        out.push_str(&format!("{} files could not be read\n", stats.files_failed));
    }
    for error in stats.errors.iter().take(10) {
        out.push_str(&format!("  {error}\n"));
    }
    if stats.errors.len() > 10 {
        out.push_str(&format!("  ... and {} more\n", stats.errors.len() - 10));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_report_file(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_batch_over_directory() {
        let temp_dir = TempDir::new().unwrap();
        write_report_file(
            temp_dir.path(),
            "ok.txt",
            "METAR UKLL 181830Z 27005MPS CAVOK 10/08 Q1013=\n\
             TAF KJFK 181120Z 1812/1912 CAVOK=\n",
        );
        write_report_file(temp_dir.path(), "bad.txt", "METAR\n");
        write_report_file(temp_dir.path(), "ignored.dat", "not a report file\n");

        let args = BatchArgs {
            input_path: temp_dir.path().to_path_buf(),
            extension: "txt".to_string(),
            stop_on_error: false,
        };
        let summary = run(&args, &OutputFormat::Human, false, false).unwrap();
        assert!(summary.contains("parsed 3 reports: 2 ok, 1 with errors"));
    }

    #[test]
    fn test_batch_json_summary() {
        let temp_dir = TempDir::new().unwrap();
        write_report_file(temp_dir.path(), "ok.txt", "METAR UKLL 181830Z CAVOK=\n");
        let args = BatchArgs {
            input_path: temp_dir.path().to_path_buf(),
            extension: "txt".to_string(),
            stop_on_error: false,
        };
        let summary = run(&args, &OutputFormat::Json, false, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&summary).unwrap();
        assert_eq!(value["reports_processed"], 1);
        assert_eq!(value["reports_ok"], 1);
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let args = BatchArgs {
            input_path: temp_dir.path().to_path_buf(),
            extension: "txt".to_string(),
            stop_on_error: false,
        };
        let summary = run(&args, &OutputFormat::Human, false, false).unwrap();
        assert!(summary.contains("parsed 0 reports"));
    }

    #[test]
    fn test_subdirectories_are_walked() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("2026").join("08");
        fs::create_dir_all(&nested).unwrap();
        write_report_file(&nested, "deep.txt", "METAR UKLL 181830Z CAVOK=\n");
        let args = BatchArgs {
            input_path: temp_dir.path().to_path_buf(),
            extension: "txt".to_string(),
            stop_on_error: false,
        };
        let summary = run(&args, &OutputFormat::Human, false, false).unwrap();
        assert!(summary.contains("parsed 1 reports"));
    }
}
