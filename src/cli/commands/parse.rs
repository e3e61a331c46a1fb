//! The `parse` command: parse one report and render the result

use std::io::Read;

use tracing::info;

use super::shared;
use crate::app::services::report_parser::ReportParser;
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::{Error, Result};

/// Parse a single report from the argument, a file or standard input
pub fn run(args: &ParseArgs, format: &OutputFormat, use_color: bool) -> Result<String> {
    let report_text = resolve_report_text(args)?;
    info!(length = report_text.len(), "parsing report");
    let report = ReportParser::extended_parse(&report_text);
    shared::render_report(&report, format, use_color)
}

fn resolve_report_text(args: &ParseArgs) -> Result<String> {
    if let Some(report) = &args.report {
        return Ok(report.clone());
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .map_err(|e| Error::report_file(path.display().to_string(), e.to_string()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| Error::io("failed to read report from stdin", e))?;
    Ok(buffer)
}
