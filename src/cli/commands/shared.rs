//! Shared rendering helpers for CLI commands

use colored::Colorize;

use crate::app::services::report_parser::ExtendedReport;
use crate::cli::args::OutputFormat;
use crate::{Error, Result};

/// Render a parsed report in the requested output format
pub fn render_report(report: &ExtendedReport, format: &OutputFormat, use_color: bool) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| Error::json("failed to serialize parsed report", e)),
        OutputFormat::Human => Ok(render_human(report, use_color)),
    }
}

fn render_human(report: &ExtendedReport, use_color: bool) -> String {
    let mut out = String::new();
    let type_label = format!("{:?}", report.report_type).to_uppercase();
    if use_color {
        out.push_str(&format!(
            "{} {}\n",
            "report type:".bright_cyan(),
            type_label.bright_white().bold()
        ));
    } else {
        out.push_str(&format!("report type: {type_label}\n"));
    }

    match &report.error {
        None => {
            if use_color {
                out.push_str(&format!("{} {}\n", "status:".bright_cyan(), "ok".bright_green()));
            } else {
                out.push_str("status: ok\n");
            }
        }
        Some(error) => {
            if use_color {
                out.push_str(&format!(
                    "{} {}\n",
                    "error:".bright_cyan(),
                    error.to_string().bright_red()
                ));
            } else {
                out.push_str(&format!("error: {error}\n"));
            }
        }
    }

    out.push_str(&format!("groups: {}\n", report.groups.len()));
    for info in &report.groups {
        let part = format!("{:?}", info.report_part).to_lowercase();
        let validity = if info.group.is_valid() { "" } else { "  (invalid)" };
        let line = format!(
            "  [{:<7}] {:<24} {}{}\n",
            part,
            info.source,
            info.group.kind_name(),
            validity
        );
        if use_color && !info.group.is_valid() {
            out.push_str(&line.yellow().to_string());
        } else {
            out.push_str(&line);
        }
    }
    out
}
