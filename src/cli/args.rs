//! Command-line argument definitions for the aviation weather parser
//!
//! Defines the CLI interface using the clap derive API: a `parse` command
//! for single reports and a `batch` command for directories of report
//! files, with shared verbosity and output format flags.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the aviation weather report parser
///
/// Parses METAR, SPECI and TAF reports into typed groups and renders the
/// result as human-readable text or JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "avwx-parser",
    version,
    about = "Parse METAR, SPECI and TAF aviation weather reports",
    long_about = "Parses aviation weather reports (METAR, SPECI and TAF) into typed groups. \
                  Reports are tokenized, each token is classified into a typed group, and the \
                  report structure is checked against the standard group ordering. Malformed \
                  tokens degrade to plain text instead of failing the parse."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Subcommands of the parser CLI
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Parse a single report from an argument, a file or standard input
    Parse(ParseArgs),
    /// Parse every report file found under a directory
    Batch(BatchArgs),
}

/// Arguments for the `parse` command
#[derive(Debug, Clone, clap::Args)]
pub struct ParseArgs {
    /// Report text to parse
    ///
    /// When omitted and no --file is given, the report is read from
    /// standard input.
    #[arg(value_name = "REPORT")]
    pub report: Option<String>,

    /// Read the report from a file instead
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `batch` command
#[derive(Debug, Clone, clap::Args)]
pub struct BatchArgs {
    /// Directory to search for report files
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input_path: PathBuf,

    /// File extension of report files
    ///
    /// Each matching file is parsed line by line: every non-empty line is
    /// treated as one report.
    #[arg(
        short = 'e',
        long = "extension",
        value_name = "EXT",
        default_value = "txt"
    )]
    pub extension: String,

    /// Stop at the first file that cannot be read
    #[arg(long = "stop-on-error")]
    pub stop_on_error: bool,
}

/// Output format options for results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Validate the command line arguments for consistency
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Parse(parse_args) => {
                if parse_args.report.is_some() && parse_args.file.is_some() {
                    return Err(Error::input_validation(
                        "Give either a report argument or --file, not both",
                    ));
                }
                if let Some(file) = &parse_args.file {
                    if !file.exists() {
                        return Err(Error::input_validation(format!(
                            "Report file does not exist: {}",
                            file.display()
                        )));
                    }
                }
            }
            Command::Batch(batch_args) => {
                if !batch_args.input_path.exists() {
                    return Err(Error::input_validation(format!(
                        "Input path does not exist: {}",
                        batch_args.input_path.display()
                    )));
                }
                if !batch_args.input_path.is_dir() {
                    return Err(Error::input_validation(format!(
                        "Input path is not a directory: {}",
                        batch_args.input_path.display()
                    )));
                }
                if batch_args.extension.is_empty() {
                    return Err(Error::input_validation("File extension cannot be empty"));
                }
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args_with_command(command: Command) -> Args {
        Args {
            command,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }

    #[test]
    fn test_parse_args_validation() {
        let args = args_with_command(Command::Parse(ParseArgs {
            report: Some("METAR UKLL 181830Z CAVOK".to_string()),
            file: None,
        }));
        assert!(args.validate().is_ok());

        // Both a report argument and a file are contradictory
        let args = args_with_command(Command::Parse(ParseArgs {
            report: Some("METAR".to_string()),
            file: Some(PathBuf::from("/nonexistent")),
        }));
        assert!(args.validate().is_err());

        // A missing file fails validation
        let args = args_with_command(Command::Parse(ParseArgs {
            report: None,
            file: Some(PathBuf::from("/nonexistent/report.txt")),
        }));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_batch_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let args = args_with_command(Command::Batch(BatchArgs {
            input_path: temp_dir.path().to_path_buf(),
            extension: "txt".to_string(),
            stop_on_error: false,
        }));
        assert!(args.validate().is_ok());

        let args = args_with_command(Command::Batch(BatchArgs {
            input_path: PathBuf::from("/nonexistent/reports"),
            extension: "txt".to_string(),
            stop_on_error: false,
        }));
        assert!(args.validate().is_err());

        let args = args_with_command(Command::Batch(BatchArgs {
            input_path: temp_dir.path().to_path_buf(),
            extension: String::new(),
            stop_on_error: false,
        }));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = args_with_command(Command::Parse(ParseArgs {
            report: None,
            file: None,
        }));
        assert_eq!(args.get_log_level(), "warn");
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");
        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");
        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }
}
