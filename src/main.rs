use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use avwx_parser::cli::args::{Args, Command};
use avwx_parser::cli::commands::{batch, parse};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.get_log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = args.validate() {
        eprintln!("{} {e}", "Error:".bright_red().bold());
        std::process::exit(2);
    }

    let use_color = !args.quiet;
    let output = match &args.command {
        Command::Parse(parse_args) => parse::run(parse_args, &args.output_format, use_color),
        Command::Batch(batch_args) => batch::run(
            batch_args,
            &args.output_format,
            args.show_progress(),
            use_color,
        ),
    };

    match output {
        Ok(rendered) => {
            print!("{rendered}");
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
            std::process::exit(1);
        }
    }
}
