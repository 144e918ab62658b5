use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use linecode_core::{Coding, LineReport, decode_line};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("LINECODE_BUILD_COMMIT"),
    " ",
    env!("LINECODE_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "linecode")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode captured Manchester / differential Manchester bitstreams.",
    long_about = None,
    after_help = "Examples:\n  linecode manchester 01001011\n  linecode mc '{16}abcd'\n  linecode differential --json -o report.json 01001011"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode lines as standard Manchester (transition within the slot).
    #[command(alias = "mc")]
    #[command(
        after_help = "Examples:\n  linecode manchester 01001011\n  linecode manchester '{16}abcd' d391"
    )]
    Manchester {
        #[command(flatten)]
        args: DecodeArgs,
    },
    /// Decode lines as differential Manchester (transition at the slot boundary).
    #[command(alias = "dm")]
    #[command(
        after_help = "Examples:\n  linecode differential 01001011\n  linecode dm '{16}abcd' d391"
    )]
    Differential {
        #[command(flatten)]
        args: DecodeArgs,
    },
}

#[derive(Args, Debug)]
struct DecodeArgs {
    /// Capture lines: binary digits or hex, with optional {N} length marker
    #[arg(required = true)]
    lines: Vec<String>,

    /// Emit per-line JSON reports instead of plain bit groups
    #[arg(long)]
    json: bool,

    /// Write the JSON output to a file instead of stdout
    #[arg(short = 'o', long, requires = "json")]
    report: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, requires = "json", conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long, requires = "json")]
    compact: bool,

    /// Suppress non-error output on stderr
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Manchester { args } => cmd_decode(Coding::Manchester, args),
        Commands::Differential { args } => cmd_decode(Coding::DifferentialManchester, args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_decode(coding: Coding, args: DecodeArgs) -> Result<(), CliError> {
    // One malformed capture must not halt the batch: bad lines are
    // reported as they occur and counted for the exit status.
    let mut reports = Vec::with_capacity(args.lines.len());
    let mut failed = 0usize;
    for (index, line) in args.lines.iter().enumerate() {
        match decode_line(coding, line) {
            Ok(report) => reports.push(report),
            Err(err) => {
                failed += 1;
                eprintln!("error: line {}: {}", index + 1, err);
            }
        }
    }

    if args.json {
        emit_json(&reports, &args)?;
    } else {
        for report in &reports {
            for group in &report.groups {
                println!("{} {}", group.bits, group.hex);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::new(
            format!("{failed} line(s) failed to decode"),
            Some("payloads must be binary or hexadecimal digits".to_string()),
        ));
    }
    Ok(())
}

fn emit_json(reports: &[LineReport], args: &DecodeArgs) -> Result<(), CliError> {
    let json = if args.pretty {
        serde_json::to_string_pretty(reports)
            .context("JSON serialization failed")
            .map_err(CliError::from)?
    } else {
        serde_json::to_string(reports)
            .context("JSON serialization failed")
            .map_err(CliError::from)?
    };

    let Some(report_path) = args.report.as_ref() else {
        println!("{}", json);
        return Ok(());
    };

    if let Some(parent) = report_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })
                .map_err(CliError::from)?;
        }
    }
    fs::write(report_path, json)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))
        .map_err(CliError::from)?;

    if !args.quiet {
        eprintln!("OK: report written -> {}", report_path.display());
    }
    Ok(())
}
