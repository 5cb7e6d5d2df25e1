//! cjscan: Report the exports of CommonJS modules.
//!
//! Usage:
//!   cjscan [options] <file...>
//!
//! Prints, for each file, the names it exports and the modules it re-exports
//! wholesale. Exits with 0 when every file scanned, 1 when any file was
//! rejected by the lexer, and 2 on usage errors or unreadable files.

use cjscan_cli::{diagnostics, exit_code, render_json, render_text, scan_files, EXIT_FAILURE};
use clap::{Parser as ClapParser, ValueEnum};
use miette::{miette, IntoDiagnostic, WrapErr};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "CJSCAN_LOG";

#[derive(ClapParser, Debug)]
#[command(name = "cjscan", version, about = "Detect the exports of CommonJS modules")]
struct Cli {
    /// JavaScript files to scan.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Number of worker threads (defaults to the number of cores).
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Name to report in error messages instead of the file path.
    #[arg(long)]
    name: Option<String>,

    /// Log scanning progress to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(report) => {
            eprintln!("{:?}", report);
            EXIT_FAILURE
        }
    };
    process::exit(code);
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> miette::Result<i32> {
    if cli.name.is_some() && cli.files.len() > 1 {
        return Err(miette!("--name can only be used with a single input file"));
    }

    let reports = scan_files(&cli.files, cli.name.as_deref(), cli.jobs)
        .into_diagnostic()
        .wrap_err("failed to start worker threads")?;
    let code = exit_code(&reports);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => {
            render_text(&reports, &mut out).into_diagnostic()?;
            out.flush().into_diagnostic()?;
            for report in diagnostics(reports) {
                eprintln!("{:?}", report);
            }
        }
        Format::Json => {
            render_json(&reports, cli.pretty, &mut out).into_diagnostic()?;
            out.flush().into_diagnostic()?;
        }
    }
    Ok(code)
}
