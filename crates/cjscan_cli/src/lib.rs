//! cjscan_cli: File scanning and report rendering behind the `cjscan` binary.
//!
//! Files are scanned in parallel on a rayon pool, each worker thread reusing
//! one [`CjsLexer`]. Every input produces a [`FileReport`], in input order,
//! whether it scanned, failed to lex, or could not be read.

use cjscan_core::text::byte_offset_of;
use cjscan_lexer::{CjsLexer, LexError, ModuleExports};
use miette::{Diagnostic, NamedSource, SourceSpan};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Exit code when every input scanned.
pub const EXIT_OK: i32 = 0;
/// Exit code when at least one input failed to lex.
pub const EXIT_LEX_ERROR: i32 = 1;
/// Exit code for usage errors and unreadable inputs.
pub const EXIT_FAILURE: i32 = 2;

// ============================================================================
// Reports
// ============================================================================

/// The outcome of scanning one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// Name used in error messages.
    pub name: String,
    pub outcome: Outcome,
}

#[derive(Debug)]
pub enum Outcome {
    Scanned(ModuleExports),
    /// The lexer rejected the file. The source is kept for rendering.
    LexFailed { error: LexError, source: String },
    Unreadable(InputError),
}

/// An input that never reached the lexer.
#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    #[diagnostic(code(cjscan::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    #[diagnostic(code(cjscan::encoding))]
    InvalidUtf8 { path: PathBuf },
}

/// A lexer error rendered against its source.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cjscan::lex))]
pub struct LexDiagnostic {
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("detected here")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

impl LexDiagnostic {
    pub fn new(error: &LexError, source: &str) -> Self {
        let start = byte_offset_of(source, error.offset);
        let len = source[start..].chars().next().map_or(0, char::len_utf8);
        let help = error
            .code()
            .map(|code| format!("{code}: this file uses ES module syntax; it is not a CommonJS module"));
        Self {
            message: error.message.to_string(),
            source_code: NamedSource::new(&error.name, source.to_string()),
            span: (start, len).into(),
            help,
        }
    }
}

// ============================================================================
// Scanning
// ============================================================================

/// Scan all `paths` on a pool of `jobs` threads (all cores when `None`).
/// `name` replaces the display name of every input.
pub fn scan_files(
    paths: &[PathBuf],
    name: Option<&str>,
    jobs: Option<usize>,
) -> Result<Vec<FileReport>, rayon::ThreadPoolBuildError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()?;
    debug!(files = paths.len(), threads = pool.current_num_threads(), "scanning");
    Ok(pool.install(|| {
        paths
            .par_iter()
            .map_init(CjsLexer::new, |lexer, path| scan_file(lexer, path, name))
            .collect()
    }))
}

/// Read and scan one file.
pub fn scan_file(lexer: &mut CjsLexer, path: &Path, name: Option<&str>) -> FileReport {
    let name = name.map_or_else(|| path.display().to_string(), str::to_string);
    let outcome = match read_source(path) {
        Ok(source) => match lexer.parse(&source, &name) {
            Ok(result) => Outcome::Scanned(result),
            Err(error) => Outcome::LexFailed { error, source },
        },
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unreadable input");
            Outcome::Unreadable(err)
        }
    };
    FileReport {
        path: path.to_path_buf(),
        name,
        outcome,
    }
}

fn read_source(path: &Path) -> Result<String, InputError> {
    let bytes = fs::read(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = simdutf8::basic::from_utf8(&bytes).map_err(|_| InputError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    Ok(source.to_owned())
}

/// 2 if any input was unreadable, else 1 if any failed to lex, else 0.
pub fn exit_code(reports: &[FileReport]) -> i32 {
    let mut code = EXIT_OK;
    for report in reports {
        match report.outcome {
            Outcome::Unreadable(_) => return EXIT_FAILURE,
            Outcome::LexFailed { .. } => code = EXIT_LEX_ERROR,
            Outcome::Scanned(_) => {}
        }
    }
    code
}

/// Diagnostics for every failed input, in input order.
pub fn diagnostics(reports: Vec<FileReport>) -> Vec<miette::Report> {
    reports
        .into_iter()
        .filter_map(|report| match report.outcome {
            Outcome::Scanned(_) => None,
            Outcome::LexFailed { error, source } => {
                Some(miette::Report::new(LexDiagnostic::new(&error, &source)))
            }
            Outcome::Unreadable(err) => Some(miette::Report::new(err)),
        })
        .collect()
}

// ============================================================================
// Rendering
// ============================================================================

/// Plain text: the file name, then one line per export and re-export.
/// Failed inputs are left to [`diagnostics`].
pub fn render_text(reports: &[FileReport], out: &mut dyn Write) -> io::Result<()> {
    for report in reports {
        let Outcome::Scanned(result) = &report.outcome else {
            continue;
        };
        writeln!(out, "{}", report.name)?;
        for name in &result.exports {
            writeln!(out, "  export {name}")?;
        }
        for specifier in &result.reexports {
            writeln!(out, "  reexport {specifier}")?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonEntry<'a> {
    Scanned {
        file: &'a str,
        exports: &'a [String],
        reexports: &'a [String],
    },
    Failed {
        file: &'a str,
        error: JsonError<'a>,
    },
}

#[derive(Serialize)]
struct JsonError<'a> {
    kind: String,
    message: String,
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<usize>,
}

impl<'a> JsonEntry<'a> {
    fn new(report: &'a FileReport) -> Self {
        let file = report.name.as_str();
        match &report.outcome {
            Outcome::Scanned(result) => JsonEntry::Scanned {
                file,
                exports: &result.exports,
                reexports: &result.reexports,
            },
            Outcome::LexFailed { error, .. } => JsonEntry::Failed {
                file,
                error: JsonError {
                    kind: error.kind.to_string(),
                    message: error.message.to_string(),
                    code: error.code(),
                    line: Some(error.line),
                    column: Some(error.column),
                    offset: Some(error.offset),
                },
            },
            Outcome::Unreadable(err) => JsonEntry::Failed {
                file,
                error: JsonError {
                    kind: "unreadable input".to_string(),
                    message: err.to_string(),
                    code: None,
                    line: None,
                    column: None,
                    offset: None,
                },
            },
        }
    }
}

/// A JSON array with one object per input, in input order.
pub fn render_json(reports: &[FileReport], pretty: bool, out: &mut dyn Write) -> serde_json::Result<()> {
    let entries: Vec<JsonEntry<'_>> = reports.iter().map(JsonEntry::new).collect();
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &entries)?;
    } else {
        serde_json::to_writer(&mut *out, &entries)?;
    }
    writeln!(out).map_err(serde_json::Error::io)
}
