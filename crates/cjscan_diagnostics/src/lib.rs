//! cjscan_diagnostics: Error taxonomy and reporting for the CommonJS lexer.
//!
//! Scanning fails on a small, fixed set of conditions (unterminated literals,
//! unbalanced brackets, ES module syntax). Each one is a `DiagnosticMessage`
//! in [`messages`]. Inside the scanner a failure is just a message and an
//! offset ([`ScanError`]); it becomes a full [`LexError`] with a display name,
//! line and column only once it leaves the lexer.

use cjscan_core::text::{LineMap, TextPos};
use std::fmt;
use thiserror::Error;

/// Stable machine-readable code carried by errors that mean "this source is
/// an ES module, not CommonJS".
pub const ESM_SYNTAX_ERROR_CODE: &str = "ERR_LEXER_ESM_SYNTAX";

/// Display name used when the caller does not supply one.
pub const DEFAULT_SOURCE_NAME: &str = "@";

/// The kind of a fatal lexer error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A string literal hit a line terminator or end of input.
    UnterminatedString,
    /// Input ended inside a template literal or one of its `${}` expressions.
    UnterminatedTemplate,
    /// A regular expression literal hit a line terminator or end of input.
    UnterminatedRegex,
    /// A regular expression character class hit a line terminator or end of input.
    UnterminatedRegexClass,
    /// A closing `)` or `}` without an opener, or openers left at end of input.
    UnbalancedBrackets,
    /// A top-level `import` statement or `import.meta`.
    DisallowedImportSyntax,
    /// A top-level `export` statement.
    DisallowedExportSyntax,
}

impl ErrorKind {
    /// Whether this error signals ES module syntax in a CommonJS source.
    pub fn is_esm_syntax(self) -> bool {
        matches!(
            self,
            ErrorKind::DisallowedImportSyntax | ErrorKind::DisallowedExportSyntax
        )
    }

    /// The stable error code for this kind, if it has one.
    pub fn code(self) -> Option<&'static str> {
        self.is_esm_syntax().then_some(ESM_SYNTAX_ERROR_CODE)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::UnterminatedString => "unterminated string",
            ErrorKind::UnterminatedTemplate => "unterminated template",
            ErrorKind::UnterminatedRegex => "unterminated regular expression",
            ErrorKind::UnterminatedRegexClass => "unterminated regular expression class",
            ErrorKind::UnbalancedBrackets => "unbalanced brackets",
            ErrorKind::DisallowedImportSyntax => "import syntax in CommonJS",
            ErrorKind::DisallowedExportSyntax => "export syntax in CommonJS",
        };
        f.write_str(name)
    }
}

/// A diagnostic message template: a kind plus its fixed message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: ErrorKind,
    pub message: &'static str,
}

/// A scanner failure: which message, and the offset (UTF-16 code units) at
/// which it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanError {
    pub message: &'static DiagnosticMessage,
    pub pos: TextPos,
}

impl ScanError {
    #[inline]
    pub fn new(message: &'static DiagnosticMessage, pos: TextPos) -> Self {
        Self { message, pos }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.message.kind
    }
}

/// A fatal lexer error, as returned from the public entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}\n  at {name}:{line}:{column}")]
pub struct LexError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable message, without location.
    pub message: &'static str,
    /// Display name of the source (a file name, or `@`).
    pub name: String,
    /// Offset of the failure in UTF-16 code units.
    pub offset: TextPos,
    /// 1-based line of the failure.
    pub line: u32,
    /// 1-based column of the failure, in UTF-16 code units.
    pub column: u32,
}

impl LexError {
    /// Attach a display name and line/column to a scanner failure.
    ///
    /// This builds a line map over the whole source, so it is only called
    /// on the error path.
    pub fn from_scan_error(err: ScanError, source: &str, name: &str) -> Self {
        let location = LineMap::new(source).line_and_column_of(source, err.pos);
        Self {
            kind: err.kind(),
            message: err.message.message,
            name: name.to_string(),
            offset: err.pos,
            line: location.line,
            column: location.column,
        }
    }

    /// `Some("ERR_LEXER_ESM_SYNTAX")` for ES module syntax errors.
    pub fn code(&self) -> Option<&'static str> {
        self.kind.code()
    }

    pub fn is_esm_syntax(&self) -> bool {
        self.kind.is_esm_syntax()
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($kind:ident, $msg:expr) => {
            DiagnosticMessage { kind: ErrorKind::$kind, message: $msg }
        };
    }

    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(UnterminatedString, "Unterminated string.");
    pub const UNTERMINATED_TEMPLATE: DiagnosticMessage = diag!(UnterminatedTemplate, "Unterminated template.");
    pub const UNTERMINATED_REGEX: DiagnosticMessage = diag!(UnterminatedRegex, "Syntax error reading regular expression.");
    pub const UNTERMINATED_REGEX_CLASS: DiagnosticMessage = diag!(UnterminatedRegexClass, "Syntax error reading regular expression class.");
    pub const UNEXPECTED_CLOSING_BRACKET: DiagnosticMessage = diag!(UnbalancedBrackets, "Unexpected closing bracket.");
    pub const UNEXPECTED_CLOSING_BRACE: DiagnosticMessage = diag!(UnbalancedBrackets, "Unexpected closing brace.");
    pub const UNTERMINATED_BRACES: DiagnosticMessage = diag!(UnbalancedBrackets, "Unterminated braces.");
    pub const UNEXPECTED_IMPORT_STATEMENT: DiagnosticMessage = diag!(DisallowedImportSyntax, "Unexpected import statement in CJS module.");
    pub const UNEXPECTED_IMPORT_META: DiagnosticMessage = diag!(DisallowedImportSyntax, "Unexpected import.meta in CJS module.");
    pub const UNEXPECTED_EXPORT_STATEMENT: DiagnosticMessage = diag!(DisallowedExportSyntax, "Unexpected export statement in CJS module.");
}
