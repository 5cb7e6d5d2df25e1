//! cjscan_lexer: Static detection of CommonJS module exports.
//!
//! Given the source text of one module, reports the property names it
//! exports and the specifiers of modules it re-exports wholesale, without
//! parsing or running it. The scan is a single pass that tracks just enough
//! lexical structure (strings, comments, templates, regular expressions and
//! bracket nesting) to find the export idioms written by hand and emitted
//! by common transpilers.
//!
//! ```
//! let result = cjscan_lexer::parse("exports.a = 1; module.exports.b = 2;").unwrap();
//! assert_eq!(result.exports, ["a", "b"]);
//! assert!(result.reexports.is_empty());
//! ```
//!
//! A source that uses ES module syntax at the top level is rejected with an
//! error whose [`LexError::code`] is [`ESM_SYNTAX_ERROR_CODE`].

mod char_codes;
mod decode;
mod exports;
mod identifier;
mod identifier_tables;
mod matchers;
mod scanner;

pub use cjscan_diagnostics::{ErrorKind, LexError, DEFAULT_SOURCE_NAME, ESM_SYNTAX_ERROR_CODE};
pub use exports::ModuleExports;

use scanner::Scanner;
use tracing::{debug, trace};

/// Readiness hook. The lexer needs no setup, so this returns immediately.
#[inline]
pub fn init() {}

/// Detect the exports of `source`, reporting errors against the name `@`.
pub fn parse(source: &str) -> Result<ModuleExports, LexError> {
    parse_with_name(source, DEFAULT_SOURCE_NAME)
}

/// Detect the exports of `source`, reporting errors against `name`.
pub fn parse_with_name(source: &str, name: &str) -> Result<ModuleExports, LexError> {
    CjsLexer::new().parse(source, name)
}

/// A reusable lexer.
///
/// Holds the scan buffers between calls so that scanning many modules on one
/// thread does not reallocate them each time. Every call starts from a clean
/// state; nothing from a previous source leaks into the next result.
#[derive(Debug, Default)]
pub struct CjsLexer {
    scanner: Scanner,
}

impl CjsLexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detect the exports of `source`, reporting errors against `name`.
    pub fn parse(&mut self, source: &str, name: &str) -> Result<ModuleExports, LexError> {
        self.scanner.reset(source);
        match self.scanner.run() {
            Ok(result) => {
                trace!(
                    name,
                    exports = result.exports.len(),
                    reexports = result.reexports.len(),
                    "scan complete"
                );
                Ok(result)
            }
            Err(err) => {
                debug!(name, offset = err.pos, kind = %err.kind(), "scan failed");
                Err(LexError::from_scan_error(err, source, name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>() {}

    #[test]
    fn test_lexer_is_send() {
        assert_send::<CjsLexer>();
    }

    #[test]
    fn test_lexer_reuse_starts_clean() {
        let mut lexer = CjsLexer::new();
        let first = lexer
            .parse("var _a = require('./a'); exports.x = 1;", "a.js")
            .unwrap();
        assert_eq!(first.exports, ["x"]);

        // The binding `_a` from the previous source must not resolve here.
        let second = lexer
            .parse(
                "Object.keys(_a).forEach(function (k) { if (k === 'default' || k === '__esModule') return; exports[k] = _a[k]; });",
                "b.js",
            )
            .unwrap();
        assert!(second.is_empty());

        let err = lexer.parse("exports.y = 1; (", "c.js").unwrap_err();
        assert_eq!(err.name, "c.js");
        assert_eq!(lexer.parse("exports.z = 1", "d.js").unwrap().exports, ["z"]);
    }

    #[test]
    fn test_default_name() {
        init();
        let err = parse("'open").unwrap_err();
        assert_eq!(err.name, DEFAULT_SOURCE_NAME);
        assert_eq!(err.kind, ErrorKind::UnterminatedString);
    }
}
