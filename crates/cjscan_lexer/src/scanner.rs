//! The scanner core: a single pass over the UTF-16 source that tracks
//! bracket nesting, template literals and the division/regex ambiguity, and
//! hands off to the export-pattern matchers in `matchers.rs`.
//!
//! All positions are indices into `source`. Reads outside the buffer yield
//! [`NULL`], so look-behind and look-ahead checks never need bounds tests.

use crate::char_codes::*;
use crate::decode::decode_string_literal;
use crate::exports::{ExportCollector, ModuleExports};
use crate::identifier::{code_point_at, is_identifier_char, is_identifier_start};
use crate::matchers::RequireType;
use cjscan_diagnostics::{messages, DiagnosticMessage, ScanError};
use std::ops::Range;

/// Scanner state for one module. Reused across scans by [`crate::CjsLexer`];
/// [`Scanner::reset`] restores it to a blank state while keeping allocations.
#[derive(Debug, Default)]
pub(crate) struct Scanner {
    /// The source text as UTF-16 code units.
    pub(crate) source: Vec<u16>,
    /// Current position.
    pub(crate) pos: usize,
    /// Number of unmatched `(`, `{` and `${`.
    pub(crate) open_token_depth: usize,
    /// Depth at which the innermost open template interpolation resumes.
    template_depth: Option<usize>,
    /// Saved `template_depth` of enclosing templates.
    template_stack: Vec<Option<usize>>,
    /// Per depth: the last significant token before the `(` or `{` that
    /// opened it. Entries above the current depth are left in place, so the
    /// slot at the current depth describes the bracket that just closed.
    open_token_pos_stack: Vec<Option<usize>>,
    /// Per depth: whether the `{` that opened it began a class body.
    open_class_stack: Vec<bool>,
    /// Position of the last significant character.
    pub(crate) last_token_pos: Option<usize>,
    last_slash_was_division: bool,
    next_brace_is_class: bool,
    /// Specifier of the most recent top-level `require('...')`, waiting to
    /// be bound to a `var|let|const NAME =` in front of it.
    pub(crate) last_star_export_specifier: Option<String>,
    pub(crate) results: ExportCollector,
}

impl Scanner {
    /// Load new source text and clear all state from a previous scan.
    pub fn reset(&mut self, text: &str) {
        self.source.clear();
        self.source.extend(text.encode_utf16());
        self.pos = 0;
        self.open_token_depth = 0;
        self.template_depth = None;
        self.template_stack.clear();
        self.open_token_pos_stack.clear();
        self.open_class_stack.clear();
        self.last_token_pos = None;
        self.last_slash_was_division = false;
        self.next_brace_is_class = false;
        self.last_star_export_specifier = None;
        self.results.clear();
    }

    /// Scan the loaded source to the end and build the result.
    pub fn run(&mut self) -> Result<ModuleExports, ScanError> {
        match self.scan_source() {
            Ok(()) => Ok(self.results.finish()),
            Err(err) => {
                self.results.clear();
                Err(err)
            }
        }
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    /// The code unit at `pos`, or `NULL` past the end.
    #[inline]
    pub(crate) fn at(&self, pos: usize) -> u16 {
        self.source.get(pos).copied().unwrap_or(NULL)
    }

    /// The code unit just before `pos`, or `NULL` at the start.
    #[inline]
    pub(crate) fn char_before(&self, pos: usize) -> u16 {
        pos.checked_sub(1).map_or(NULL, |p| self.at(p))
    }

    /// Step to the next position; false once the end is passed.
    #[inline]
    pub(crate) fn bump(&mut self) -> bool {
        self.pos += 1;
        self.pos < self.source.len()
    }

    /// Whether the ASCII `word` appears at `pos`.
    #[inline]
    pub(crate) fn starts_with(&self, pos: usize, word: &str) -> bool {
        let word = word.as_bytes();
        match self.source.get(pos..pos + word.len()) {
            Some(window) => window.iter().zip(word).all(|(&a, &b)| a == u16::from(b)),
            None => false,
        }
    }

    /// Whether the ASCII `word` ends at `end` (inclusive).
    #[inline]
    fn ends_with(&self, end: usize, word: &str) -> bool {
        (end + 1)
            .checked_sub(word.len())
            .map_or(false, |start| self.starts_with(start, word))
    }

    /// Whether the text in `range` appears again at `pos`.
    pub(crate) fn starts_with_range(&self, pos: usize, range: Range<usize>) -> bool {
        match (self.source.get(range), self.source.get(pos..)) {
            (Some(needle), Some(rest)) => rest.starts_with(needle),
            _ => false,
        }
    }

    /// An error at the cursor, or at the end of input once the cursor has
    /// stepped past it.
    pub(crate) fn error(&self, message: &'static DiagnosticMessage) -> ScanError {
        ScanError::new(message, self.pos.min(self.source.len()))
    }

    /// Decode the string literal in `range` (quotes included).
    pub(crate) fn decode_string(&self, range: Range<usize>) -> Option<String> {
        self.source.get(range).and_then(decode_string_literal)
    }

    /// The identifier in `range` as a string.
    pub(crate) fn identifier_text(&self, range: Range<usize>) -> Option<String> {
        self.source
            .get(range)
            .and_then(|units| String::from_utf16(units).ok())
    }

    /// A keyword may start at `pos` if nothing that could continue an
    /// expression (other than a punctuator) sits before it. `a.import` and
    /// `reimport` do not start keywords.
    #[inline]
    pub(crate) fn keyword_start(&self, pos: usize) -> bool {
        pos == 0 || is_br_or_ws_or_punctuator_not_dot(self.at(pos - 1))
    }

    /// Whether the keyword `word` ends at `end` (inclusive) and starts at a
    /// keyword boundary.
    pub(crate) fn is_preceding_keyword(&self, end: usize, word: &str) -> bool {
        self.ends_with(end, word) && self.keyword_start(end + 1 - word.len())
    }

    // ========================================================================
    // Main loop
    // ========================================================================

    fn scan_source(&mut self) -> Result<(), ScanError> {
        self.pos = self.skip_shebang();
        while self.pos < self.source.len() {
            let ch = self.source[self.pos];
            if !is_ws_narrow(ch) && self.scan_token(ch)? {
                self.last_token_pos = Some(self.pos);
            }
            self.pos += 1;
        }
        self.pos = self.pos.min(self.source.len());

        if self.template_depth.is_some() {
            return Err(self.error(&messages::UNTERMINATED_TEMPLATE));
        }
        if self.open_token_depth != 0 {
            return Err(self.error(&messages::UNTERMINATED_BRACES));
        }
        Ok(())
    }

    /// Position of the first character after a `#!` line, or 0.
    fn skip_shebang(&self) -> usize {
        if self.at(0) != HASH || self.at(1) != EXCLAMATION {
            return 0;
        }
        self.source
            .iter()
            .skip(2)
            .position(|&ch| is_br(ch))
            .map_or(self.source.len(), |offset| offset + 2)
    }

    /// Handle one significant character. On return the cursor sits on the
    /// last character consumed. Returns whether that character counts as the
    /// last significant token (comments do not).
    fn scan_token(&mut self, ch: u16) -> Result<bool, ScanError> {
        if self.open_token_depth == 0 {
            match ch {
                I_LOWER => {
                    if self.starts_with(self.pos + 1, "mport") && self.keyword_start(self.pos) {
                        self.throw_if_import_statement()?;
                    }
                    return Ok(true);
                }
                R_LOWER => {
                    let start = self.pos;
                    if self.try_parse_require(RequireType::Import)? && self.keyword_start(start) {
                        self.try_backtrack_add_star_export_binding(start);
                    }
                    return Ok(true);
                }
                UNDERSCORE => {
                    self.try_parse_transpiler_helper()?;
                    return Ok(true);
                }
                _ => {}
            }
        }

        match ch {
            E_LOWER => {
                if self.starts_with(self.pos + 1, "xport") && self.keyword_start(self.pos) {
                    if self.at(self.pos + 6) == S_LOWER {
                        self.try_parse_exports_dot_assign(false)?;
                    } else if self.open_token_depth == 0 {
                        self.throw_if_export_statement()?;
                    }
                }
            }
            C_LOWER => {
                if self.keyword_start(self.pos)
                    && self.starts_with(self.pos + 1, "lass")
                    && is_br_or_ws(self.at(self.pos + 5))
                {
                    self.next_brace_is_class = true;
                }
            }
            M_LOWER => {
                if self.starts_with(self.pos + 1, "odule") && self.keyword_start(self.pos) {
                    self.try_parse_module_exports_dot_assign()?;
                }
            }
            O_UPPER => {
                if self.starts_with(self.pos + 1, "bject") && self.keyword_start(self.pos) {
                    let keys = self.open_token_depth == 0;
                    self.try_parse_object_define_or_keys(keys)?;
                }
            }
            OPEN_PAREN => self.push_open_token(self.last_token_pos),
            CLOSE_PAREN => {
                if self.open_token_depth == 0 {
                    return Err(self.error(&messages::UNEXPECTED_CLOSING_BRACKET));
                }
                self.open_token_depth -= 1;
            }
            OPEN_BRACE => {
                let is_class = std::mem::take(&mut self.next_brace_is_class);
                set_slot(&mut self.open_class_stack, self.open_token_depth, is_class);
                self.push_open_token(self.last_token_pos);
            }
            CLOSE_BRACE => self.close_brace()?,
            SINGLE_QUOTE | DOUBLE_QUOTE => self.string_literal(ch)?,
            SLASH => match self.at(self.pos + 1) {
                SLASH => {
                    self.line_comment();
                    return Ok(false);
                }
                ASTERISK => {
                    self.block_comment();
                    return Ok(false);
                }
                _ => {
                    if self.slash_starts_regex() {
                        self.regular_expression()?;
                        self.last_slash_was_division = false;
                    } else {
                        self.last_slash_was_division = true;
                    }
                }
            },
            BACKTICK => self.template_string()?,
            _ => {}
        }
        Ok(true)
    }

    /// Record an opening bracket whose preceding token is `token_pos`.
    pub(crate) fn push_open_token(&mut self, token_pos: Option<usize>) {
        set_slot(&mut self.open_token_pos_stack, self.open_token_depth, token_pos);
        self.open_token_depth += 1;
    }

    fn close_brace(&mut self) -> Result<(), ScanError> {
        if self.open_token_depth == 0 {
            return Err(self.error(&messages::UNEXPECTED_CLOSING_BRACE));
        }
        let closed = self.open_token_depth;
        self.open_token_depth -= 1;
        if self.template_depth == Some(closed) {
            self.template_depth = self.template_stack.pop().flatten();
            self.template_string()?;
        } else if let Some(template_depth) = self.template_depth {
            if self.open_token_depth < template_depth {
                return Err(self.error(&messages::UNEXPECTED_CLOSING_BRACE));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Division / regular expression disambiguation
    // ========================================================================

    /// Decide whether the `/` at the cursor starts a regular expression,
    /// judging by the last significant token before it.
    fn slash_starts_regex(&self) -> bool {
        let Some(last_pos) = self.last_token_pos else {
            return true;
        };
        let last = self.at(last_pos);
        let before = self.char_before(last_pos);
        // The bracket that just closed, when `last` is `)` or `}`.
        let opener = self.open_token_pos_stack.get(self.open_token_depth).copied().flatten();

        (is_expression_punctuator(last)
            && !(last == DOT && is_digit(before))
            && !(last == PLUS && before == PLUS)
            && !(last == MINUS && before == MINUS))
            || (last == CLOSE_PAREN && opener.map_or(false, |p| self.is_paren_keyword(p)))
            || (last == CLOSE_BRACE
                && (opener.map_or(false, |p| self.is_expression_terminator(p))
                    || self.open_class_stack.get(self.open_token_depth).copied().unwrap_or(false)))
            || (last == SLASH && self.last_slash_was_division)
            || self.is_expression_keyword(last_pos)
            || last == NULL
    }

    /// `while`, `for` or `if` ending at `pos`: the `(` after it opened a
    /// condition, so the `)` closing it does not end an expression.
    fn is_paren_keyword(&self, pos: usize) -> bool {
        self.ends_with(pos, "while") || self.ends_with(pos, "for") || self.ends_with(pos, "if")
    }

    /// `=>`, `;`, `)`, `catch`, `finally` or `else` ending at `pos`: a `{`
    /// after any of these opens a block, not an object literal.
    fn is_expression_terminator(&self, pos: usize) -> bool {
        match self.at(pos) {
            GREATER_THAN => self.char_before(pos) == EQUALS,
            SEMICOLON | CLOSE_PAREN => true,
            H_LOWER => self.ends_with(pos, "catch"),
            Y_LOWER => self.ends_with(pos, "finally"),
            E_LOWER => self.ends_with(pos, "else"),
            _ => false,
        }
    }

    /// Keywords after which an expression (and so a regex) may start.
    fn is_expression_keyword(&self, pos: usize) -> bool {
        let candidates: &[&str] = match self.at(pos) {
            D_LOWER => &["void", "yield"],
            E_LOWER => &["else", "case", "delete"],
            F_LOWER => &["instanceof", "typeof"],
            N_LOWER => &["in", "return"],
            O_LOWER => &["do"],
            R_LOWER => &["debugger"],
            T_LOWER => &["await"],
            W_LOWER => &["new", "throw"],
            _ => return false,
        };
        candidates.iter().any(|keyword| self.is_preceding_keyword(pos, keyword))
    }

    // ========================================================================
    // Lexical sub-scanners
    // ========================================================================

    /// Skip comments and whitespace, leaving the cursor on the next
    /// significant character and returning it (`NULL` at the end).
    pub(crate) fn comment_whitespace(&mut self) -> u16 {
        loop {
            let ch = self.at(self.pos);
            if ch == SLASH {
                match self.at(self.pos + 1) {
                    SLASH => self.line_comment(),
                    ASTERISK => self.block_comment(),
                    _ => return ch,
                }
            } else if !is_br_or_ws(ch) {
                return ch;
            }
            if !self.bump() {
                return NULL;
            }
        }
    }

    /// From the opening `/`, stop on the line terminator (or at the end).
    fn line_comment(&mut self) {
        while self.bump() {
            if is_br(self.source[self.pos]) {
                return;
            }
        }
    }

    /// From the opening `/`, stop on the closing `/`. An unterminated block
    /// comment runs to the end of input.
    fn block_comment(&mut self) {
        self.pos += 1;
        while self.bump() {
            if self.source[self.pos] == ASTERISK && self.at(self.pos + 1) == SLASH {
                self.pos += 1;
                return;
            }
        }
    }

    /// From the opening quote, stop on the closing quote.
    pub(crate) fn string_literal(&mut self, quote: u16) -> Result<(), ScanError> {
        while self.bump() {
            let ch = self.source[self.pos];
            if ch == quote {
                return Ok(());
            }
            if ch == BACKSLASH {
                self.pos += 1;
                if self.at(self.pos) == CARRIAGE_RETURN && self.at(self.pos + 1) == LINE_FEED {
                    self.pos += 1;
                }
            } else if is_br(ch) {
                break;
            }
        }
        Err(self.error(&messages::UNTERMINATED_STRING))
    }

    /// From the opening backtick (or the `}` closing an interpolation), stop
    /// on the closing backtick, or on the `{` of a `${`, which opens a new
    /// nesting level that resumes the template when it closes.
    fn template_string(&mut self) -> Result<(), ScanError> {
        while self.bump() {
            let ch = self.source[self.pos];
            if ch == DOLLAR_SIGN && self.at(self.pos + 1) == OPEN_BRACE {
                self.pos += 1;
                self.template_stack.push(self.template_depth);
                self.open_token_depth += 1;
                self.template_depth = Some(self.open_token_depth);
                return Ok(());
            }
            if ch == BACKTICK {
                return Ok(());
            }
            if ch == BACKSLASH {
                self.pos += 1;
            }
        }
        Err(self.error(&messages::UNTERMINATED_TEMPLATE))
    }

    /// From the opening `/`, stop on the closing `/` (flags are scanned as
    /// ordinary identifier characters afterwards).
    fn regular_expression(&mut self) -> Result<(), ScanError> {
        while self.bump() {
            match self.source[self.pos] {
                SLASH => return Ok(()),
                OPEN_BRACKET => self.regex_character_class()?,
                BACKSLASH => self.pos += 1,
                LINE_FEED | CARRIAGE_RETURN => break,
                _ => {}
            }
        }
        Err(self.error(&messages::UNTERMINATED_REGEX))
    }

    fn regex_character_class(&mut self) -> Result<(), ScanError> {
        while self.bump() {
            match self.source[self.pos] {
                CLOSE_BRACKET => return Ok(()),
                BACKSLASH => self.pos += 1,
                LINE_FEED | CARRIAGE_RETURN => break,
                _ => {}
            }
        }
        Err(self.error(&messages::UNTERMINATED_REGEX_CLASS))
    }

    /// Consume an identifier at the cursor. Identifiers written with
    /// escape sequences are rejected.
    pub(crate) fn identifier(&mut self) -> bool {
        match code_point_at(&self.source, self.pos) {
            Some((code, len)) if is_identifier_start(code) => self.pos += len,
            _ => return false,
        }
        while let Some((code, len)) = code_point_at(&self.source, self.pos) {
            if is_identifier_char(code) {
                self.pos += len;
            } else if code == u32::from(BACKSLASH) {
                return false;
            } else {
                break;
            }
        }
        true
    }

    /// Consume an identifier and return its range.
    pub(crate) fn identifier_range(&mut self) -> Option<Range<usize>> {
        let start = self.pos;
        self.identifier().then(|| start..self.pos)
    }

    // ========================================================================
    // ES module syntax
    // ========================================================================

    /// At a top-level `import` keyword: allow `import(...)`, reject
    /// `import.meta` and import statements, and ignore identifiers that
    /// merely start with `import`.
    fn throw_if_import_statement(&mut self) -> Result<(), ScanError> {
        let start = self.pos;
        self.pos += 6;
        match self.comment_whitespace() {
            OPEN_PAREN => {
                self.push_open_token(Some(start));
                Ok(())
            }
            DOT => Err(self.error(&messages::UNEXPECTED_IMPORT_META)),
            SINGLE_QUOTE | DOUBLE_QUOTE | OPEN_BRACE | ASTERISK => {
                Err(self.error(&messages::UNEXPECTED_IMPORT_STATEMENT))
            }
            _ if self.pos == start + 6 => {
                self.pos = start + 5;
                Ok(())
            }
            _ => Err(self.error(&messages::UNEXPECTED_IMPORT_STATEMENT)),
        }
    }

    /// At a top-level `export` keyword that is not `exports`.
    fn throw_if_export_statement(&mut self) -> Result<(), ScanError> {
        self.pos += 6;
        let after = self.pos;
        let ch = self.comment_whitespace();
        if self.pos == after && !is_punctuator(ch) {
            self.pos = after - 1;
            return Ok(());
        }
        Err(self.error(&messages::UNEXPECTED_EXPORT_STATEMENT))
    }
}

/// Write `value` at `index`, growing the stack as needed.
fn set_slot<T: Clone + Default>(stack: &mut Vec<T>, index: usize, value: T) {
    if stack.len() <= index {
        stack.resize(index + 1, T::default());
    }
    stack[index] = value;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(text: &str) -> Scanner {
        let mut scanner = Scanner::default();
        scanner.reset(text);
        scanner
    }

    fn scan(text: &str) -> Result<ModuleExports, ScanError> {
        scanner(text).run()
    }

    #[test]
    fn test_empty_and_shebang() {
        assert!(scan("").unwrap().is_empty());
        assert!(scan("#!").unwrap().is_empty());
        assert!(scan("#!/usr/bin/env node").unwrap().is_empty());
        assert_eq!(scan("#!/usr/bin/env node\nexports.a = 1").unwrap().exports, ["a"]);
        // Only a leading `#!` is a shebang.
        assert!(scan(" #!x").is_ok());
    }

    #[test]
    fn test_cursor_helpers() {
        let s = scanner("while (x)");
        assert_eq!(s.at(0), W_LOWER);
        assert_eq!(s.at(100), NULL);
        assert_eq!(s.char_before(0), NULL);
        assert!(s.starts_with(0, "while"));
        assert!(!s.starts_with(7, "x)y"));
        assert!(s.ends_with(4, "while"));
        assert!(!s.ends_with(2, "while"));
        assert!(s.is_paren_keyword(4));
        assert!(s.starts_with_range(7, 7..8));
    }

    #[test]
    fn test_comment_whitespace() {
        let mut s = scanner("  /* a */ // b\n  x");
        assert_eq!(s.comment_whitespace(), X_LOWER);
        assert_eq!(s.pos, 17);

        let mut s = scanner(" // trailing");
        assert_eq!(s.comment_whitespace(), NULL);

        let mut s = scanner(" / 2");
        assert_eq!(s.comment_whitespace(), SLASH);
        assert_eq!(s.pos, 1);
    }

    #[test]
    fn test_identifier() {
        let mut s = scanner("_a$1 b");
        assert!(s.identifier());
        assert_eq!(s.pos, 4);

        let mut s = scanner("1a");
        assert!(!s.identifier());
        assert_eq!(s.pos, 0);

        let mut s = scanner("a\\u0062");
        assert!(!s.identifier());

        let mut s = scanner("\u{1D400}x=");
        assert_eq!(s.identifier_range(), Some(0..3));
    }

    #[test]
    fn test_expression_keywords() {
        for (text, expected) in [
            ("return", true),
            ("x = typeof", true),
            ("a.return", false),
            ("areturn", false),
            ("in", true),
            ("min", false),
            ("await", true),
            ("x", false),
        ] {
            let s = scanner(text);
            assert_eq!(s.is_expression_keyword(text.len() - 1), expected, "{}", text);
        }
    }

    #[test]
    fn test_nesting_depth_is_tracked() {
        let mut s = scanner("a(b{c[d]})");
        s.run().unwrap();
        assert_eq!(s.open_token_depth, 0);

        let err = scan("a(b").unwrap_err();
        assert_eq!(err.message, &messages::UNTERMINATED_BRACES);
        assert_eq!(err.pos, 3);
    }
}
