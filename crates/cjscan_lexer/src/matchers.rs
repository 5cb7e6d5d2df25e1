//! Export-pattern matchers.
//!
//! Each matcher starts on the first character of the construct it recognizes
//! and consumes one fixed surface syntax, skipping comments and whitespace
//! between tokens. A matcher that does not see its whole pattern puts the
//! cursor back on a position from which ordinary scanning can carry on, so
//! nothing it skipped goes unscanned. Errors from string literals inside a
//! pattern are still fatal.
//!
//! The recognized shapes are the ones emitted by hand-written CommonJS and by
//! the common transpilers (Babel, TypeScript, esbuild):
//!
//! ```text
//! exports.a = ...;            exports['a'] = ...;
//! module.exports = { a, b: c, 'd': e, ...require('f') };
//! module.exports = require('g');
//! Object.defineProperty(exports, 'h', { enumerable: true, value: ... });
//! Object.defineProperty(exports, 'i', { enumerable: true, get: function () { return m.i; } });
//! var _j = require('j');
//! Object.keys(_j).forEach(function (k) {
//!   if (k === 'default' || k === '__esModule') return;
//!   exports[k] = _j[k];
//! });
//! __exportStar(require('k'), exports);
//! ```

use crate::char_codes::*;
use crate::identifier::{code_point_before, is_identifier_char, is_identifier_start};
use crate::scanner::Scanner;
use cjscan_diagnostics::ScanError;
use std::ops::Range;
use tracing::trace;

/// What a matched `require('...')` call means in its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RequireType {
    /// A plain top-level call; the specifier may get bound to a name.
    Import,
    /// `module.exports = require(...)` or a spread inside `module.exports = {...}`.
    ExportAssign,
    /// Argument of `__export` / `__exportStar`.
    ExportStar,
}

/// Outcome of matching `Object.defineProperty(exports, 'NAME', ...)`.
enum DefineProperty {
    /// Not a defineProperty on the exports object.
    NoMatch,
    /// A `value:` descriptor.
    Value(Range<usize>),
    /// A getter that returns an identifier or a member of one.
    Getter(Range<usize>),
    /// The name was read but the descriptor is not one of the safe shapes.
    Unsafe(Range<usize>),
}

impl Scanner {
    // ========================================================================
    // Token helpers
    // ========================================================================

    /// Skip comments and whitespace, then consume `expected` if it is next.
    fn eat(&mut self, expected: u16) -> bool {
        if self.comment_whitespace() == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip comments and whitespace, then consume `word` if it is next.
    fn eat_word(&mut self, word: &str) -> bool {
        self.comment_whitespace();
        if self.starts_with(self.pos, word) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    /// Skip comments and whitespace, then consume a repeat of the text in
    /// `range` if it is next.
    fn eat_range(&mut self, range: &Range<usize>) -> bool {
        self.comment_whitespace();
        if self.starts_with_range(self.pos, range.clone()) {
            self.pos += range.len();
            true
        } else {
            false
        }
    }

    /// Consume `'word'` or `"word"`.
    fn eat_quoted(&mut self, word: &str) -> bool {
        let quote = self.comment_whitespace();
        if !is_quote(quote) || !self.starts_with(self.pos + 1, word) {
            return false;
        }
        self.pos += word.len() + 1;
        self.eat(quote)
    }

    /// Consume a string literal and return its range, quotes included.
    fn string_literal_range(&mut self) -> Result<Option<Range<usize>>, ScanError> {
        let quote = self.comment_whitespace();
        if !is_quote(quote) {
            return Ok(None);
        }
        let start = self.pos;
        self.string_literal(quote)?;
        self.pos += 1;
        Ok(Some(start..self.pos))
    }

    /// Consume `exports` or `module.exports`.
    fn read_exports_or_module_dot_exports(&mut self) -> bool {
        self.comment_whitespace();
        let revert = self.pos;
        if self.starts_with(self.pos, "module") {
            self.pos += 6;
            if !self.eat(DOT) {
                self.pos = revert;
                return false;
            }
            self.comment_whitespace();
        }
        if self.starts_with(self.pos, "exports") {
            self.pos += 7;
            true
        } else {
            self.pos = revert;
            false
        }
    }

    fn add_export_identifier(&mut self, range: Range<usize>) {
        let name = self.identifier_text(range);
        self.results.add_export(name);
    }

    fn add_export_string(&mut self, range: Range<usize>) {
        let name = self.decode_string(range);
        self.results.add_export(name);
    }

    // ========================================================================
    // require
    // ========================================================================

    /// `require('x')` with the cursor on the `r`. Leaves the cursor on the
    /// closing `)` on success, where it is untouched on failure.
    pub(crate) fn try_parse_require(&mut self, require_type: RequireType) -> Result<bool, ScanError> {
        let revert = self.pos;
        if !self.starts_with(self.pos + 1, "equire") {
            return Ok(false);
        }
        self.pos += 7;
        if self.eat(OPEN_PAREN) {
            if let Some(range) = self.string_literal_range()? {
                if self.comment_whitespace() == CLOSE_PAREN {
                    let specifier = self.decode_string(range);
                    match require_type {
                        RequireType::Import => self.last_star_export_specifier = specifier,
                        RequireType::ExportAssign | RequireType::ExportStar => {
                            self.results.add_reexport(specifier)
                        }
                    }
                    return Ok(true);
                }
            }
        }
        self.pos = revert;
        Ok(false)
    }

    /// After a top-level `require(...)` starting at `start`, look backwards
    /// for `var|let|const NAME = ` and bind `NAME` to the required specifier.
    pub(crate) fn try_backtrack_add_star_export_binding(&mut self, start: usize) {
        // `end` is exclusive: the character under inspection is `end - 1`.
        let mut end = self.skip_spaces_back(start);
        if self.char_before(end) != EQUALS {
            return;
        }
        end = self.skip_spaces_back(end - 1);
        let id_end = end;
        let mut identifier_start = false;
        while end > 0 {
            let Some((code, len)) = code_point_before(&self.source, end - 1) else {
                break;
            };
            if code == u32::from(BACKSLASH) {
                return;
            }
            if !is_identifier_char(code) {
                break;
            }
            identifier_start = is_identifier_start(code);
            end -= len;
        }
        if !identifier_start || self.char_before(end) != SPACE {
            return;
        }
        let Some(binding) = self.identifier_text(end..id_end) else {
            return;
        };
        let keyword_end = self.skip_spaces_back(end);
        let is_declaration = keyword_end > 0
            && ["var", "let", "const"]
                .iter()
                .any(|keyword| self.is_preceding_keyword(keyword_end - 1, keyword));
        if is_declaration {
            trace!(
                binding = %binding,
                specifier = ?self.last_star_export_specifier,
                "star export binding"
            );
            let specifier = self.last_star_export_specifier.clone();
            self.results.bind_star_export(binding, specifier);
        }
    }

    fn skip_spaces_back(&self, mut end: usize) -> usize {
        while end > 0 && self.source[end - 1] == SPACE {
            end -= 1;
        }
        end
    }

    /// `_interopRequireWildcard(require('x'))`, `__export(require('x'))` and
    /// `__exportStar(require('x'), exports)`, with the cursor on the first `_`.
    pub(crate) fn try_parse_transpiler_helper(&mut self) -> Result<(), ScanError> {
        let start = self.pos;
        if !self.keyword_start(start) && self.char_before(start) != DOT {
            return Ok(());
        }
        if self.starts_with(start + 1, "interopRequireWildcard") {
            self.pos = start + 23;
            if self.at(self.pos) != OPEN_PAREN {
                self.pos -= 1;
            } else if self.try_parse_helper_call(RequireType::Import)? && self.keyword_start(start) {
                self.try_backtrack_add_star_export_binding(start);
            }
        } else if self.starts_with(start + 1, "_export") {
            self.pos = start + 8;
            if self.starts_with(self.pos, "Star") {
                self.pos += 4;
            }
            if self.at(self.pos) != OPEN_PAREN {
                self.pos -= 1;
            } else {
                self.try_parse_helper_call(RequireType::ExportStar)?;
            }
        }
        Ok(())
    }

    /// At the `(` of a helper call: open it, and match `require(...)` as the
    /// first argument. On failure the cursor is left on the `(`.
    fn try_parse_helper_call(&mut self, require_type: RequireType) -> Result<bool, ScanError> {
        let paren = self.pos;
        self.push_open_token(self.last_token_pos);
        self.pos += 1;
        if self.at(self.pos) == R_LOWER && self.try_parse_require(require_type)? {
            return Ok(true);
        }
        self.pos = paren;
        Ok(false)
    }

    // ========================================================================
    // exports.NAME = / module.exports =
    // ========================================================================

    /// With the cursor on the `m` of `module`.
    pub(crate) fn try_parse_module_exports_dot_assign(&mut self) -> Result<(), ScanError> {
        self.pos += 6;
        let revert = self.pos - 1;
        if self.eat(DOT) && self.comment_whitespace() == E_LOWER && self.starts_with(self.pos, "exports") {
            return self.try_parse_exports_dot_assign(true);
        }
        self.pos = revert;
        Ok(())
    }

    /// With the cursor on the `e` of `exports`. `assign` is set when it was
    /// reached through `module.`, which makes `= ...` a reassignment.
    pub(crate) fn try_parse_exports_dot_assign(&mut self, assign: bool) -> Result<(), ScanError> {
        self.pos += 7;
        let revert = self.pos - 1;
        match self.comment_whitespace() {
            // exports.NAME =
            DOT => {
                self.pos += 1;
                self.comment_whitespace();
                if let Some(name) = self.identifier_range() {
                    if self.is_assignment() {
                        self.add_export_identifier(name);
                        return Ok(());
                    }
                }
            }
            // exports['NAME'] =
            OPEN_BRACKET => {
                self.pos += 1;
                if let Some(name) = self.string_literal_range()? {
                    if self.eat(CLOSE_BRACKET) && self.is_assignment() {
                        self.add_export_string(name);
                    }
                }
            }
            // module.exports =
            EQUALS if assign && self.at(self.pos + 1) != EQUALS => {
                trace!(offset = self.pos, "module.exports reassigned");
                self.results.reassign();
                self.pos += 1;
                match self.comment_whitespace() {
                    OPEN_BRACE => {
                        self.try_parse_literal_exports()?;
                        return Ok(());
                    }
                    R_LOWER => {
                        self.try_parse_require(RequireType::ExportAssign)?;
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        self.pos = revert;
        Ok(())
    }

    /// An `=` that is not the start of `==` or `===`. Leaves the cursor on it.
    fn is_assignment(&mut self) -> bool {
        self.comment_whitespace() == EQUALS && self.at(self.pos + 1) != EQUALS
    }

    /// `{ a, b: c, 'd': e, ...f, ...require('g') }` with the cursor on the
    /// `{`. Properties are recorded as they are read. A value other than an
    /// identifier still exports its key but stops matching. Anything else,
    /// including accessor and method shorthands, stops matching without
    /// recording the key; the object is then scanned normally.
    fn try_parse_literal_exports(&mut self) -> Result<(), ScanError> {
        let revert = self.pos - 1;
        while self.bump() {
            let mut ch = self.comment_whitespace();
            if let Some(key) = self.identifier_range() {
                ch = self.comment_whitespace();
                if ch == COLON {
                    self.pos += 1;
                    self.comment_whitespace();
                    if !self.identifier() {
                        // The key is exported whatever its value; only identifier values are skipped over.
                        self.add_export_identifier(key);
                        self.pos = revert;
                        return Ok(());
                    }
                    ch = self.comment_whitespace();
                } else if ch != COMMA && ch != CLOSE_BRACE {
                    // Accessor or method shorthand (`get a() {}`): the word is a modifier.
                    break;
                }
                self.add_export_identifier(key);
            } else if ch == DOT && self.starts_with(self.pos + 1, "..") {
                self.pos += 3;
                let spread_require =
                    self.at(self.pos) == R_LOWER && self.try_parse_require(RequireType::ExportAssign)?;
                if spread_require {
                    self.pos += 1;
                } else if !self.identifier() {
                    self.pos = revert;
                    return Ok(());
                }
                ch = self.comment_whitespace();
            } else if is_quote(ch) {
                let Some(key) = self.string_literal_range()? else {
                    break;
                };
                ch = self.comment_whitespace();
                if ch == COLON {
                    self.pos += 1;
                    self.comment_whitespace();
                    self.add_export_string(key);
                    if !self.identifier() {
                        self.pos = revert;
                        return Ok(());
                    }
                    ch = self.comment_whitespace();
                }
            } else {
                break;
            }

            if ch == CLOSE_BRACE {
                return Ok(());
            }
            if ch != COMMA {
                break;
            }
        }
        self.pos = revert;
        Ok(())
    }

    // ========================================================================
    // Object.defineProperty / Object.keys
    // ========================================================================

    /// With the cursor on the `O` of `Object`. The `Object.keys` re-export
    /// boilerplate is only looked for when `keys` is set (at top level).
    pub(crate) fn try_parse_object_define_or_keys(&mut self, keys: bool) -> Result<(), ScanError> {
        self.pos += 6;
        let revert = self.pos - 1;
        if self.eat(DOT) {
            self.comment_whitespace();
            if self.starts_with(self.pos, "defineProperty") {
                return self.try_parse_define_property();
            }
            if keys && self.starts_with(self.pos, "keys") {
                self.try_parse_object_keys_reexport();
                return Ok(());
            }
        }
        self.pos = revert;
        Ok(())
    }

    /// With the cursor on the `d` of `defineProperty`.
    fn try_parse_define_property(&mut self) -> Result<(), ScanError> {
        self.pos += 14;
        let revert = self.pos - 1;
        match self.match_define_property()? {
            DefineProperty::Value(name) => {
                self.add_export_string(name);
                self.pos = revert;
            }
            // The whole call was consumed; the cursor is on its `)`.
            DefineProperty::Getter(name) => self.add_export_string(name),
            DefineProperty::Unsafe(name) => {
                let name = self.decode_string(name);
                self.results.add_unsafe_getter(name);
                self.pos = revert;
            }
            DefineProperty::NoMatch => self.pos = revert,
        }
        Ok(())
    }

    fn match_define_property(&mut self) -> Result<DefineProperty, ScanError> {
        if !self.eat(OPEN_PAREN) || !self.read_exports_or_module_dot_exports() || !self.eat(COMMA) {
            return Ok(DefineProperty::NoMatch);
        }
        let Some(name) = self.string_literal_range()? else {
            return Ok(DefineProperty::NoMatch);
        };
        let unsafe_name = DefineProperty::Unsafe(name.clone());
        if !self.eat(COMMA) || !self.eat(OPEN_BRACE) {
            return Ok(unsafe_name);
        }
        if self.comment_whitespace() == E_LOWER
            && !(self.eat_word("enumerable") && self.eat(COLON) && self.eat_word("true") && self.eat(COMMA))
        {
            return Ok(unsafe_name);
        }
        match self.comment_whitespace() {
            V_LOWER => {
                if self.eat_word("value") && self.comment_whitespace() == COLON {
                    return Ok(DefineProperty::Value(name));
                }
            }
            G_LOWER => {
                if self.eat_word("get") && self.match_getter_head() && self.match_getter_body()? {
                    return Ok(DefineProperty::Getter(name));
                }
            }
            _ => {}
        }
        Ok(unsafe_name)
    }

    /// After `get`: `: function NAME? ()` or `()`, up to and including `{`.
    fn match_getter_head(&mut self) -> bool {
        if self.eat(COLON) && !self.match_function_keyword() {
            return false;
        }
        self.eat(OPEN_PAREN) && self.eat(CLOSE_PAREN) && self.eat(OPEN_BRACE)
    }

    /// `function` optionally followed by a name, up to the `(`.
    fn match_function_keyword(&mut self) -> bool {
        if !self.eat_word("function") {
            return false;
        }
        let after = self.pos;
        let ch = self.comment_whitespace();
        ch == OPEN_PAREN || (self.pos != after && self.identifier())
    }

    /// `return ID;? }`, `return ID.NAME;? }` or `return ID['NAME'];? }`,
    /// then the end of the descriptor and the call.
    fn match_getter_body(&mut self) -> Result<bool, ScanError> {
        if !self.eat_word("return") {
            return Ok(false);
        }
        self.comment_whitespace();
        if !self.identifier() {
            return Ok(false);
        }
        match self.comment_whitespace() {
            DOT => {
                self.pos += 1;
                self.comment_whitespace();
                if !self.identifier() {
                    return Ok(false);
                }
            }
            OPEN_BRACKET => {
                self.pos += 1;
                if self.string_literal_range()?.is_none() || !self.eat(CLOSE_BRACKET) {
                    return Ok(false);
                }
            }
            _ => {}
        }
        self.eat(SEMICOLON);
        if !self.eat(CLOSE_BRACE) {
            return Ok(false);
        }
        self.eat(COMMA);
        Ok(self.eat(CLOSE_BRACE) && self.comment_whitespace() == CLOSE_PAREN)
    }

    /// `Object.keys(ID).forEach(function (IT) { ... })` re-export boilerplate,
    /// with the cursor on the `k` of `keys`. When `ID` is bound to a required
    /// specifier, that specifier becomes a re-export.
    fn try_parse_object_keys_reexport(&mut self) {
        self.pos += 4;
        let mut revert = self.pos - 1;
        let Some(id) = self.match_object_keys_for_each(&mut revert) else {
            self.pos = revert;
            return;
        };
        let specifier = self
            .identifier_text(id)
            .and_then(|binding| self.results.star_export_specifier(&binding).map(str::to_string));
        if let Some(specifier) = specifier {
            trace!(specifier = %specifier, "Object.keys re-export");
            self.results.add_reexport(Some(specifier));
            self.pos = revert;
        }
    }

    /// Match the whole `forEach` call, returning the range of `ID`. `revert`
    /// is moved forward as parts of the pattern are confirmed.
    fn match_object_keys_for_each(&mut self, revert: &mut usize) -> Option<Range<usize>> {
        if !self.eat(OPEN_PAREN) {
            return None;
        }
        self.comment_whitespace();
        let id = self.identifier_range()?;
        if self.comment_whitespace() != CLOSE_PAREN {
            return None;
        }
        *revert = self.pos;
        self.pos += 1;
        if !self.eat(DOT) || !self.eat_word("forEach") {
            return None;
        }
        self.comment_whitespace();
        *revert = self.pos - 1;
        if !self.eat(OPEN_PAREN) || !self.eat_word("function") || !self.eat(OPEN_PAREN) {
            return None;
        }
        self.comment_whitespace();
        let it = self.identifier_range()?;
        if !self.eat(CLOSE_PAREN)
            || !self.eat(OPEN_BRACE)
            || !self.eat_word("if")
            || !self.eat(OPEN_PAREN)
            || !self.eat_range(&it)
        {
            return None;
        }

        let guarded = match self.comment_whitespace() {
            EQUALS => self.match_skip_default_guard(&id, &it),
            EXCLAMATION => self.match_not_default_guard(&it),
            _ => false,
        };
        if !guarded {
            return None;
        }

        let copied = if self.read_exports_or_module_dot_exports() {
            self.match_export_copy(&id, &it)
        } else {
            self.match_export_redirect(&id, &it)
        };
        if !copied || !self.eat(CLOSE_BRACE) || self.comment_whitespace() != CLOSE_PAREN {
            return None;
        }
        Some(id)
    }

    /// ```text
    /// IT === 'default' || IT === '__esModule') return;
    /// [if (Object.prototype.hasOwnProperty.call(X, IT)) return;]
    /// [if (IT in exports && exports[IT] === ID[IT]) return;]
    /// ```
    /// with the cursor after the first `IT`.
    fn match_skip_default_guard(&mut self, id: &Range<usize>, it: &Range<usize>) -> bool {
        if !self.eat_word("===")
            || !self.eat_quoted("default")
            || !self.eat_word("||")
            || !self.eat_range(it)
            || !self.eat_word("===")
            || !self.eat_quoted("__esModule")
            || !self.eat(CLOSE_PAREN)
            || !self.eat_return()
        {
            return false;
        }

        if !self.eat_word("if") {
            return true;
        }
        if !self.eat(OPEN_PAREN) {
            return false;
        }
        let inner = self.pos;
        if self.match_has_own_property_call(it) {
            if !self.eat(CLOSE_PAREN) || !self.eat_return() {
                return false;
            }
            if !self.eat_word("if") {
                return true;
            }
            if !self.eat(OPEN_PAREN) {
                return false;
            }
        } else {
            self.pos = inner;
        }

        self.eat_range(it)
            && self.eat_word("in ")
            && self.read_exports_or_module_dot_exports()
            && self.eat_word("&&")
            && self.read_exports_or_module_dot_exports()
            && self.eat(OPEN_BRACKET)
            && self.eat_range(it)
            && self.eat(CLOSE_BRACKET)
            && self.eat_word("===")
            && self.eat_range(id)
            && self.eat(OPEN_BRACKET)
            && self.eat_range(it)
            && self.eat(CLOSE_BRACKET)
            && self.eat(CLOSE_PAREN)
            && self.eat_return()
    }

    /// ```text
    /// IT !== 'default' [&& !Object.prototype.hasOwnProperty.call(X, IT)])
    /// IT !== 'default' [&& !X.hasOwnProperty(IT)])
    /// ```
    /// with the cursor after the first `IT`.
    fn match_not_default_guard(&mut self, it: &Range<usize>) -> bool {
        if !self.eat_word("!==") || !self.eat_quoted("default") {
            return false;
        }
        if self.comment_whitespace() == AMPERSAND {
            if !self.eat_word("&&") || !self.eat(EXCLAMATION) {
                return false;
            }
            self.comment_whitespace();
            let matched = if self.starts_with(self.pos, "Object") {
                self.match_has_own_property_call(it)
            } else {
                self.identifier()
                    && self.eat(DOT)
                    && self.eat_word("hasOwnProperty")
                    && self.eat(OPEN_PAREN)
                    && self.eat_range(it)
                    && self.eat(CLOSE_PAREN)
            };
            if !matched {
                return false;
            }
        }
        self.eat(CLOSE_PAREN)
    }

    /// `Object.prototype.hasOwnProperty.call(X, IT)`, with `.prototype` optional.
    fn match_has_own_property_call(&mut self, it: &Range<usize>) -> bool {
        if !self.eat_word("Object") || !self.eat(DOT) {
            return false;
        }
        if self.comment_whitespace() == P_LOWER && !(self.eat_word("prototype") && self.eat(DOT)) {
            return false;
        }
        if !self.eat_word("hasOwnProperty")
            || !self.eat(DOT)
            || !self.eat_word("call")
            || !self.eat(OPEN_PAREN)
        {
            return false;
        }
        self.comment_whitespace();
        self.identifier() && self.eat(COMMA) && self.eat_range(it) && self.eat(CLOSE_PAREN)
    }

    /// `[IT] = ID[IT];?`, after `exports`.
    fn match_export_copy(&mut self, id: &Range<usize>, it: &Range<usize>) -> bool {
        let matched = self.eat(OPEN_BRACKET)
            && self.eat_range(it)
            && self.eat(CLOSE_BRACKET)
            && self.eat(EQUALS)
            && self.eat_range(id)
            && self.eat(OPEN_BRACKET)
            && self.eat_range(it)
            && self.eat(CLOSE_BRACKET);
        if matched {
            self.eat(SEMICOLON);
        }
        matched
    }

    /// `Object.defineProperty(exports, IT, { enumerable: true, get: function () { return ID[IT]; } });?`
    fn match_export_redirect(&mut self, id: &Range<usize>, it: &Range<usize>) -> bool {
        let head = self.eat_word("Object")
            && self.eat(DOT)
            && self.eat_word("defineProperty")
            && self.eat(OPEN_PAREN)
            && self.read_exports_or_module_dot_exports()
            && self.eat(COMMA)
            && self.eat_range(it)
            && self.eat(COMMA)
            && self.eat(OPEN_BRACE)
            && self.eat_word("enumerable")
            && self.eat(COLON)
            && self.eat_word("true")
            && self.eat(COMMA)
            && self.eat_word("get")
            && self.match_getter_head();
        let matched = head
            && self.eat_word("return")
            && self.eat_range(id)
            && self.eat(OPEN_BRACKET)
            && self.eat_range(it)
            && self.eat(CLOSE_BRACKET);
        if !matched {
            return false;
        }
        self.eat(SEMICOLON);
        if !self.eat(CLOSE_BRACE) {
            return false;
        }
        self.eat(COMMA);
        let closed = self.eat(CLOSE_BRACE) && self.eat(CLOSE_PAREN);
        if closed {
            self.eat(SEMICOLON);
        }
        closed
    }

    /// `return;?`
    fn eat_return(&mut self) -> bool {
        if !self.eat_word("return") {
            return false;
        }
        self.eat(SEMICOLON);
        true
    }
}
