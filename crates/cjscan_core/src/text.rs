//! Source positions and line/column lookup.
//!
//! The lexer addresses its source as UTF-16 code units, the unit JavaScript
//! strings are made of. Hosts usually hold the text as UTF-8, so this module
//! also converts between the two offset spaces. None of it runs on the
//! success path of a scan: line maps are only built when an error is reported.

use memchr::memchr_iter;

/// A position in source text, measured in UTF-16 code units from the start.
pub type TextPos = usize;

/// Line and column information derived from source text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    /// 1-based line number. Only `\n` starts a new line.
    pub line: u32,
    /// 1-based column, in UTF-16 code units.
    pub column: u32,
}

impl LineAndColumn {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A map from byte offsets to line numbers, built from source text.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offsets of the start of each line.
    line_starts: Vec<usize>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1));
        Self { line_starts }
    }

    /// Get the line index (0-based) containing a byte offset.
    pub fn line_of(&self, byte_pos: usize) -> usize {
        match self.line_starts.binary_search(&byte_pos) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }

    /// Resolve a UTF-16 offset into `text` (the same text the map was built
    /// from) to a 1-based line and column.
    pub fn line_and_column_of(&self, text: &str, pos: TextPos) -> LineAndColumn {
        let byte_pos = byte_offset_of(text, pos);
        let line = self.line_of(byte_pos);
        let start = self.line_starts[line];
        let column = text[start..byte_pos].encode_utf16().count() + 1;
        LineAndColumn::new((line + 1) as u32, column as u32)
    }
}

/// Convert a UTF-16 offset into a byte offset into `text`.
///
/// Offsets past the end clamp to `text.len()`. An offset that lands between
/// the two halves of a surrogate pair maps to the start of that character.
pub fn byte_offset_of(text: &str, pos: TextPos) -> usize {
    let mut units = 0;
    for (byte, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > pos {
            return byte;
        }
        units = next;
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_map() {
        let text = "line1\nline2\nline3";
        let map = LineMap::new(text);
        assert_eq!(map.line_of(0), 0);
        assert_eq!(map.line_of(5), 0); // newline char
        assert_eq!(map.line_of(6), 1); // start of line2
        assert_eq!(map.line_of(12), 2);
        assert_eq!(map.line_of(text.len()), 2);

        let lc = map.line_and_column_of(text, 8);
        assert_eq!(lc, LineAndColumn::new(2, 3));
    }

    #[test]
    fn test_first_column_is_one() {
        let text = "abc";
        let map = LineMap::new(text);
        assert_eq!(map.line_and_column_of(text, 0), LineAndColumn::new(1, 1));
        assert_eq!(map.line_and_column_of(text, 3), LineAndColumn::new(1, 4));
    }

    #[test]
    fn test_carriage_return_does_not_start_line() {
        let text = "a\rb\nc";
        let map = LineMap::new(text);
        assert_eq!(map.line_and_column_of(text, 2), LineAndColumn::new(1, 3));
        assert_eq!(map.line_and_column_of(text, 4), LineAndColumn::new(2, 1));
    }

    #[test]
    fn test_utf16_columns() {
        // U+1F600 takes two UTF-16 units and four UTF-8 bytes.
        let text = "x = '\u{1F600}';\ny";
        assert_eq!(byte_offset_of(text, 5), 5);
        assert_eq!(byte_offset_of(text, 7), 9);
        assert_eq!(byte_offset_of(text, 6), 5);
        assert_eq!(byte_offset_of(text, 100), text.len());

        let map = LineMap::new(text);
        assert_eq!(map.line_and_column_of(text, 7), LineAndColumn::new(1, 8));
        assert_eq!(map.line_and_column_of(text, 10), LineAndColumn::new(2, 1));
    }
}
