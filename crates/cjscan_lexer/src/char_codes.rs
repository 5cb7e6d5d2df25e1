//! UTF-16 code unit constants and character classes used by the lexer.
//!
//! The source is scanned as UTF-16 code units. Reads past either end of the
//! buffer yield [`NULL`], which belongs to none of the classes below.

#![allow(dead_code)]

pub const NULL: u16 = 0;
pub const BACKSPACE: u16 = 0x08;
pub const TAB: u16 = 0x09;
pub const LINE_FEED: u16 = 0x0A;
pub const VERTICAL_TAB: u16 = 0x0B;
pub const FORM_FEED: u16 = 0x0C;
pub const CARRIAGE_RETURN: u16 = 0x0D;
pub const SPACE: u16 = 0x20;
pub const NO_BREAK_SPACE: u16 = 0xA0;
pub const LINE_SEPARATOR: u16 = 0x2028;
pub const PARAGRAPH_SEPARATOR: u16 = 0x2029;

// ASCII characters
pub const EXCLAMATION: u16 = b'!' as u16;
pub const DOUBLE_QUOTE: u16 = b'"' as u16;
pub const HASH: u16 = b'#' as u16;
pub const DOLLAR_SIGN: u16 = b'$' as u16;
pub const PERCENT: u16 = b'%' as u16;
pub const AMPERSAND: u16 = b'&' as u16;
pub const SINGLE_QUOTE: u16 = b'\'' as u16;
pub const OPEN_PAREN: u16 = b'(' as u16;
pub const CLOSE_PAREN: u16 = b')' as u16;
pub const ASTERISK: u16 = b'*' as u16;
pub const PLUS: u16 = b'+' as u16;
pub const COMMA: u16 = b',' as u16;
pub const MINUS: u16 = b'-' as u16;
pub const DOT: u16 = b'.' as u16;
pub const SLASH: u16 = b'/' as u16;
pub const _0: u16 = b'0' as u16;
pub const _3: u16 = b'3' as u16;
pub const _7: u16 = b'7' as u16;
pub const _9: u16 = b'9' as u16;
pub const COLON: u16 = b':' as u16;
pub const SEMICOLON: u16 = b';' as u16;
pub const LESS_THAN: u16 = b'<' as u16;
pub const EQUALS: u16 = b'=' as u16;
pub const GREATER_THAN: u16 = b'>' as u16;
pub const QUESTION: u16 = b'?' as u16;
pub const AT: u16 = b'@' as u16;

pub const O_UPPER: u16 = b'O' as u16;

pub const OPEN_BRACKET: u16 = b'[' as u16;
pub const BACKSLASH: u16 = b'\\' as u16;
pub const CLOSE_BRACKET: u16 = b']' as u16;
pub const CARET: u16 = b'^' as u16;
pub const UNDERSCORE: u16 = b'_' as u16;
pub const BACKTICK: u16 = b'`' as u16;

pub const A_LOWER: u16 = b'a' as u16;
pub const B_LOWER: u16 = b'b' as u16;
pub const C_LOWER: u16 = b'c' as u16;
pub const D_LOWER: u16 = b'd' as u16;
pub const E_LOWER: u16 = b'e' as u16;
pub const F_LOWER: u16 = b'f' as u16;
pub const G_LOWER: u16 = b'g' as u16;
pub const H_LOWER: u16 = b'h' as u16;
pub const I_LOWER: u16 = b'i' as u16;
pub const K_LOWER: u16 = b'k' as u16;
pub const L_LOWER: u16 = b'l' as u16;
pub const M_LOWER: u16 = b'm' as u16;
pub const N_LOWER: u16 = b'n' as u16;
pub const O_LOWER: u16 = b'o' as u16;
pub const P_LOWER: u16 = b'p' as u16;
pub const R_LOWER: u16 = b'r' as u16;
pub const S_LOWER: u16 = b's' as u16;
pub const T_LOWER: u16 = b't' as u16;
pub const U_LOWER: u16 = b'u' as u16;
pub const V_LOWER: u16 = b'v' as u16;
pub const W_LOWER: u16 = b'w' as u16;
pub const X_LOWER: u16 = b'x' as u16;
pub const Y_LOWER: u16 = b'y' as u16;

pub const OPEN_BRACE: u16 = b'{' as u16;
pub const BAR: u16 = b'|' as u16;
pub const CLOSE_BRACE: u16 = b'}' as u16;
pub const TILDE: u16 = b'~' as u16;

/// Whitespace skipped by the main loop: tab, line feed, vertical tab, form
/// feed, carriage return and space.
#[inline]
pub fn is_ws_narrow(ch: u16) -> bool {
    ch == SPACE || (TAB..=CARRIAGE_RETURN).contains(&ch)
}

/// Check if a character ends a string or regex line. Unicode line and
/// paragraph separators are not line breaks here.
#[inline]
pub fn is_br(ch: u16) -> bool {
    ch == CARRIAGE_RETURN || ch == LINE_FEED
}

/// Whitespace or line break, including the no-break space.
#[inline]
pub fn is_br_or_ws(ch: u16) -> bool {
    is_ws_narrow(ch) || ch == NO_BREAK_SPACE
}

/// Check if a character can end a punctuator: `!%&()*+,-./:;<=>?[]^{}|~`.
#[inline]
pub fn is_punctuator(ch: u16) -> bool {
    ch == EXCLAMATION
        || ch == PERCENT
        || ch == AMPERSAND
        || (OPEN_PAREN..=SLASH).contains(&ch)
        || (COLON..=QUESTION).contains(&ch)
        || ch == OPEN_BRACKET
        || ch == CLOSE_BRACKET
        || ch == CARET
        || (OPEN_BRACE..=TILDE).contains(&ch)
}

/// Punctuators after which an expression (and so a regex) may start:
/// `!%&(*+,-.:;<=>?[^{|~`.
#[inline]
pub fn is_expression_punctuator(ch: u16) -> bool {
    ch == EXCLAMATION
        || ch == PERCENT
        || ch == AMPERSAND
        || ((OPEN_PAREN..SLASH).contains(&ch) && ch != CLOSE_PAREN)
        || (COLON..=QUESTION).contains(&ch)
        || ch == OPEN_BRACKET
        || ch == CARET
        || ((OPEN_BRACE..=TILDE).contains(&ch) && ch != CLOSE_BRACE)
}

/// A character that may precede a keyword: whitespace, a line break or any
/// punctuator other than `.` (so `a.import` is not a keyword).
#[inline]
pub fn is_br_or_ws_or_punctuator_not_dot(ch: u16) -> bool {
    is_br_or_ws(ch) || (is_punctuator(ch) && ch != DOT)
}

/// Check if a character is a decimal digit.
#[inline]
pub fn is_digit(ch: u16) -> bool {
    (_0..=_9).contains(&ch)
}

#[inline]
pub fn is_quote(ch: u16) -> bool {
    ch == SINGLE_QUOTE || ch == DOUBLE_QUOTE
}

#[inline]
pub fn is_high_surrogate(ch: u16) -> bool {
    ch & 0xFC00 == 0xD800
}

#[inline]
pub fn is_low_surrogate(ch: u16) -> bool {
    ch & 0xFC00 == 0xDC00
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuator_classes() {
        for ch in "!%&()*+,-./:;<=>?[]^{}|~".encode_utf16() {
            assert!(is_punctuator(ch), "{}", ch as u8 as char);
        }
        for ch in "!%&(*+,-.:;<=>?[^{|~".encode_utf16() {
            assert!(is_expression_punctuator(ch), "{}", ch as u8 as char);
        }
        for ch in ")]}/".encode_utf16() {
            assert!(!is_expression_punctuator(ch), "{}", ch as u8 as char);
        }
        for ch in "aZ_$0'\"`#@\\".encode_utf16() {
            assert!(!is_punctuator(ch), "{}", ch as u8 as char);
        }
    }

    #[test]
    fn test_whitespace_classes() {
        assert!(is_ws_narrow(SPACE));
        assert!(is_ws_narrow(VERTICAL_TAB));
        assert!(!is_ws_narrow(NO_BREAK_SPACE));
        assert!(is_br_or_ws(NO_BREAK_SPACE));
        assert!(!is_br_or_ws(NULL));
        assert!(is_br(LINE_FEED));
        assert!(!is_br(LINE_SEPARATOR));
        assert!(!is_br_or_ws_or_punctuator_not_dot(DOT));
        assert!(is_br_or_ws_or_punctuator_not_dot(SEMICOLON));
    }
}
