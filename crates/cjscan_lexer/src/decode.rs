//! Decoding of quoted string literals into the names they denote.
//!
//! Export names and module specifiers can be written with any escape a
//! JavaScript string allows (`'\x61'`, `"\u{1F600}"`, legacy octal, line
//! continuations). The decoder works on the UTF-16 code units of the literal,
//! quotes included, and returns `None` for anything a JavaScript engine would
//! reject or that does not form valid UTF-16 once decoded (an unpaired
//! surrogate). Callers treat `None` as "not a usable name".

use crate::char_codes::*;

/// Decode a quoted string literal, quotes included.
pub(crate) fn decode_string_literal(quoted: &[u16]) -> Option<String> {
    let (&open, rest) = quoted.split_first()?;
    let (&close, body) = rest.split_last()?;
    if !is_quote(open) || close != open {
        return None;
    }

    let mut out = Vec::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        let ch = body[i];
        i += 1;
        if ch != BACKSLASH {
            out.push(ch);
            continue;
        }

        let esc = *body.get(i)?;
        i += 1;
        match esc {
            N_LOWER => out.push(LINE_FEED),
            T_LOWER => out.push(TAB),
            R_LOWER => out.push(CARRIAGE_RETURN),
            B_LOWER => out.push(BACKSPACE),
            F_LOWER => out.push(FORM_FEED),
            V_LOWER => out.push(VERTICAL_TAB),
            _0..=_7 => {
                // Legacy octal: up to three digits when the first is 0-3, else two.
                let max_len = if esc <= _3 { 3 } else { 2 };
                let mut value = esc - _0;
                let mut len = 1;
                while len < max_len {
                    match body.get(i) {
                        Some(&d) if (_0..=_7).contains(&d) => {
                            value = value * 8 + (d - _0);
                            i += 1;
                            len += 1;
                        }
                        _ => break,
                    }
                }
                out.push(value);
            }
            X_LOWER => {
                let value = hex_value(body.get(i..i + 2)?)?;
                i += 2;
                out.push(value as u16);
            }
            U_LOWER => {
                if body.get(i) == Some(&OPEN_BRACE) {
                    let len = body[i + 1..].iter().position(|&c| c == CLOSE_BRACE)?;
                    let digits = &body[i + 1..i + 1 + len];
                    if digits.is_empty() {
                        return None;
                    }
                    let value = hex_value(digits)?;
                    push_code_point(&mut out, value)?;
                    i += len + 2;
                } else {
                    let value = hex_value(body.get(i..i + 4)?)?;
                    i += 4;
                    out.push(value as u16);
                }
            }
            // Line continuations contribute nothing.
            CARRIAGE_RETURN => {
                if body.get(i) == Some(&LINE_FEED) {
                    i += 1;
                }
            }
            LINE_FEED | LINE_SEPARATOR | PARAGRAPH_SEPARATOR => {}
            // `\8`, `\9`, quotes, backslash and every other character stand for themselves.
            _ => out.push(esc),
        }
    }

    String::from_utf16(&out).ok()
}

/// Parse hex digits into a value, failing on a non-hex digit or a value
/// beyond the Unicode range.
fn hex_value(digits: &[u16]) -> Option<u32> {
    let mut value: u32 = 0;
    for &d in digits {
        let digit = char::from_u32(u32::from(d))?.to_digit(16)?;
        value = value * 16 + digit;
        if value > 0x10FFFF {
            return None;
        }
    }
    Some(value)
}

/// Append a code point as UTF-16. Surrogate code points are appended as a
/// single unit and left for the final UTF-16 validation to accept or reject.
fn push_code_point(out: &mut Vec<u16>, code: u32) -> Option<()> {
    if code > 0xFFFF {
        let code = code - 0x10000;
        out.push(0xD800 | (code >> 10) as u16);
        out.push(0xDC00 | (code & 0x3FF) as u16);
    } else {
        out.push(u16::try_from(code).ok()?);
    }
    Some(())
}
