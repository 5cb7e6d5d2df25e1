//! Identifier character classification.
//!
//! ASCII is decided inline. BMP code points above ASCII are looked up in
//! sorted range tables; astral code points walk a run-length encoded table,
//! which is linear but rarely reached.

use crate::char_codes::{is_high_surrogate, is_low_surrogate};
use crate::identifier_tables::{
    ASTRAL_ID_CONTINUE_ONLY, ASTRAL_ID_START, BMP_ID_CONTINUE_ONLY, BMP_ID_START,
};
use std::cmp::Ordering;

fn in_bmp_table(table: &[(u16, u16)], code: u32) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if u32::from(hi) < code {
                Ordering::Less
            } else if u32::from(lo) > code {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

fn in_astral_table(table: &[u32], code: u32) -> bool {
    let mut pos = 0x10000;
    for pair in table.chunks_exact(2) {
        pos += pair[0];
        if pos > code {
            return false;
        }
        pos += pair[1];
        if pos >= code {
            return true;
        }
    }
    false
}

/// Check if a code point can start an identifier.
pub fn is_identifier_start(code: u32) -> bool {
    match code {
        0..=0x40 => code == u32::from(b'$'),
        0x41..=0x5A => true,
        0x5B..=0x60 => code == u32::from(b'_'),
        0x61..=0x7A => true,
        0x7B..=0xFFFF => code >= 0xAA && in_bmp_table(BMP_ID_START, code),
        _ => in_astral_table(ASTRAL_ID_START, code),
    }
}

/// Check if a code point can be part of an identifier.
pub fn is_identifier_char(code: u32) -> bool {
    match code {
        0..=0x2F => code == u32::from(b'$'),
        0x30..=0x39 => true,
        0x3A..=0x40 => false,
        0x41..=0x5A => true,
        0x5B..=0x60 => code == u32::from(b'_'),
        0x61..=0x7A => true,
        0x7B..=0xFFFF => {
            code >= 0xAA
                && (in_bmp_table(BMP_ID_START, code) || in_bmp_table(BMP_ID_CONTINUE_ONLY, code))
        }
        _ => in_astral_table(ASTRAL_ID_START, code) || in_astral_table(ASTRAL_ID_CONTINUE_ONLY, code),
    }
}

/// Read the code point starting at `pos`, combining a surrogate pair.
/// Returns the code point and its length in code units, or `None` past the end.
#[inline]
pub fn code_point_at(text: &[u16], pos: usize) -> Option<(u32, usize)> {
    let first = *text.get(pos)?;
    if is_high_surrogate(first) {
        if let Some(&second) = text.get(pos + 1) {
            if is_low_surrogate(second) {
                let code = 0x10000 + ((u32::from(first) & 0x3FF) << 10) + (u32::from(second) & 0x3FF);
                return Some((code, 2));
            }
        }
    }
    Some((u32::from(first), 1))
}

/// Read the code point ending at `pos` (inclusive), combining a surrogate
/// pair when `pos` holds its low half. Used when scanning backwards.
#[inline]
pub fn code_point_before(text: &[u16], pos: usize) -> Option<(u32, usize)> {
    let last = *text.get(pos)?;
    if is_low_surrogate(last) && pos > 0 {
        let first = text[pos - 1];
        if is_high_surrogate(first) {
            let code = 0x10000 + ((u32::from(first) & 0x3FF) << 10) + (u32::from(last) & 0x3FF);
            return Some((code, 2));
        }
    }
    Some((u32::from(last), 1))
}
