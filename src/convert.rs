//! Byte/text conversions that assume one ASCII character per byte.
//!
//! Nothing here decodes or encodes UTF-8. Bytes are widened straight to the
//! character with the same code and characters are narrowed to their low
//! 8 bits. Only [`bytes_to_text_range`] validates its input.

use tracing::{debug, trace};

use crate::errors::{AsciiError, Result};

/// Values below this are turned into digits arithmetically; the rest go
/// through standard integer formatting.
pub const DIGIT_FAST_PATH_LIMIT: u32 = 10_000;

#[inline]
fn narrow(c: char) -> u8 {
    c as u8
}

#[inline]
fn digit(d: u32) -> u8 {
    b'0' + d as u8
}

/// Widen every byte to a character. Bytes `0x80..=0xff` become U+0080..U+00FF.
pub fn bytes_to_text(bytes: Option<&[u8]>) -> Option<String> {
    bytes.map(|b| b.iter().map(|&b| char::from(b)).collect())
}

/// Widen at most `length` bytes starting at `offset`, rejecting any byte that
/// is not 7-bit ASCII.
pub fn bytes_to_text_range(bytes: &[u8], offset: usize, length: usize) -> Result<String> {
    let Some(rest) = bytes.get(offset..) else {
        debug!(offset, len = bytes.len(), "range starts past the end of the input");
        return Err(AsciiError::OffsetOutOfRange {
            offset,
            len: bytes.len(),
        });
    };
    let slice = &rest[..length.min(rest.len())];

    let mut text = String::with_capacity(slice.len());
    for (i, &byte) in slice.iter().enumerate() {
        if !byte.is_ascii() {
            let index = offset + i;
            debug!(index, byte, "rejecting non-ASCII byte");
            return Err(AsciiError::InvalidArgument { index, byte });
        }
        text.push(char::from(byte));
    }
    Ok(text)
}

/// Narrow `text` and append the two terminator bytes.
pub fn text_to_bytes_terminated(text: &str, next1: u8, next2: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    out.extend(text.chars().map(narrow));
    out.push(next1);
    out.push(next2);
    out
}

/// Narrow every character of `text` to its low 8 bits.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.chars().map(narrow).collect()
}

/// Narrow the characters in `[begin, end)`. Indices count characters and are
/// clamped to the text.
///
/// Out-of-range or reversed indices never fail: they yield the characters that
/// do fall inside the text, possibly none. Callers that need bounds errors
/// must check `begin <= end <= text.chars().count()` themselves.
pub fn text_to_bytes_range(text: &str, begin: usize, end: usize) -> Vec<u8> {
    text.chars()
        .skip(begin)
        .take(end.saturating_sub(begin))
        .map(narrow)
        .collect()
}

/// Decimal ASCII digits of `value`.
pub fn digits_to_bytes(value: u32) -> Vec<u8> {
    match value {
        0..=9 => vec![digit(value)],
        10..=99 => vec![digit(value / 10), digit(value % 10)],
        100..=999 => vec![digit(value / 100), digit(value / 10 % 10), digit(value % 10)],
        1_000..=9_999 => vec![
            digit(value / 1_000),
            digit(value / 100 % 10),
            digit(value / 10 % 10),
            digit(value % 10),
        ],
        _ => {
            trace!(value, "formatting digits past the fast path");
            text_to_bytes(&value.to_string())
        }
    }
}

/// Decimal ASCII digits of a 64-bit `value`.
pub fn long_digits_to_bytes(value: u64) -> Vec<u8> {
    match u32::try_from(value) {
        Ok(v) if v < DIGIT_FAST_PATH_LIMIT => digits_to_bytes(v),
        _ => {
            trace!(value, "formatting digits past the fast path");
            text_to_bytes(&value.to_string())
        }
    }
}
