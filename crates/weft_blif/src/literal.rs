//! The two numeric-literal dialects of BLIF constants.
//!
//! `.attr` values and unquoted `.param` values use a strict binary
//! dialect over `{0,1,x,X}`. Quoted `.param` values additionally go
//! through the Radiant multi-radix dialect first, falling back to
//! verbatim string storage when the text is not a recognizable number.

use crate::codes;
use weft_common::BitVector;
use weft_diagnostics::Diagnostic;
use weft_source::Span;

/// Decodes a strict binary constant.
///
/// The leftmost character is the most significant: bit `i` of the result
/// is set iff character `len-1-i` is `'1'`. `0`, `x` and `X` decode to a
/// cleared bit; anything else is fatal.
pub fn decode_binary(text: &str, span: Span) -> Result<BitVector, Diagnostic> {
    let bytes = text.as_bytes();
    let mut bits = BitVector::new(bytes.len() as u32);
    for (i, &b) in bytes.iter().rev().enumerate() {
        match b {
            b'1' => bits.set(i as u32, true),
            b'0' | b'x' | b'X' => {}
            _ => {
                return Err(Diagnostic::error(
                    codes::BAD_LITERAL,
                    "invalid character in integer constant",
                    span,
                ))
            }
        }
    }
    Ok(bits)
}

/// Attempts to decode a Radiant multi-radix literal.
///
/// Returns `Ok(None)` when the text is not a number in this dialect (the
/// caller stores it as a string instead). The only fatal outcome is a
/// decimal value overflowing 64 bits.
///
/// A leading `0` selects the radix via the second character: `x` is
/// hexadecimal, `b` is binary, anything else octal (with only the `0`
/// consumed). Without a leading `0` the text is decimal, stored
/// 64 bits wide; the prefixed radices store one digit per 4, 1, or 3
/// bits respectively.
pub fn decode_vendor(text: &str, span: Span) -> Result<Option<BitVector>, Diagnostic> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return Ok(None);
    }

    let (radix, bits_per_digit, prefix) = if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' => (16u32, 4usize, 2usize),
            b'b' => (2, 1, 2),
            _ => (8, 3, 1),
        }
    } else {
        (10, 0, 0)
    };

    if radix == 10 {
        let mut value: u64 = 0;
        for &b in bytes {
            if !b.is_ascii_digit() {
                return Ok(None);
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(b - b'0')))
                .ok_or_else(|| {
                    Diagnostic::error(
                        codes::DECIMAL_OVERFLOW,
                        "decimal integer overflow in parameter",
                        span,
                    )
                })?;
        }
        return Ok(Some(BitVector::from_u64(value, 64)));
    }

    let digits = &bytes[prefix..];
    let mut bits = BitVector::new((digits.len() * bits_per_digit) as u32);
    for (i, &b) in digits.iter().rev().enumerate() {
        let Some(value) = digit_value(b) else {
            return Ok(None);
        };
        if value >= radix {
            return Ok(None);
        }
        for j in 0..bits_per_digit {
            if value & (1 << j) != 0 {
                bits.set((i * bits_per_digit + j) as u32, true);
            }
        }
    }
    Ok(Some(bits))
}

/// The numeric value of an alphanumeric digit, case-insensitive:
/// `0`-`9` then `A`-`Z` as 10–35.
fn digit_value(b: u8) -> Option<u32> {
    match b.to_ascii_uppercase() {
        d @ b'0'..=b'9' => Some(u32::from(d - b'0')),
        d @ b'A'..=b'Z' => Some(u32::from(d - b'A') + 10),
        _ => None,
    }
}
