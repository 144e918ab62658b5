//! Capture line normalization.
//!
//! A capture line is `[{N}]payload` where `{N}` is an optional, ignored
//! bit-length annotation. The payload is either a string of `0`/`1`
//! digits (passed through unchanged) or a hexadecimal digit string (each
//! digit expanded to its full-width four-bit rendering). The input kind
//! is resolved here, once, and carried through the rest of the pipeline.

pub mod error;

pub use error::FormatError;

use crate::{BitString, InputKind};

/// Strip the optional `{N}` bit-length annotation.
///
/// Everything after the first `}` is the payload; lines without a `}`
/// are returned unchanged.
pub fn strip_length(line: &str) -> &str {
    match line.find('}') {
        Some(pos) => &line[pos + 1..],
        None => line,
    }
}

/// Normalize one capture line into a bit string and its input kind.
///
/// A payload containing only `0`/`1` digits is binary and passes through
/// as-is (the empty payload counts as binary). Anything else is treated
/// as hexadecimal and expanded four bits per digit, most significant bit
/// first; a character outside `0-9a-fA-F` fails the line.
pub fn normalize_line(line: &str) -> Result<(InputKind, BitString), FormatError> {
    let payload = strip_length(line);

    if payload.bytes().all(|b| b == b'0' || b == b'1') {
        return Ok((
            InputKind::Binary,
            BitString::from_validated(payload.to_string()),
        ));
    }

    let mut bits = String::with_capacity(payload.len() * 4);
    for (position, digit) in payload.chars().enumerate() {
        let value = digit
            .to_digit(16)
            .ok_or(FormatError::InvalidHexDigit { digit, position })?;
        for shift in (0..4).rev() {
            bits.push(if value >> shift & 1 == 1 { '1' } else { '0' });
        }
    }
    Ok((InputKind::Hex, BitString::from_validated(bits)))
}

#[cfg(test)]
mod tests {
    use super::{normalize_line, strip_length};
    use crate::InputKind;

    #[test]
    fn strip_length_removes_annotation() {
        assert_eq!(strip_length("{16}abcd"), "abcd");
    }

    #[test]
    fn strip_length_without_annotation_is_identity() {
        assert_eq!(strip_length("abcd"), "abcd");
    }

    #[test]
    fn strip_length_keeps_text_after_first_brace() {
        assert_eq!(strip_length("{8}ab}cd"), "ab}cd");
    }

    #[test]
    fn binary_payload_is_identity() {
        let (kind, bits) = normalize_line("01001011").unwrap();
        assert_eq!(kind, InputKind::Binary);
        assert_eq!(bits.as_str(), "01001011");
    }

    #[test]
    fn empty_payload_is_binary() {
        let (kind, bits) = normalize_line("{0}").unwrap();
        assert_eq!(kind, InputKind::Binary);
        assert!(bits.is_empty());
    }

    #[test]
    fn hex_payload_expands_full_width() {
        let (kind, bits) = normalize_line("abcd").unwrap();
        assert_eq!(kind, InputKind::Hex);
        assert_eq!(bits.as_str(), "1010101111001101");
    }

    #[test]
    fn hex_keeps_leading_zero_bits() {
        let (_, bits) = normalize_line("0f").unwrap();
        assert_eq!(bits.as_str(), "00001111");
    }

    #[test]
    fn upper_and_lower_case_hex_agree() {
        let (_, lower) = normalize_line("beef").unwrap();
        let (_, upper) = normalize_line("BEEF").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn invalid_hex_digit_is_reported_with_position() {
        let err = normalize_line("{4}ax").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'x'"));
        assert!(msg.contains("position 1"));
    }

    #[test]
    fn ambiguous_digits_stay_binary() {
        // "10" is a valid hex string too; binary wins by construction.
        let (kind, bits) = normalize_line("10").unwrap();
        assert_eq!(kind, InputKind::Binary);
        assert_eq!(bits.as_str(), "10");
    }
}
