//! Differential Manchester coding: an equal pair decodes to `1`, an
//! unequal pair to `0`.
//!
//! The bit value lives in the transition at the slot boundary, not the
//! absolute level, so the boundary convention sits one half-bit from
//! standard Manchester and every pair is a valid symbol: the decoder
//! never resynchronizes and never emits a gap.

use super::{prepend_half_bit, reference_position};
use crate::{BitString, Symbol};

/// Align a bit string so symbol pairs fall on true symbol boundaries.
///
/// Inverse of the standard Manchester rule: an even anchor means the
/// pairing is already correct, an odd anchor (or no anchor at all) calls
/// for the `'0'` half-bit prepend.
pub fn align(bits: &BitString) -> BitString {
    let even_anchor = match reference_position(bits.as_str()) {
        Some(pos) => pos % 2 == 0,
        None => false,
    };
    if even_anchor {
        bits.clone()
    } else {
        prepend_half_bit(bits)
    }
}

/// Decode an aligned bit string into a symbol stream.
pub fn decode(bits: &BitString) -> Vec<Symbol> {
    let samples = bits.as_str().as_bytes();
    let mut symbols = Vec::with_capacity(samples.len() / 2);
    let mut cursor = 0;
    while cursor + 1 < samples.len() {
        symbols.push(if samples[cursor] == samples[cursor + 1] {
            Symbol::One
        } else {
            Symbol::Zero
        });
        cursor += 2;
    }
    symbols
}

#[cfg(test)]
mod tests {
    use super::{align, decode};
    use crate::{BitString, Symbol};

    fn bits(s: &str) -> BitString {
        BitString::parse(s).expect("valid bits")
    }

    #[test]
    fn align_keeps_even_anchor() {
        assert_eq!(align(&bits("01001011")).as_str(), "01001011");
    }

    #[test]
    fn align_prepends_on_odd_anchor() {
        assert_eq!(align(&bits("0110")).as_str(), "00110");
    }

    #[test]
    fn align_prepends_without_anchor() {
        assert_eq!(align(&bits("010101")).as_str(), "0010101");
    }

    #[test]
    fn decode_equal_pairs_are_one() {
        assert_eq!(
            decode(&bits("01001011")),
            vec![Symbol::Zero, Symbol::One, Symbol::Zero, Symbol::One]
        );
    }

    #[test]
    fn decode_never_emits_gap() {
        for s in ["", "1", "0110", "01001011", "111111", "0000001"] {
            assert!(
                decode(&bits(s)).iter().all(|s| *s != Symbol::Gap),
                "input {s:?}"
            );
        }
    }

    #[test]
    fn decode_drops_trailing_half_bit() {
        // Odd length: the last sample has no pair and is ignored.
        assert_eq!(decode(&bits("00110")), vec![Symbol::One, Symbol::One]);
    }
}
