//! Standard Manchester coding: `01` decodes to `1`, `10` decodes to `0`.
//!
//! An invalid pair (`00` or `11`) yields a [`Symbol::Gap`] and the cursor
//! advances by one instead of two, resynchronizing the pairing at the
//! opposite parity.

use super::{prepend_half_bit, reference_position};
use crate::{BitString, Symbol};

/// Align a bit string so symbol pairs fall on true symbol boundaries.
///
/// The anchor run must sit at an odd offset for standard Manchester; an
/// even anchor means the first sampled half-bit is a boundary artifact,
/// so a `'0'` half-bit is prepended. Without an anchor the string is
/// returned unchanged.
pub fn align(bits: &BitString) -> BitString {
    let even_anchor = match reference_position(bits.as_str()) {
        Some(pos) => pos % 2 == 0,
        None => false,
    };
    if even_anchor {
        prepend_half_bit(bits)
    } else {
        bits.clone()
    }
}

/// Decode an aligned bit string into a symbol stream.
pub fn decode(bits: &BitString) -> Vec<Symbol> {
    let samples = bits.as_str().as_bytes();
    let mut symbols = Vec::with_capacity(samples.len() / 2);
    let mut cursor = 0;
    while cursor + 1 < samples.len() {
        let step = match (samples[cursor], samples[cursor + 1]) {
            (b'0', b'1') => {
                symbols.push(Symbol::One);
                2
            }
            (b'1', b'0') => {
                symbols.push(Symbol::Zero);
                2
            }
            _ => {
                // Resynchronize at the opposite parity.
                symbols.push(Symbol::Gap);
                1
            }
        };
        cursor += step;
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
    fn align_prepends_on_even_anchor() {
        assert_eq!(align(&bits("01001011")).as_str(), "001001011");
    }

    #[test]
    fn align_keeps_odd_anchor() {
        assert_eq!(align(&bits("0110")).as_str(), "0110");
    }

    #[test]
    fn align_without_anchor_is_identity() {
        assert_eq!(align(&bits("010101")).as_str(), "010101");
        assert_eq!(align(&bits("")).as_str(), "");
    }

    #[test]
    fn align_adds_at_most_one_half_bit() {
        for s in ["", "1", "01", "0110", "01001011", "1111", "0000"] {
            let input = bits(s);
            let aligned = align(&input);
            assert!(aligned.len() - input.len() <= 1, "input {s:?}");
        }
    }

    #[test]
    fn decode_valid_pairs() {
        assert_eq!(decode(&bits("0110")), vec![Symbol::One, Symbol::Zero]);
    }

    #[test]
    fn decode_invalid_pair_emits_gap_and_resynchronizes() {
        // "001001011" covers a gap at even parity, then recovery at odd.
        assert_eq!(
            decode(&bits("001001011")),
            vec![
                Symbol::Gap,
                Symbol::One,
                Symbol::Gap,
                Symbol::One,
                Symbol::One,
            ]
        );
    }

    #[test]
    fn decode_short_input_is_empty() {
        assert!(decode(&bits("")).is_empty());
        assert!(decode(&bits("1")).is_empty());
    }

    #[test]
    fn decode_cursor_covers_whole_string() {
        // Steps of 1 and 2 stop with at most one trailing half-bit.
        for s in ["01", "0110", "001001011", "111111", "010010"] {
            let input = bits(s);
            let symbols = decode(&input);
            let advanced: usize = symbols
                .iter()
                .map(|s| if *s == Symbol::Gap { 1 } else { 2 })
                .sum();
            assert!(advanced == input.len() || advanced == input.len() - 1);
        }
    }
}
