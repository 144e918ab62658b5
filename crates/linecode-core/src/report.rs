//! Grouping and rendering of decoded symbol streams.
//!
//! Gap symbols partition the stream into runs; empty runs are dropped and
//! each remaining run is rendered as binary digits plus a hexadecimal
//! value. Rendering works digit-wise over the bit string, so runs of any
//! length render without overflow.

use crate::{BitGroup, Symbol};

/// Split a symbol stream on gaps into rendered bit groups.
pub fn build_groups(symbols: &[Symbol]) -> Vec<BitGroup> {
    let mut groups = Vec::new();
    let mut run = String::new();
    for &symbol in symbols {
        match symbol.bit() {
            Some(bit) => run.push(bit),
            None => flush_run(&mut groups, &mut run),
        }
    }
    flush_run(&mut groups, &mut run);
    groups
}

fn flush_run(groups: &mut Vec<BitGroup>, run: &mut String) {
    if run.is_empty() {
        return;
    }
    let bits = std::mem::take(run);
    let hex = render_hex(&bits);
    groups.push(BitGroup { bits, hex });
}

/// Render a string of binary digits as a `0x`-prefixed hexadecimal value.
///
/// Nibbles are taken from the least significant end; leading zero digits
/// are stripped but at least one digit is kept, so `"0"` renders `0x0`.
pub fn render_hex(bits: &str) -> String {
    const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

    let samples = bits.as_bytes();
    let mut digits = Vec::with_capacity(samples.len() / 4 + 1);
    let mut end = samples.len();
    while end > 0 {
        let start = end.saturating_sub(4);
        let mut nibble = 0u8;
        for &sample in &samples[start..end] {
            nibble = nibble << 1 | (sample - b'0');
        }
        digits.push(HEX_DIGITS[nibble as usize]);
        end = start;
    }
    while digits.len() > 1 && digits.last() == Some(&b'0') {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(b'0');
    }

    let mut rendered = String::with_capacity(digits.len() + 2);
    rendered.push_str("0x");
    rendered.extend(digits.iter().rev().map(|&digit| digit as char));
    rendered
}
