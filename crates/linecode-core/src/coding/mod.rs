//! Line coding schemes.
//!
//! Each scheme follows the same two-stage structure:
//! - `align`: find the symbol boundary and optionally prepend a half-bit
//! - `decode`: consume the aligned string two half-bits at a time
//!
//! Both schemes share the alignment anchor: the earliest run of two equal
//! samples (`11` or `00`) marks a position that cannot straddle a symbol
//! boundary. They differ only in which anchor parity calls for the
//! half-bit prepend, and in how a half-bit pair maps to a symbol.
//!
//! Decoders are pure and contain no I/O; normalization and reporting
//! happen in the surrounding pipeline.
//!
//! Version française (résumé):
//! Chaque codage suit deux étapes : `align` (ancrage de la frontière de
//! symbole, demi-bit préfixé au besoin) puis `decode` (consommation par
//! paires de demi-bits). L'ancre est commune ; seules la parité retenue
//! et la table de symboles diffèrent.

pub mod differential;
pub mod manchester;

use crate::BitString;

/// Position of the earliest `11` or `00` run, the alignment anchor.
///
/// `11` wins unless it is absent or `00` occurs strictly earlier. `None`
/// when the string contains no run of two equal samples.
pub(crate) fn reference_position(bits: &str) -> Option<usize> {
    let hh = bits.find("11");
    let ll = bits.find("00");
    match (hh, ll) {
        (None, _) => ll,
        (Some(h), Some(l)) if l < h => Some(l),
        _ => hh,
    }
}

/// Prepend a `'0'` half-bit, shifting all subsequent pairing by one.
pub(crate) fn prepend_half_bit(bits: &BitString) -> BitString {
    let mut shifted = String::with_capacity(bits.len() + 1);
    shifted.push('0');
    shifted.push_str(bits.as_str());
    BitString::from_validated(shifted)
}
