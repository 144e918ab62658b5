//! Linecode core library for decoding captured line-coded bitstreams.
//!
//! This crate implements the decoding pipeline used by the CLI: capture
//! lines are normalized (length marker stripped, hex payloads expanded to
//! bits), aligned to the symbol boundary of the selected line coding, and
//! decoded two half-bits at a time into a symbol stream that is grouped
//! into runs for reporting. Decoding is string-oriented and side-effect
//! free; all I/O stays in the CLI. Coding conventions are captured in the
//! `coding` modules so the pipeline entry stays minimal.
//!
//! Invariants:
//! - A line's input kind (binary or hex) is resolved exactly once, by the
//!   normalizer.
//! - Alignment changes the bit string length by at most one, and only by
//!   prepending a half-bit.
//! - Gap symbols are produced by standard Manchester decoding only.
//! - Processing one line is a pure function of that line; no state is
//!   shared between lines.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de décodage : normalisation -> alignement ->
//! décodage (Manchester ou Manchester différentiel) -> regroupement en
//! rafales. Les E/S restent dans la CLI, les conventions de codage dans
//! `coding`. Garanties : type d'entrée résolu une seule fois, alignement
//! par demi-bit au plus, symboles Gap réservés au Manchester standard.
//!
//! # Examples
//! ```
//! use linecode_core::{Coding, decode_line};
//!
//! let report = decode_line(Coding::Manchester, "01001011")?;
//! assert_eq!(report.groups.len(), 2);
//! assert_eq!(report.groups[1].hex, "0x3");
//! # Ok::<(), linecode_core::FormatError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod coding;
pub mod normalize;
pub mod report;

pub use normalize::FormatError;
pub use report::build_groups;

/// Line coding scheme selecting the alignment and decode rules.
///
/// # Examples
/// ```
/// use linecode_core::Coding;
///
/// assert_ne!(Coding::Manchester, Coding::DifferentialManchester);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coding {
    /// Standard Manchester: the bit value is the transition direction
    /// within a slot.
    Manchester,
    /// Differential Manchester: the bit value is the presence of a
    /// transition at the slot boundary.
    DifferentialManchester,
}

/// Input kind of a capture line, resolved once during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Payload was already a string of `0`/`1` digits.
    Binary,
    /// Payload was hexadecimal and has been expanded four bits per digit.
    Hex,
}

/// Validated sequence of `'0'`/`'1'` characters, one sampled line level
/// per position.
///
/// Built by [`normalize::normalize_line`] or by [`BitString::parse`];
/// immutable once constructed.
///
/// # Examples
/// ```
/// use linecode_core::BitString;
///
/// let bits = BitString::parse("0110")?;
/// assert_eq!(bits.as_str(), "0110");
/// # Ok::<(), linecode_core::FormatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString(String);

impl BitString {
    /// Validate a string of binary digits.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        for (position, digit) in s.chars().enumerate() {
            if digit != '0' && digit != '1' {
                return Err(FormatError::InvalidBitDigit { digit, position });
            }
        }
        Ok(Self(s.to_string()))
    }

    /// Wrap a string already known to contain only `0`/`1` digits.
    pub(crate) fn from_validated(bits: String) -> Self {
        debug_assert!(bits.bytes().all(|b| b == b'0' || b == b'1'));
        Self(bits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One decoded symbol: a logical bit, or a resynchronization gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Zero,
    One,
    /// Half-bit pair did not match a valid symbol pattern; the decoder
    /// resynchronized at the next offset. Standard Manchester only.
    Gap,
}

impl Symbol {
    /// The bit digit for this symbol, or `None` for a gap.
    pub fn bit(self) -> Option<char> {
        match self {
            Symbol::Zero => Some('0'),
            Symbol::One => Some('1'),
            Symbol::Gap => None,
        }
    }
}

/// Maximal run of bit symbols between gaps, rendered as binary and hex.
///
/// # Examples
/// ```
/// use linecode_core::BitGroup;
///
/// let group = BitGroup {
///     bits: "0101".to_string(),
///     hex: "0x5".to_string(),
/// };
/// assert_eq!(group.hex, "0x5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitGroup {
    /// Binary digits of the run, in decode order.
    pub bits: String,
    /// Lowercase hexadecimal value of the run, `0x`-prefixed, leading
    /// zero digits stripped.
    pub hex: String,
}

/// Decode result for one capture line.
///
/// # Examples
/// ```
/// use linecode_core::{Coding, InputKind, decode_line};
///
/// let report = decode_line(Coding::DifferentialManchester, "{16}abcd")?;
/// assert_eq!(report.kind, InputKind::Hex);
/// assert_eq!(report.bits.len(), 16);
/// # Ok::<(), linecode_core::FormatError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineReport {
    /// Coding scheme the line was decoded with.
    pub coding: Coding,
    /// Input kind resolved by the normalizer.
    pub kind: InputKind,
    /// Normalized (pre-alignment) bit string.
    pub bits: String,
    /// Decoded runs in stream order; empty runs are discarded.
    pub groups: Vec<BitGroup>,
}

/// Run the full pipeline for one capture line.
///
/// Normalizes the line, aligns it for `coding`, decodes the symbol stream
/// and groups it into runs. Degenerate input (empty payload, fewer than
/// two bits, no alignment anchor) yields a report with no groups rather
/// than an error.
///
/// # Examples
/// ```
/// use linecode_core::{Coding, decode_line};
///
/// let report = decode_line(Coding::DifferentialManchester, "01001011")?;
/// assert_eq!(report.groups.len(), 1);
/// assert_eq!(report.groups[0].bits, "0101");
/// assert_eq!(report.groups[0].hex, "0x5");
/// # Ok::<(), linecode_core::FormatError>(())
/// ```
pub fn decode_line(coding: Coding, line: &str) -> Result<LineReport, FormatError> {
    let (kind, bits) = normalize::normalize_line(line)?;
    let symbols = match coding {
        Coding::Manchester => {
            coding::manchester::decode(&coding::manchester::align(&bits))
        }
        Coding::DifferentialManchester => {
            coding::differential::decode(&coding::differential::align(&bits))
        }
    };
    Ok(LineReport {
        coding,
        kind,
        bits: bits.into_string(),
        groups: report::build_groups(&symbols),
    })
}
