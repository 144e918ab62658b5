use thiserror::Error;

/// Errors raised while turning a capture line into a bit string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid hexadecimal digit '{digit}' at position {position}")]
    InvalidHexDigit { digit: char, position: usize },
    #[error("invalid bit digit '{digit}' at position {position}")]
    InvalidBitDigit { digit: char, position: usize },
}
