//! Error types for 8b/10b decoding.

use core::fmt;

/// A specialized [`Result`] type for decoding operations.
pub type Result<T> = core::result::Result<T, DecodeError>;

/// An error encountered while decoding an 8b/10b bit stream.
///
/// Encoding cannot fail, every byte has a codeword under either disparity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A 6-bit or 4-bit chunk is not a codeword under either disparity.
    CodeViolation {
        /// The bit offset at which the offending chunk starts.
        offset: usize,
    },
    /// More bits were requested than the input holds.
    Truncated {
        /// The number of bits that were requested.
        requested: usize,
        /// The number of bits the input actually holds.
        available: usize,
    },
    /// Exact consumption was required, but bits were left over after the
    /// last whole symbol.
    UnusedBytes {
        /// The number of bits that were decoded.
        consumed: usize,
        /// The number of bits that were requested.
        requested: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeViolation { offset } => {
                write!(f, "invalid codeword at bit offset {offset}")
            }
            Self::Truncated {
                requested,
                available,
            } => write!(
                f,
                "input truncated: requested {requested} bits, got {available}"
            ),
            Self::UnusedBytes {
                consumed,
                requested,
            } => write!(
                f,
                "{} unused bits after {consumed} of {requested} decoded bits",
                requested - consumed
            ),
        }
    }
}

impl core::error::Error for DecodeError {}
