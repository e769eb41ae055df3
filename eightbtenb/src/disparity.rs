//! Running disparity tracking.

use crate::tables::CodewordEntry;

/// The running disparity of an 8b/10b stream.
///
/// Every stream starts out with a negative running disparity. The value is
/// threaded through the encoder explicitly, so independent streams never
/// share state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Disparity {
    /// Negative running disparity, the state at the start of a stream.
    #[default]
    Negative,
    /// Positive running disparity.
    Positive,
}

impl Disparity {
    /// Return the opposite disparity.
    #[inline(always)]
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }

    /// Whether the disparity is negative.
    #[inline(always)]
    pub fn is_negative(self) -> bool {
        self == Self::Negative
    }

    /// Whether the disparity is positive.
    #[inline(always)]
    pub fn is_positive(self) -> bool {
        self == Self::Positive
    }

    /// Select the codeword of `entry` for this disparity.
    ///
    /// `width` is the codeword width in bits. Under a negative disparity the
    /// listed codeword is used as is, under a positive disparity it is
    /// complemented if the entry has an inverted form. The returned
    /// disparity is flipped if the entry is unbalanced.
    #[inline(always)]
    pub fn apply(self, entry: &CodewordEntry, width: u8) -> (u8, Self) {
        let mask = ((1_u16 << width) - 1) as u8;

        let codeword = if self.is_positive() && entry.invert_value {
            !entry.codeword & mask
        } else {
            entry.codeword & mask
        };

        let next = if entry.invert_rd { self.flip() } else { self };

        (codeword, next)
    }
}
