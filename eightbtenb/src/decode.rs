//! Decoding of 10-bit codewords back into bytes.

use alloc::vec::Vec;

use crate::bit_reader::BitReader;
use crate::encode::SYMBOL_BITS;
use crate::error::{DecodeError, Result};
use crate::tables::{FIVE_SIX, THREE_FOUR};

/// Settings that control how a bit stream is decoded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeSettings {
    /// Require the requested bits to decode into whole symbols.
    ///
    /// If set, leftover bits after the last whole symbol fail the decode
    /// with [`DecodeError::UnusedBytes`] instead of being left unconsumed.
    pub exact: bool,
}

/// The output of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The number of bits that were consumed, always a multiple of 10.
    pub consumed: usize,
    /// The decoded bytes.
    pub data: Vec<u8>,
}

impl Decoded {
    /// Check that all of the `requested` bits were consumed.
    pub fn exact(&self, requested: usize) -> Result<()> {
        check_exact(self.consumed, requested)
    }
}

/// Decode a single 10-bit codeword, as produced by
/// [`encode_symbol`](crate::encode_symbol).
///
/// Bits above the lowest 10 are ignored. Code violation offsets are
/// relative to the start of the symbol.
#[inline(always)]
pub fn decode_symbol(symbol: u16) -> Result<u8> {
    let low = FIVE_SIX
        .decode(symbol as u8 & 0x3f)
        .ok_or(DecodeError::CodeViolation { offset: 0 })?;
    let high = THREE_FOUR
        .decode((symbol >> 6) as u8 & 0x0f)
        .ok_or(DecodeError::CodeViolation { offset: 6 })?;

    Ok((high << 5) | low)
}

/// Decode the first `size_in_bits` bits of `data`.
///
/// Whole symbols are decoded until fewer than 10 bits of the requested size
/// remain. Those leftover bits are not an error, the returned
/// [`Decoded::consumed`] tells how far decoding got.
///
/// Fails with [`DecodeError::Truncated`] if `data` holds fewer than
/// `size_in_bits` bits, and with [`DecodeError::CodeViolation`] if a chunk is
/// not a valid codeword.
pub fn decode(data: &[u8], size_in_bits: usize) -> Result<Decoded> {
    decode_with(data, size_in_bits, &DecodeSettings::default())
}

/// Decode the first `size_in_bits` bits of `data` with the given settings.
pub fn decode_with(
    data: &[u8],
    size_in_bits: usize,
    settings: &DecodeSettings,
) -> Result<Decoded> {
    let mut out = Vec::new();
    let consumed = decode_into(data, size_in_bits, settings, &mut out)?;

    Ok(Decoded {
        consumed,
        data: out,
    })
}

/// Decode the first `size_in_bits` bits of `data`, appending the bytes to
/// `out`.
///
/// Returns the number of consumed bits. On error, `out` may contain the bytes
/// that were decoded before the failing symbol.
pub fn decode_into(
    data: &[u8],
    size_in_bits: usize,
    settings: &DecodeSettings,
    out: &mut Vec<u8>,
) -> Result<usize> {
    let available = data.len().saturating_mul(8);

    if size_in_bits > available {
        return Err(DecodeError::Truncated {
            requested: size_in_bits,
            available,
        });
    }

    ltrace!("decoding {} bits", size_in_bits);

    let mut reader = BitReader::new(data, size_in_bits);
    out.reserve(size_in_bits / SYMBOL_BITS);

    while let Some(symbol) = reader.read(SYMBOL_BITS as u8) {
        let offset = reader.cur_pos() - SYMBOL_BITS;
        let six = (symbol & 0x3f) as u8;
        let low = FIVE_SIX.decode(six).ok_or_else(|| violation(offset, six))?;

        let four = (symbol >> 6) as u8;
        let high = THREE_FOUR
            .decode(four)
            .ok_or_else(|| violation(offset + 6, four))?;

        out.push((high << 5) | low);
    }

    let consumed = reader.cur_pos();

    if consumed < size_in_bits {
        ldebug!(
            "{} bits left unconsumed after {} bits",
            size_in_bits - consumed,
            consumed
        );
    }

    if settings.exact {
        check_exact(consumed, size_in_bits)?;
    }

    Ok(consumed)
}

fn violation(offset: usize, pattern: u8) -> DecodeError {
    lwarn!("invalid codeword {:#04x} at bit offset {}", pattern, offset);

    DecodeError::CodeViolation { offset }
}

fn check_exact(consumed: usize, requested: usize) -> Result<()> {
    if consumed < requested {
        Err(DecodeError::UnusedBytes {
            consumed,
            requested,
        })
    } else {
        Ok(())
    }
}
