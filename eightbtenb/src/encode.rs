//! Encoding of bytes into 10-bit codewords.

use alloc::vec::Vec;

use crate::bit_writer::BitWriter;
use crate::disparity::Disparity;
use crate::tables::{FIVE_SIX, THREE_FOUR};

/// The width of an encoded symbol in bits.
pub const SYMBOL_BITS: usize = 10;

/// Encode a single byte under the given running disparity.
///
/// The low five bits go through the 5b/6b table and the high three bits
/// through the 3b/4b table, using the disparity left behind by the first
/// group. The 6-bit codeword occupies the low bits of the result, so bit 0 is
/// the first bit on the wire.
///
/// Returns the 10-bit codeword and the disparity after it.
#[inline(always)]
pub fn encode_symbol(byte: u8, rd: Disparity) -> (u16, Disparity) {
    let (low, rd) = FIVE_SIX.encode(byte & 0x1f, rd);
    let (high, rd) = THREE_FOUR.encode(byte >> 5, rd);

    (((high as u16) << 6) | low as u16, rd)
}

/// The result of finishing an [`Encoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The packed bit stream. Bits past `bits` in the last byte are zero.
    pub data: Vec<u8>,
    /// The number of valid bits in `data`.
    pub bits: usize,
    /// The running disparity after the last symbol.
    pub disparity: Disparity,
}

/// A stream encoder.
///
/// Symbols of consecutive [`Encoder::encode`] calls are packed back to back,
/// so a stream may be fed in arbitrary pieces.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    rd: Disparity,
    writer: BitWriter,
}

impl Encoder {
    /// Create an encoder starting with a negative running disparity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder starting with the given running disparity.
    pub fn with_disparity(rd: Disparity) -> Self {
        Self {
            rd,
            writer: BitWriter::new(),
        }
    }

    /// Encode `data` and append it to the stream.
    pub fn encode(&mut self, data: &[u8]) {
        ltrace!(
            "encoding {} bytes at bit {}",
            data.len(),
            self.writer.cur_pos()
        );

        for byte in data {
            let (symbol, rd) = encode_symbol(*byte, self.rd);
            self.writer.write(symbol as u32, SYMBOL_BITS as u8);
            self.rd = rd;
        }
    }

    /// The current running disparity.
    pub fn disparity(&self) -> Disparity {
        self.rd
    }

    /// The number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.writer.cur_pos()
    }

    /// Finish the stream.
    pub fn finish(self) -> Encoded {
        Encoded {
            bits: self.writer.cur_pos(),
            data: self.writer.into_inner(),
            disparity: self.rd,
        }
    }
}

/// Encode `data` as a fresh stream, starting with a negative running
/// disparity.
///
/// The output holds `10 * data.len()` bits, padded with zeros to a whole
/// number of bytes.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut encoder = Encoder {
        rd: Disparity::Negative,
        writer: BitWriter::with_capacity(data.len() * SYMBOL_BITS),
    };
    encoder.encode(data);

    encoder.finish().data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol() {
        // D31.7 starts with the negative disparity forms.
        assert_eq!(encode_symbol(0xff, Disparity::Negative), (0x1ca, Disparity::Negative));
        assert_eq!(encode_symbol(0xff, Disparity::Positive), (0x235, Disparity::Positive));
        // D0.0 with the disparity left behind by D31.7.
        assert_eq!(encode_symbol(0x00, Disparity::Negative), (0x346, Disparity::Negative));
    }

    #[test]
    fn known_stream() {
        assert_eq!(
            encode(&[0xff, 0x00, 0xaa, 0x55]),
            [0xca, 0x19, 0xad, 0x56, 0xa5]
        );
    }

    #[test]
    fn repeated_byte() {
        // D10.2 is balanced in both halves, so repeating it never changes
        // the disparity and only the bit position moves.
        let mut encoder = Encoder::new();
        encoder.encode(&[0x4a]);
        assert_eq!(encoder.bit_len(), 10);
        encoder.encode(&[0x4a]);
        assert_eq!(encoder.bit_len(), 20);

        let encoded = encoder.finish();
        assert_eq!(encoded.data, [0xaa, 0xaa, 0x0a]);
        assert_eq!(encoded.bits, 20);
        assert_eq!(encoded.disparity, Disparity::Negative);
    }

    #[test]
    fn split_input_matches_whole() {
        let data: Vec<u8> = (0..=255).collect();

        let mut encoder = Encoder::new();
        for chunk in data.chunks(7) {
            encoder.encode(chunk);
        }

        assert_eq!(encoder.finish().data, encode(&data));
    }

    #[test]
    fn empty() {
        assert!(encode(&[]).is_empty());
        let encoded = Encoder::with_disparity(Disparity::Positive).finish();
        assert_eq!(encoded.bits, 0);
        assert_eq!(encoded.disparity, Disparity::Positive);
    }
}
