//! Bit-level writer producing 8b/10b encoded data streams.

use alloc::vec::Vec;

use crate::bit_reader::bit_mask;

/// An append-only bit writer, filling each byte starting at its least
/// significant bit.
///
/// Unwritten bits of the last byte are always zero.
#[derive(Debug, Clone, Default)]
pub(crate) struct BitWriter {
    data: Vec<u8>,
    cur_pos: usize,
}

impl BitWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(bits: usize) -> Self {
        Self {
            data: Vec::with_capacity(bits.div_ceil(8)),
            cur_pos: 0,
        }
    }

    /// Append the lowest `bit_size` bits of `val`, least significant first.
    #[inline(always)]
    pub(crate) fn write(&mut self, val: u32, bit_size: u8) {
        debug_assert!(bit_size <= 32);

        let mut value = val & bit_mask(bit_size);
        let mut bits_left = bit_size as usize;

        while bits_left > 0 {
            let byte_pos = self.cur_pos / 8;
            let bit_pos = self.cur_pos % 8;

            if byte_pos == self.data.len() {
                self.data.push(0);
            }

            let bits_in_byte = (8 - bit_pos).min(bits_left);
            let chunk = value & bit_mask(bits_in_byte as u8);
            self.data[byte_pos] |= (chunk << bit_pos) as u8;

            value >>= bits_in_byte;
            bits_left -= bits_in_byte;
            self.cur_pos += bits_in_byte;
        }
    }

    /// Return the number of written bits.
    #[inline]
    pub(crate) fn cur_pos(&self) -> usize {
        self.cur_pos
    }

    pub(crate) fn into_inner(self) -> Vec<u8> {
        self.data
    }
}
