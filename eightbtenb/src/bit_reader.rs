//! Bit-level reader for 8b/10b encoded data streams.
//!
//! Bits are consumed starting at the least significant bit of each byte, and
//! the first bit read becomes the least significant bit of the result.

#[derive(Debug, Clone)]
pub(crate) struct BitReader<'a> {
    data: &'a [u8],
    cur_pos: usize,
    /// The number of readable bits, never more than `8 * data.len()`.
    end: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the first `bit_len` bits of `data`.
    ///
    /// `bit_len` is clamped to the size of `data`.
    #[inline(always)]
    pub(crate) fn new(data: &'a [u8], bit_len: usize) -> Self {
        Self {
            data,
            cur_pos: 0,
            end: bit_len.min(data.len() * 8),
        }
    }

    /// Read up to 16 bits.
    ///
    /// Returns `None` if fewer than `bit_size` bits are left.
    #[inline(always)]
    pub(crate) fn read(&mut self, bit_size: u8) -> Option<u32> {
        let item = self.peek(bit_size)?;
        self.cur_pos += bit_size as usize;

        Some(item)
    }

    #[inline(always)]
    pub(crate) fn peek(&self, bit_size: u8) -> Option<u32> {
        if bit_size > 16 || self.remaining() < bit_size as usize {
            return None;
        }

        let byte_pos = self.cur_pos / 8;
        let bit_pos = self.cur_pos % 8;

        // At most 7 + 16 bits are needed, which always fit into three bytes.
        let mut window = 0_u32;
        for (i, byte) in self.data[byte_pos..].iter().take(3).enumerate() {
            window |= (*byte as u32) << (8 * i);
        }

        Some((window >> bit_pos) & bit_mask(bit_size))
    }

    /// The number of bits that can still be read.
    #[inline(always)]
    pub(crate) fn remaining(&self) -> usize {
        self.end - self.cur_pos
    }

    /// The current position in bits.
    #[inline(always)]
    pub(crate) fn cur_pos(&self) -> usize {
        self.cur_pos
    }
}

#[inline(always)]
pub(crate) fn bit_mask(bit_size: u8) -> u32 {
    ((1_u64 << bit_size) - 1) as u32
}
