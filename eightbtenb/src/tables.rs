//! The 5b/6b and 3b/4b substitution tables.
//!
//! Codewords are stored with bit `a` (the first bit on the wire) as the least
//! significant bit. The listed codeword is the one emitted while the running
//! disparity is negative, see [`Disparity::apply`] for how the alternate form
//! is derived.
//!
//! The decode tables are built from the encode tables at compile time and
//! map every legal codeword pattern, in either polarity, back to its plain
//! value.

use crate::disparity::Disparity;

/// Marks a codeword pattern that has no plain value in a decode table.
pub const INVALID: u8 = 0xFF;

/// A single row of a substitution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodewordEntry {
    /// The plain value, equal to the index of the entry in its table.
    pub value: u8,
    /// The codeword emitted while the running disparity is negative.
    pub codeword: u8,
    /// Whether emitting the codeword flips the running disparity.
    pub invert_rd: bool,
    /// Whether the positive disparity form is the complement of `codeword`.
    pub invert_value: bool,
}

impl CodewordEntry {
    const fn new(value: u8, codeword: u8, invert_rd: bool, invert_value: bool) -> Self {
        Self {
            value,
            codeword,
            invert_rd,
            invert_value,
        }
    }
}

/// A substitution table together with its derived decode table.
#[derive(Debug)]
pub struct SymbolTable {
    entries: &'static [CodewordEntry],
    decode: &'static [u8],
    width: u8,
}

impl SymbolTable {
    /// The width of a codeword in bits.
    #[inline(always)]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// The bit mask covering a whole codeword.
    #[inline(always)]
    pub fn mask(&self) -> u8 {
        (self.decode.len() - 1) as u8
    }

    /// All entries, indexed by plain value.
    pub fn entries(&self) -> &'static [CodewordEntry] {
        self.entries
    }

    /// Return the entry of a plain value.
    ///
    /// Bits above the table's plain value width are ignored.
    #[inline(always)]
    pub fn entry(&self, value: u8) -> &'static CodewordEntry {
        let entries = self.entries;
        &entries[value as usize & (entries.len() - 1)]
    }

    /// Encode a plain value under the given running disparity.
    ///
    /// Returns the codeword together with the disparity after it.
    #[inline(always)]
    pub fn encode(&self, value: u8, rd: Disparity) -> (u8, Disparity) {
        rd.apply(self.entry(value), self.width)
    }

    /// Map a codeword back to its plain value.
    ///
    /// Returns `None` if the pattern is not a codeword under either
    /// disparity. Bits above the codeword width are ignored.
    #[inline(always)]
    pub fn decode(&self, codeword: u8) -> Option<u8> {
        match self.decode[(codeword & self.mask()) as usize] {
            INVALID => None,
            value => Some(value),
        }
    }
}

/// Build the decode table for the given entries.
///
/// `N` is the number of possible codeword patterns, so the codeword mask is
/// `N - 1`. Fails compilation if two patterns collide.
const fn build_decode_table<const N: usize>(entries: &[CodewordEntry]) -> [u8; N] {
    let mask = (N - 1) as u8;
    let mut table = [INVALID; N];
    let mut i = 0;

    while i < entries.len() {
        let entry = entries[i];
        assert!(entry.value as usize == i, "entries must be ordered by value");

        let base = (entry.codeword & mask) as usize;
        assert!(table[base] == INVALID, "duplicate codeword");
        table[base] = entry.value;

        if entry.invert_value {
            let inverted = (!entry.codeword & mask) as usize;
            assert!(table[inverted] == INVALID, "duplicate inverted codeword");
            table[inverted] = entry.value;
        }

        i += 1;
    }

    table
}

const FIVE_SIX_ENTRIES: [CodewordEntry; 32] = [
    CodewordEntry::new(0, 0x06, true, true),
    CodewordEntry::new(1, 0x11, true, true),
    CodewordEntry::new(2, 0x12, true, true),
    CodewordEntry::new(3, 0x23, false, false),
    CodewordEntry::new(4, 0x14, true, true),
    CodewordEntry::new(5, 0x25, false, false),
    CodewordEntry::new(6, 0x26, false, false),
    // D.07 is balanced but still alternates between 111000 and 000111.
    CodewordEntry::new(7, 0x38, false, true),
    CodewordEntry::new(8, 0x18, true, true),
    CodewordEntry::new(9, 0x29, false, false),
    CodewordEntry::new(10, 0x2a, false, false),
    CodewordEntry::new(11, 0x0b, false, false),
    CodewordEntry::new(12, 0x2c, false, false),
    CodewordEntry::new(13, 0x0d, false, false),
    CodewordEntry::new(14, 0x0e, false, false),
    CodewordEntry::new(15, 0x05, true, true),
    CodewordEntry::new(16, 0x09, true, true),
    CodewordEntry::new(17, 0x31, false, false),
    CodewordEntry::new(18, 0x32, false, false),
    CodewordEntry::new(19, 0x13, false, false),
    CodewordEntry::new(20, 0x34, false, false),
    CodewordEntry::new(21, 0x15, false, false),
    CodewordEntry::new(22, 0x16, false, false),
    CodewordEntry::new(23, 0x28, true, true),
    CodewordEntry::new(24, 0x0c, true, true),
    CodewordEntry::new(25, 0x19, false, false),
    CodewordEntry::new(26, 0x1a, false, false),
    CodewordEntry::new(27, 0x24, true, true),
    CodewordEntry::new(28, 0x1c, false, false),
    CodewordEntry::new(29, 0x22, true, true),
    CodewordEntry::new(30, 0x21, true, true),
    CodewordEntry::new(31, 0x0a, true, true),
];

const THREE_FOUR_ENTRIES: [CodewordEntry; 8] = [
    CodewordEntry::new(0, 0x2, true, true),
    CodewordEntry::new(1, 0x9, false, false),
    CodewordEntry::new(2, 0xa, false, false),
    // Same as D.07, balanced with two forms.
    CodewordEntry::new(3, 0xc, false, true),
    CodewordEntry::new(4, 0x4, true, true),
    CodewordEntry::new(5, 0x5, false, false),
    CodewordEntry::new(6, 0x6, false, false),
    CodewordEntry::new(7, 0x8, true, true),
];

static FIVE_SIX_DECODE: [u8; 64] = build_decode_table(&FIVE_SIX_ENTRIES);
static THREE_FOUR_DECODE: [u8; 16] = build_decode_table(&THREE_FOUR_ENTRIES);

/// The 5b/6b table, covering bits `EDCBA` of a byte.
pub static FIVE_SIX: SymbolTable = SymbolTable {
    entries: &FIVE_SIX_ENTRIES,
    decode: &FIVE_SIX_DECODE,
    width: 6,
};

/// The 3b/4b table, covering bits `HGF` of a byte.
pub static THREE_FOUR: SymbolTable = SymbolTable {
    entries: &THREE_FOUR_ENTRIES,
    decode: &THREE_FOUR_DECODE,
    width: 4,
};
