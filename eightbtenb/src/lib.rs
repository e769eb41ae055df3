/*!
A table-driven 8b/10b line-code encoder and decoder.

8b/10b maps every byte onto a 10-bit codeword so that a serial line never
carries long runs of identical bits and stays DC-balanced. Each byte is split
into a 5-bit and a 3-bit group, which are substituted through the 5b/6b and
3b/4b tables. Unbalanced codewords come in two complementary forms, and the
running disparity of the stream selects which one is sent.

This crate implements the data symbols only. It detects invalid codewords and
truncated input, but it does not correct errors and it does not search for
symbol boundaries, so the input of [`decode`] must be aligned to a symbol.

Bits are packed least significant bit first: the first bit on the wire is
bit 0 of the first byte.

# Example
```rust
use eightbtenb::{decode, encode};

let encoded = encode(&[0xff, 0x00, 0xaa, 0x55]);
assert_eq!(encoded, [0xca, 0x19, 0xad, 0x56, 0xa5]);

let decoded = decode(&encoded, 40).unwrap();
assert_eq!(decoded.consumed, 40);
assert_eq!(decoded.data, [0xff, 0x00, 0xaa, 0x55]);
```

# Features
- `std` (default): Enables the standard library. Without it the crate is
  `no_std` and only needs `alloc`.
- `logging`: Forward diagnostics to the `log` crate.

# Safety
This crate forbids unsafe code via a crate-level attribute.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

#[macro_use]
mod log;

mod bit_reader;
mod bit_writer;
mod decode;
mod disparity;
mod encode;
mod error;
pub mod tables;

pub use decode::{DecodeSettings, Decoded, decode, decode_into, decode_symbol, decode_with};
pub use disparity::Disparity;
pub use encode::{Encoded, Encoder, SYMBOL_BITS, encode, encode_symbol};
pub use error::{DecodeError, Result};
