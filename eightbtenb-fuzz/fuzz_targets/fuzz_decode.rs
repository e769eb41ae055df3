#![no_main]

use eightbtenb::{DecodeError, DecodeSettings, decode_with};
use libfuzzer_sys::fuzz_target;

// Header layout (3 bytes):
// [0..2]  requested size in bits (u16 LE)
// [2]     flags: bit 0 exact consumption, bit 1 count the size down from
//         usize::MAX to request far more bits than the body holds
// [3..]   8b/10b encoded data

const HEADER_SIZE: usize = 3;

fuzz_target!(|data: &[u8]| {
    if data.len() < HEADER_SIZE {
        return;
    }

    let size = u16::from_le_bytes([data[0], data[1]]) as usize;
    let size_in_bits = if data[2] & 2 != 0 {
        usize::MAX - size
    } else {
        size
    };
    let settings = DecodeSettings {
        exact: data[2] & 1 != 0,
    };
    let body = &data[HEADER_SIZE..];

    match decode_with(body, size_in_bits, &settings) {
        Ok(decoded) => {
            assert_eq!(decoded.consumed % 10, 0);
            assert_eq!(decoded.consumed, size_in_bits / 10 * 10);
            assert_eq!(decoded.data.len(), decoded.consumed / 10);
        }
        Err(DecodeError::CodeViolation { offset }) => assert!(offset < size_in_bits),
        Err(DecodeError::Truncated { requested, available }) => {
            assert!(requested > available);
        }
        Err(DecodeError::UnusedBytes { consumed, requested }) => {
            assert!(settings.exact && consumed < requested);
        }
    }
});
