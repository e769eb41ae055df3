#![no_main]

use eightbtenb::{Disparity, Encoder, decode};
use libfuzzer_sys::fuzz_target;

// The first byte selects the initial running disparity and how the input is
// split across encoder calls, the rest is the payload.

fuzz_target!(|data: &[u8]| {
    let Some((&control, payload)) = data.split_first() else {
        return;
    };

    let rd = if control & 1 == 0 {
        Disparity::Negative
    } else {
        Disparity::Positive
    };
    let chunk_len = (control >> 1) as usize + 1;

    let mut encoder = Encoder::with_disparity(rd);
    for chunk in payload.chunks(chunk_len) {
        encoder.encode(chunk);
    }
    let encoded = encoder.finish();

    assert_eq!(encoded.bits, payload.len() * 10);
    assert_eq!(encoded.data.len(), encoded.bits.div_ceil(8));

    let decoded = decode(&encoded.data, encoded.bits).unwrap();
    assert_eq!(decoded.consumed, encoded.bits);
    assert_eq!(decoded.data, payload);
});
