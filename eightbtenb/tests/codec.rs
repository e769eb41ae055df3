//! End-to-end tests of the encoder and decoder.

use eightbtenb::tables::{FIVE_SIX, THREE_FOUR};
use eightbtenb::{
    DecodeError, DecodeSettings, Disparity, Encoder, decode, decode_symbol, decode_with, encode,
    encode_symbol,
};

const DISPARITIES: [Disparity; 2] = [Disparity::Negative, Disparity::Positive];

/// The difference between the number of ones and zeros in `bits`.
fn balance(bits: u16, width: u8) -> i32 {
    2 * bits.count_ones() as i32 - width as i32
}

#[test]
fn round_trip_every_byte() {
    for rd in DISPARITIES {
        for byte in 0..=255_u8 {
            let mut encoder = Encoder::with_disparity(rd);
            encoder.encode(&[byte]);
            let encoded = encoder.finish();

            assert_eq!(encoded.bits, 10);

            let decoded = decode(&encoded.data, 10).unwrap();
            assert_eq!(decoded.consumed, 10, "{byte:#04x} {rd:?}");
            assert_eq!(decoded.data, [byte], "{byte:#04x} {rd:?}");
        }
    }
}

#[test]
fn round_trip_every_pair() {
    let data: Vec<u8> = (0..=255_u8)
        .flat_map(|a| (0..=255_u8).flat_map(move |b| [a, b]))
        .collect();

    for rd in DISPARITIES {
        let mut encoder = Encoder::with_disparity(rd);
        encoder.encode(&data);
        let encoded = encoder.finish();

        assert_eq!(encoded.bits, data.len() * 10);

        let decoded = decode_with(
            &encoded.data,
            encoded.bits,
            &DecodeSettings { exact: true },
        )
        .unwrap();
        assert_eq!(decoded.data, data);
    }
}

#[test]
fn symbols_round_trip() {
    for rd in DISPARITIES {
        for byte in 0..=255_u8 {
            let (symbol, _) = encode_symbol(byte, rd);
            assert!(symbol < 1 << 10);
            assert_eq!(decode_symbol(symbol), Ok(byte));
        }
    }
}

#[test]
fn disparity_stays_bounded() {
    // Walk every byte in a scrambled order through a single stream. After
    // each 6-bit and 4-bit group the running balance of ones and zeros must
    // agree with the running disparity.
    let mut rd = Disparity::Negative;
    let mut running = 0;
    let offset = |rd: Disparity| if rd.is_negative() { 0 } else { -2 };

    for i in 0..4096_u32 {
        let byte = (i.wrapping_mul(167) ^ (i >> 3)) as u8;

        let (low, next) = FIVE_SIX.encode(byte & 0x1f, rd);
        running += balance(low as u16, 6);
        rd = next;
        assert_eq!(running, offset(rd), "after 6b group of {byte:#04x}");

        let (high, next) = THREE_FOUR.encode(byte >> 5, rd);
        running += balance(high as u16, 4);
        rd = next;
        assert_eq!(running, offset(rd), "after 4b group of {byte:#04x}");

        // A whole symbol never leaves the balance more than two bits off.
        assert!(running.abs() <= 2);
    }
}

#[test]
fn symbol_disparity_matches_groups() {
    for rd in DISPARITIES {
        for byte in 0..=255_u8 {
            let (symbol, after) = encode_symbol(byte, rd);
            let (_, mid) = FIVE_SIX.encode(byte & 0x1f, rd);
            let (_, expected) = THREE_FOUR.encode(byte >> 5, mid);

            assert_eq!(after, expected);
            assert!(balance(symbol, 10).abs() <= 2);
        }
    }
}

#[test]
fn run_length_is_bounded() {
    let data: Vec<u8> = (0..=255_u8).chain((0..=255_u8).rev()).collect();
    let encoded = encode(&data);

    let mut longest = 0;
    let mut run = 0;
    let mut last = None;

    for i in 0..data.len() * 10 {
        let bit = (encoded[i / 8] >> (i % 8)) & 1;

        if Some(bit) == last {
            run += 1;
        } else {
            run = 1;
            last = Some(bit);
        }

        longest = longest.max(run);
    }

    assert!(longest <= 5, "run of {longest} identical bits");
}

#[test]
fn truncated_input() {
    let data = encode(&[1, 2, 3]);

    for extra in 1..16 {
        let requested = data.len() * 8 + extra;
        assert_eq!(
            decode(&data, requested),
            Err(DecodeError::Truncated {
                requested,
                available: data.len() * 8,
            })
        );
    }
}

#[test]
fn garbage_is_rejected() {
    assert_eq!(
        decode(&[0x00, 0x00], 10),
        Err(DecodeError::CodeViolation { offset: 0 })
    );
    assert_eq!(
        decode(&[0xff, 0xff], 10),
        Err(DecodeError::CodeViolation { offset: 0 })
    );
}

#[test]
fn leftover_bits_are_not_an_error() {
    let data: Vec<u8> = (0..64).collect();
    let encoded = encode(&data);

    for size in 0..=data.len() * 10 {
        let decoded = decode(&encoded, size).unwrap();
        let symbols = size / 10;

        assert_eq!(decoded.consumed, symbols * 10);
        assert_eq!(decoded.data, data[..symbols]);

        let exact = decode_with(&encoded, size, &DecodeSettings { exact: true });
        if size % 10 == 0 {
            assert!(exact.is_ok());
        } else {
            assert_eq!(
                exact,
                Err(DecodeError::UnusedBytes {
                    consumed: symbols * 10,
                    requested: size,
                })
            );
        }
    }
}

#[test]
fn independent_streams() {
    // Interleaving two encoders must not change either stream.
    let a: Vec<u8> = (0..100).collect();
    let b: Vec<u8> = (100..200).rev().collect();

    let mut first = Encoder::new();
    let mut second = Encoder::with_disparity(Disparity::Positive);

    for (x, y) in a.chunks(3).zip(b.chunks(3)) {
        first.encode(x);
        second.encode(y);
    }

    assert_eq!(first.finish().data, encode(&a));

    let mut alone = Encoder::with_disparity(Disparity::Positive);
    alone.encode(&b);
    assert_eq!(second.finish(), alone.finish());
}
