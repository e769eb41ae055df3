//! A small example that encodes or decodes hex strings on the command line.

#![allow(missing_docs)]

use eightbtenb::{decode, encode};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (command, hex) = match args.as_slice() {
        [command, hex, ..] => (command.as_str(), hex.as_str()),
        _ => usage(),
    };

    let data = match parse_hex(hex) {
        Some(d) => d,
        None => {
            eprintln!("Error: invalid hex string {hex}");
            process::exit(1);
        }
    };

    match command {
        "encode" => println!("{}", to_hex(&encode(&data))),
        "decode" => {
            let bits = match args.get(2) {
                Some(bits) => match bits.parse() {
                    Ok(bits) => bits,
                    Err(e) => {
                        eprintln!("Error: invalid bit count {bits}: {e}");
                        process::exit(1);
                    }
                },
                None => data.len() * 8,
            };

            match decode(&data, bits) {
                Ok(decoded) => {
                    println!("{}", to_hex(&decoded.data));
                    eprintln!("consumed {} of {bits} bits", decoded.consumed);
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        _ => usage(),
    }
}

fn usage() -> ! {
    eprintln!("Usage: transcode encode <hex>");
    eprintln!("       transcode decode <hex> [bits]");
    process::exit(1);
}

fn parse_hex(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.trim();

    if !hex.len().is_multiple_of(2) {
        return None;
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok())
        .collect()
}

fn to_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}
