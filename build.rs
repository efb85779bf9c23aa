// Build script that generates the field modulus tables from field_params.json.
// Build scripts do not ship in the library, so we allow expect() and panic().
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
//
// Consumes `field_params.json` and generates `modulus_generated.rs` with the
// modulus as decimal/hex strings and as big/little-endian byte and bit tables.

use serde::Deserialize;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct Params {
    version: String,
    field: FieldParams,
}

#[derive(Debug, Deserialize)]
struct FieldParams {
    name: String,
    modulus: String,
    modulus_hex: String,
}

fn main() {
    println!("cargo:rerun-if-changed=field_params.json");
    println!("cargo:rerun-if-changed=build.rs");

    let content =
        fs::read_to_string("field_params.json").expect("field_params.json must be readable");
    let params: Params =
        serde_json::from_str(&content).expect("field_params.json must be valid JSON");

    if params.version != "1" {
        panic!(
            "unsupported field_params.json version '{}', expected '1'",
            params.version
        );
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    generate_modulus_rs(Path::new(&out_dir), &params.field);
}

/// Decode the big-endian modulus hex into exactly 32 bytes.
fn modulus_be_bytes(field: &FieldParams) -> [u8; 32] {
    let hex_str = field.modulus_hex.trim_start_matches("0x");
    let padded = format!("{:0>64}", hex_str);
    let bytes = hex::decode(&padded).expect("modulus_hex must be valid hex");
    if bytes.len() != 32 {
        panic!("modulus_hex must fit in 32 bytes, got {}", bytes.len());
    }
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&bytes);
    arr
}

/// Bits of the big-endian byte string, most significant first, leading zeros dropped.
fn be_bits(bytes: &[u8; 32]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(256);
    for byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    let first_one = bits.iter().position(|b| *b == 1).unwrap_or(bits.len());
    bits.split_off(first_one)
}

fn byte_table(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(|b| format!("0x{:02x}", b)).collect();
    items.join(", ")
}

fn bit_table(bits: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in bits.chunks(32).enumerate() {
        if i > 0 {
            out.push_str("\n    ");
        }
        let items: Vec<String> = chunk.iter().map(|b| b.to_string()).collect();
        out.push_str(&items.join(", "));
        out.push(',');
    }
    out
}

fn generate_modulus_rs(out_path: &Path, field: &FieldParams) {
    let be_bytes = modulus_be_bytes(field);
    let mut le_bytes = be_bytes;
    le_bytes.reverse();

    let be = be_bits(&be_bytes);
    let mut le = be.clone();
    le.reverse();

    let bit_size = be.len();
    let byte_size = bit_size.div_ceil(8);

    let mut code = String::new();
    write!(
        code,
        r#"// Field modulus tables generated from field_params.json.
//
// DO NOT EDIT - This file is generated by build.rs

/// Name of the scalar field.
pub const FIELD_NAME: &str = "{name}";

/// Field modulus as a decimal string.
pub const MODULUS_DECIMAL: &str = "{decimal}";

/// Field modulus as lowercase big-endian hex (no prefix).
pub const MODULUS_HEX: &str = "{hex}";

/// Number of bits in the field modulus.
pub const MODULUS_BIT_SIZE: usize = {bit_size};

/// Number of bytes needed to hold the field modulus.
pub const MODULUS_BYTE_SIZE: usize = {byte_size};

/// Field modulus bytes, most significant first.
pub const MODULUS_BE_BYTES: [u8; {byte_size}] = [{be_bytes}];

/// Field modulus bytes, least significant first.
pub const MODULUS_LE_BYTES: [u8; {byte_size}] = [{le_bytes}];

/// Field modulus bits, most significant first.
pub const MODULUS_BE_BITS: [u8; {bit_size}] = [
    {be_bits}
];

/// Field modulus bits, least significant first.
pub const MODULUS_LE_BITS: [u8; {bit_size}] = [
    {le_bits}
];
"#,
        name = field.name,
        decimal = field.modulus,
        hex = field.modulus_hex.trim_start_matches("0x").to_lowercase(),
        bit_size = bit_size,
        byte_size = byte_size,
        be_bytes = byte_table(&be_bytes[32 - byte_size..]),
        le_bytes = byte_table(&le_bytes[..byte_size]),
        be_bits = bit_table(&be),
        le_bits = bit_table(&le),
    )
    .expect("writing to a String cannot fail");

    fs::write(out_path.join("modulus_generated.rs"), code)
        .expect("Failed to write modulus_generated.rs");
}
