//! SM4-ECB encryption/decryption command.
//!
//! The input length must already be a positive multiple of 16 bytes; the
//! cipher applies no padding.

use std::fs;

use gmsm_crypto::modes::ecb::{ecb_decrypt, ecb_encrypt};
use gmsm_crypto::sm4::Sm4Key;

use crate::hex;

pub fn run(
    key_hex: &str,
    decrypt: bool,
    input: &str,
    output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let op = if decrypt { "Decrypting" } else { "Encrypting" };
    eprintln!("{op} {input} -> {output} with sm4-ecb");

    let key = Sm4Key::new(&hex::decode(key_hex)?)?;
    let data = fs::read(input)?;

    let result = if decrypt {
        ecb_decrypt(&key, &data)?
    } else {
        ecb_encrypt(&key, &data)?
    };

    fs::write(output, result)?;
    Ok(())
}
