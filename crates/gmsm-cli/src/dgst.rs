//! SM3 digest command implementation.

use std::fs;
use std::io::{self, Read};

use crate::hex;

pub fn run(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = if file == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(file)?
    };

    let digest = sm3_hex(&data)?;
    if file == "-" {
        println!("SM3(stdin)= {digest}");
    } else {
        println!("SM3({file})= {digest}");
    }
    Ok(())
}

fn sm3_hex(data: &[u8]) -> Result<String, Box<dyn std::error::Error>> {
    let digest = gmsm_crypto::sm3::digest(data)?;
    Ok(hex::encode(&digest))
}
