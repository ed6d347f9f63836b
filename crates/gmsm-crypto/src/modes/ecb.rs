//! ECB (Electronic Codebook) mode of operation.
//!
//! **Security warning**: ECB mode does not provide semantic security —
//! identical plaintext blocks produce identical ciphertext blocks. It is
//! provided for completeness and specific low-level use cases only.

use crate::sm4::{Sm4Key, SM4_BLOCK_SIZE};
use gmsm_types::CryptoError;

fn check_len(len: usize) -> Result<(), CryptoError> {
    if len == 0 || len % SM4_BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidInputLength {
            block: SM4_BLOCK_SIZE,
            got: len,
        });
    }
    Ok(())
}

/// Encrypt data using ECB mode with SM4.
/// Input must be a positive multiple of 16 bytes (no padding).
pub fn ecb_encrypt(key: &Sm4Key, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_len(plaintext.len())?;
    let mut output = plaintext.to_vec();
    for chunk in output.chunks_mut(SM4_BLOCK_SIZE) {
        key.encrypt_block(chunk)?;
    }
    Ok(output)
}

/// Decrypt data using ECB mode with SM4.
/// Input must be a positive multiple of 16 bytes.
pub fn ecb_decrypt(key: &Sm4Key, ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_len(ciphertext.len())?;
    let mut output = ciphertext.to_vec();
    for chunk in output.chunks_mut(SM4_BLOCK_SIZE) {
        key.decrypt_block(chunk)?;
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_to_bytes(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    // GB/T 32907-2016 Appendix A vector through the mode layer
    #[test]
    fn test_ecb_standard_vector() {
        let key = Sm4Key::new(&hex_to_bytes("0123456789abcdeffedcba9876543210")).unwrap();
        let pt = hex_to_bytes("0123456789abcdeffedcba9876543210");

        let ct = ecb_encrypt(&key, &pt).unwrap();
        assert_eq!(hex(&ct), "681edf34d206965e86b3e94f536e4246");

        let decrypted = ecb_decrypt(&key, &ct).unwrap();
        assert_eq!(decrypted, pt);
    }

    #[test]
    fn test_ecb_multi_block_roundtrip() {
        let key = Sm4Key::new(&hex_to_bytes("000102030405060708090a0b0c0d0e0f")).unwrap();
        let pt: Vec<u8> = (0u8..64).collect();

        let ct = ecb_encrypt(&key, &pt).unwrap();
        assert_eq!(ct.len(), pt.len());
        let decrypted = ecb_decrypt(&key, &ct).unwrap();
        assert_eq!(decrypted, pt);
    }

    #[test]
    fn test_ecb_identical_blocks_leak() {
        // ECB's documented weakness: equal plaintext blocks encrypt equally.
        let key = Sm4Key::new(&[0x5Au8; 16]).unwrap();
        let pt = [0xC3u8; 32];
        let ct = ecb_encrypt(&key, &pt).unwrap();
        assert_eq!(ct[..16], ct[16..]);
    }

    #[test]
    fn test_ecb_invalid_length() {
        let key = Sm4Key::new(&[0u8; 16]).unwrap();
        assert!(matches!(
            ecb_encrypt(&key, &[0u8; 15]),
            Err(CryptoError::InvalidInputLength { block: 16, got: 15 })
        ));
        assert!(ecb_encrypt(&key, &[0u8; 17]).is_err());
        assert!(ecb_encrypt(&key, &[]).is_err());
        assert!(ecb_decrypt(&key, &[0u8; 31]).is_err());
        assert!(ecb_decrypt(&key, &[]).is_err());
    }
}
