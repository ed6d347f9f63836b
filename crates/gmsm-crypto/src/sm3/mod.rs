//! SM3 cryptographic hash algorithm.
//!
//! SM3 is a 256-bit cryptographic hash function standardized by the Chinese
//! government (GB/T 32905-2016). It is structurally similar to SHA-256 and
//! is widely used in Chinese commercial cryptography alongside SM2 and SM4.
//!
//! The engine is a pure one-shot function over complete in-memory buffers;
//! there is no streaming context.

use gmsm_types::CryptoError;

/// SM3 output size in bytes.
pub const SM3_OUTPUT_SIZE: usize = 32;

/// SM3 block size in bytes.
pub const SM3_BLOCK_SIZE: usize = 64;

/// Initial hash value (GB/T 32905-2016, section 4.1).
const IV: [u32; 8] = [
    0x7380166F, 0x4914B2B9, 0x172442D7, 0xDA8A0600, 0xA96F30BC, 0x163138AA, 0xE38DEE4D, 0xB0FB0E4E,
];

// Round constants: T_j for j < 16 and j >= 16.
const T0: u32 = 0x79CC4519;
const T1: u32 = 0x7A879D8A;

fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

fn ff(x: u32, y: u32, z: u32, j: usize) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

fn gg(x: u32, y: u32, z: u32, j: usize) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

/// Expand a 64-byte block into the 68-word and 64-word message schedules.
fn expand(block: &[u8]) -> ([u32; 68], [u32; 64]) {
    let mut w = [0u32; 68];
    for (j, chunk) in block.chunks_exact(4).enumerate() {
        w[j] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }

    let mut w_prime = [0u32; 64];
    for j in 0..64 {
        w_prime[j] = w[j] ^ w[j + 4];
    }
    (w, w_prime)
}

/// Compression function: fold one 64-byte block into the state.
fn compress(v: &mut [u32; 8], block: &[u8]) {
    let (w, w_prime) = expand(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *v;

    for j in 0..64 {
        let t = if j < 16 { T0 } else { T1 };
        let t_j = t.rotate_left((j % 32) as u32);
        let ss1 = a
            .rotate_left(12)
            .wrapping_add(e)
            .wrapping_add(t_j)
            .rotate_left(7);
        let ss2 = ss1 ^ a.rotate_left(12);
        let tt1 = ff(a, b, c, j)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(w_prime[j]);
        let tt2 = gg(e, f, g, j)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(w[j]);

        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    v[0] ^= a;
    v[1] ^= b;
    v[2] ^= c;
    v[3] ^= d;
    v[4] ^= e;
    v[5] ^= f;
    v[6] ^= g;
    v[7] ^= h;
}

/// Pad the message per GB/T 32905: a single `1` bit, zero fill, then the
/// original bit length as a 64-bit big-endian integer.
fn pad(data: &[u8], bit_len: u64) -> Vec<u8> {
    let mut padded = data.to_vec();
    padded.push(0x80);
    while (padded.len() * 8 + 64) % 512 != 0 {
        padded.push(0x00);
    }
    padded.extend_from_slice(&bit_len.to_be_bytes());
    padded
}

/// One-shot: compute the SM3 digest of `data`.
///
/// Returns [`CryptoError::InputOverflow`] if the message bit length does not
/// fit the 64-bit length field of the padding (unreachable on hosts where
/// such a buffer cannot be allocated, but the contract is explicit).
pub fn digest(data: &[u8]) -> Result<[u8; SM3_OUTPUT_SIZE], CryptoError> {
    let bit_len = u64::try_from(data.len())
        .ok()
        .and_then(|n| n.checked_mul(8))
        .ok_or(CryptoError::InputOverflow)?;

    let mut v = IV;
    for block in pad(data, bit_len).chunks_exact(SM3_BLOCK_SIZE) {
        compress(&mut v, block);
    }

    let mut out = [0u8; SM3_OUTPUT_SIZE];
    for (chunk, word) in out.chunks_exact_mut(4).zip(v.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    Ok(out)
}
