/// Cryptographic operation errors.
///
/// Both engines validate their input at the boundary, before any transform
/// work begins; no partial results are ever produced.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// Key material has the wrong length for the algorithm.
    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    /// Buffer length is not a positive multiple of the cipher block size.
    #[error("invalid input length: expected a positive multiple of {block}, got {got}")]
    InvalidInputLength { block: usize, got: usize },

    /// Message bit length does not fit the 64-bit padding counter.
    #[error("input data too long")]
    InputOverflow,
}
