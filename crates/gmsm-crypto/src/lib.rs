#![forbid(unsafe_code)]
#![doc = "SM3 hash and SM4 block cipher implementations for the gmsm workspace."]

// Hash algorithms
#[cfg(feature = "sm3")]
pub mod sm3;

// Symmetric ciphers
#[cfg(feature = "sm4")]
pub mod sm4;

// Modes of operation
#[cfg(feature = "modes")]
pub mod modes;
