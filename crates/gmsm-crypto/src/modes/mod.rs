//! Block cipher modes of operation.
//!
//! Only ECB is provided. Each mode operates on top of the SM4 block cipher
//! through a prebuilt [`Sm4Key`](crate::sm4::Sm4Key) schedule.

pub mod ecb;
