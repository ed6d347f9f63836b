#![forbid(unsafe_code)]
#![doc = "Common types and error codes for the gmsm algorithm library."]

pub mod error;

pub use error::*;
