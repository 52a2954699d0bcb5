//! Cryptographic operations for the EPG authentication scheme
//!
//! This module implements DES/3DES-ECB encryption with PKCS7 padding and
//! the textual key derivation of the legacy EPG backend, exactly matching
//! the deployed scheme for wire compatibility.

mod cipher;
mod key;
mod md5;

pub use cipher::{Encoding, decrypt, encrypt};
pub use key::{md5_key, pad_key, salted_md5_key};
pub use md5::md5_hex;

#[cfg(test)]
mod tests;
