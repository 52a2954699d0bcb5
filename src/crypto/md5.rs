//! MD5 hashing for key derivation and token integrity
//!
//! The EPG scheme uses MD5 both to derive cipher keys from passwords and
//! to compute the integrity hash embedded in the serialized credential.

use md5::{Digest, Md5};

/// Calculate MD5 hash of input string and return as lowercase hex string (32 chars)
///
/// # Example
///
/// ```
/// use epgcore::crypto::md5_hex;
///
/// assert_eq!(md5_hex("hello"), "5d41402abc4b2a76b9719d911017c592");
/// ```
pub fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
