//! Textual key derivation for the EPG cipher layer
//!
//! Keys in this scheme are strings, not raw bytes: the backend derives
//! them from the account password by zero-padding or MD5 digests, then
//! feeds the UTF-8 bytes to DES (8-byte keys) or 3DES (24-byte keys).
//! Padding counts characters, exactly like the deployed backend;
//! a password with multi-byte characters can therefore yield a key whose
//! byte length is invalid, which the cipher layer rejects.

use super::md5::md5_hex;

/// Pad or truncate a textual key to a valid DES/3DES length.
///
/// A key of exactly 8 or 24 characters passes through unchanged. Shorter
/// than 8 is right-padded with `'0'` to 8 characters, between 9 and 23 is
/// right-padded to 24, longer than 24 is cut to the first 24 characters.
pub fn pad_key(key: &str) -> String {
    let length = key.chars().count();
    if length == 8 || length == 24 {
        return key.to_string();
    }
    if length < 8 {
        return format!("{key}{}", "0".repeat(8 - length));
    }
    if length < 24 {
        return format!("{key}{}", "0".repeat(24 - length));
    }
    key.chars().take(24).collect()
}

/// Derive a 24-character 3DES key from the MD5 digest of `secret`.
///
/// The 32-character hex digest is always truncated to 24 by [`pad_key`].
pub fn md5_key(secret: &str) -> String {
    pad_key(&md5_hex(secret))
}

/// Derive an 8-character DES key from the MD5 digest of `secret` + `salt`.
///
/// Only the first 8 characters of the digest are kept; [`pad_key`] leaves
/// them unchanged.
pub fn salted_md5_key(secret: &str, salt: &str) -> String {
    pad_key(&md5_hex(&format!("{secret}{salt}"))[..8])
}
