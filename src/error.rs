//! Error types for the EPG authentication core

use thiserror::Error;

/// Main error type for EPG authentication operations
#[derive(Error, Debug)]
pub enum EpgError {
    /// A required credential field is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A credential field exceeds its wire-format limit
    #[error("Field {field} exceeds maximum length of {max}")]
    FieldTooLong {
        /// Name of the offending field
        field: &'static str,
        /// Maximum allowed byte length
        max: usize,
    },

    /// A field value contains the '$' wire delimiter
    #[error("Illegal character '$' in field {0}")]
    IllegalDelimiter(&'static str),

    /// Salted MD5 key derivation was requested without a salt
    #[error("Missing salt for salted MD5 authentication")]
    MissingSalt,

    /// Derived key is not 8 bytes (DES) or 24 bytes (3DES)
    #[error("Key must be either 8 or 24 bytes for DES or 3DES encryption, got {0}")]
    KeyLength(usize),

    /// Serialized credential has the wrong number of '$' delimiters
    #[error("Expected 7 '$' delimiters in serialized credential, found {0}")]
    Delimiters(usize),

    /// Block padding check failed after decryption - the usual sign of a
    /// wrong key, method, salt or password
    #[error("Invalid block padding, wrong key material or corrupted ciphertext")]
    Padding,

    /// Recomputed token hash does not match the serialized one
    #[error("Token hash mismatch, the token may be forged or the key material is wrong")]
    HashMismatch,

    /// Ciphertext is not valid hexadecimal
    #[error("Ciphertext is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Decrypted bytes cannot be decoded with the selected text encoding
    #[error("Decrypted data is not valid {0}")]
    Decode(&'static str),

    /// Cipher layer failed to apply block padding
    #[error("Encryption error: {0}")]
    Encrypt(String),

    /// Requested salt space does not fit the 64-bit candidate counter
    #[error("Salt space of {0} decimal digits exceeds the searchable maximum of 19")]
    SaltDigits(u32),
}

/// Result type alias for EPG operations
pub type Result<T> = std::result::Result<T, EpgError>;
