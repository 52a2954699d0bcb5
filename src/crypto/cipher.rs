//! DES and 3DES-ECB encryption and decryption
//!
//! This module implements the exact cipher layer of the legacy EPG
//! backend:
//! - DES or 3DES selected by key byte length (8 or 24)
//! - ECB mode with PKCS7 block padding
//! - ciphertext carried as lowercase hex
//!
//! **IMPORTANT**: single DES and ECB mode are cryptographically weak but
//! are required for compatibility with the deployed backend.

use block_padding::Pkcs7;
use des::cipher::generic_array::GenericArray;
use des::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use des::{Des, TdesEde3};
use ecb::{Decryptor, Encryptor};

use crate::error::{EpgError, Result};

/// Cipher block size shared by DES and 3DES (8 bytes = 64 bits)
pub const BLOCK_SIZE: usize = 8;

/// Key byte length selecting single DES
pub const DES_KEY_LENGTH: usize = 8;

/// Key byte length selecting 3DES (EDE3)
pub const TDES_KEY_LENGTH: usize = 24;

type DesEcbEnc = Encryptor<Des>;
type DesEcbDec = Decryptor<Des>;
type TdesEcbEnc = Encryptor<TdesEde3>;
type TdesEcbDec = Decryptor<TdesEde3>;

/// Text encodings understood by the cipher layer.
///
/// The plaintext side of the scheme is textual; the backend encodes it to
/// bytes before encryption and decodes after decryption. UTF-8 is the wire
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, the default of the deployed protocol
    #[default]
    Utf8,
    /// UTF-16 little endian, without a byte order mark
    Utf16Le,
}

impl Encoding {
    /// Human-readable encoding name, used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
        }
    }

    /// Encode a string to bytes
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        }
    }

    /// Decode bytes back into a string
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|_| EpgError::Decode(self.name()))
            }
            Encoding::Utf16Le => {
                if bytes.len() % 2 != 0 {
                    return Err(EpgError::Decode(self.name()));
                }
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16(&units).map_err(|_| EpgError::Decode(self.name()))
            }
        }
    }
}

/// Encrypt plaintext with DES or 3DES in ECB mode.
///
/// The plaintext is encoded with `encoding`, padded to the 8-byte block
/// size with PKCS7 and encrypted with the cipher selected by the key's
/// byte length. Returns the ciphertext as a lowercase hex string.
///
/// # Errors
///
/// [`EpgError::KeyLength`] if the key is not 8 or 24 bytes.
pub fn encrypt(plaintext: &str, key: &str, encoding: Encoding) -> Result<String> {
    let data = encoding.encode(plaintext);

    // PKCS7 always appends, so leave room for one extra block
    let padded_len = ((data.len() / BLOCK_SIZE) + 1) * BLOCK_SIZE;
    let mut buffer = vec![0u8; padded_len];
    buffer[..data.len()].copy_from_slice(&data);

    let encrypted = match key.len() {
        DES_KEY_LENGTH => DesEcbEnc::new(GenericArray::from_slice(key.as_bytes()))
            .encrypt_padded_mut::<Pkcs7>(&mut buffer, data.len())
            .map_err(|err| EpgError::Encrypt(format!("{err:?}")))?,
        TDES_KEY_LENGTH => TdesEcbEnc::new(GenericArray::from_slice(key.as_bytes()))
            .encrypt_padded_mut::<Pkcs7>(&mut buffer, data.len())
            .map_err(|err| EpgError::Encrypt(format!("{err:?}")))?,
        other => return Err(EpgError::KeyLength(other)),
    };

    Ok(hex::encode(encrypted))
}

/// Decrypt a hex ciphertext with DES or 3DES in ECB mode.
///
/// The inverse of [`encrypt`]: hex-decode, decrypt with the cipher
/// selected by the key's byte length, strip the PKCS7 padding and decode
/// the resulting bytes with `encoding`.
///
/// # Errors
///
/// - [`EpgError::Hex`] if the ciphertext is not valid hex
/// - [`EpgError::KeyLength`] if the key is not 8 or 24 bytes
/// - [`EpgError::Padding`] if the padding check fails - the first signal
///   of a wrong key, method, salt or password
/// - [`EpgError::Decode`] if the decrypted bytes do not form valid text
pub fn decrypt(ciphertext: &str, key: &str, encoding: Encoding) -> Result<String> {
    let mut buffer = hex::decode(ciphertext)?;
    if buffer.is_empty() {
        return Err(EpgError::Padding);
    }

    let decrypted = match key.len() {
        DES_KEY_LENGTH => DesEcbDec::new(GenericArray::from_slice(key.as_bytes()))
            .decrypt_padded_mut::<Pkcs7>(&mut buffer)
            .map_err(|_| EpgError::Padding)?,
        TDES_KEY_LENGTH => TdesEcbDec::new(GenericArray::from_slice(key.as_bytes()))
            .decrypt_padded_mut::<Pkcs7>(&mut buffer)
            .map_err(|_| EpgError::Padding)?,
        other => return Err(EpgError::KeyLength(other)),
    };

    encoding.decode(decrypted)
}
