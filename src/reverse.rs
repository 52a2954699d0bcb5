//! Reverse pipeline: recover a credential from an observed "info" string
//!
//! The exact inverse of [`Authenticator::info`](crate::Authenticator::info)
//! when method, salt and password are correct. Each stage fails in a way
//! that identifies what was wrong: a padding error means the derived key
//! did not match, a delimiter error means the plaintext was not a
//! serialized credential, and a hash mismatch means the right key
//! decrypted a tampered or foreign token.

use crate::auth::{AuthMethod, derive_key};
use crate::credential::Credential;
use crate::crypto::{self, Encoding};
use crate::error::Result;

/// Decrypt an observed info string and validate it into a [`Credential`].
///
/// # Errors
///
/// - [`EpgError::MissingSalt`](crate::EpgError::MissingSalt) for
///   [`AuthMethod::SaltedMd5`] without a salt
/// - [`EpgError::Padding`](crate::EpgError::Padding) when the derived key
///   does not match the ciphertext
/// - [`EpgError::Delimiters`](crate::EpgError::Delimiters) /
///   [`EpgError::HashMismatch`](crate::EpgError::HashMismatch) when the
///   decrypted plaintext is not a well-formed, untampered credential
pub fn reverse(
    password: &str,
    ciphertext: &str,
    method: AuthMethod,
    salt: Option<&str>,
) -> Result<Credential> {
    let key = derive_key(password, method, salt)?;
    let plaintext = crypto::decrypt(ciphertext, &key, Encoding::Utf8)?;
    Credential::deserialize(password, &plaintext)
}
