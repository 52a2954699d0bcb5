//! Authentication methods and the forward encryption pipeline
//!
//! An [`Authenticator`] combines a credential, a key-derivation method and
//! an optional salt, and produces the encrypted "info" string the IPTV
//! backend validates. The backend derives the identical key on its side,
//! so key derivation lives here in one place and is shared with the
//! reverse pipeline.

use serde::{Deserialize, Serialize};

use crate::credential::Credential;
use crate::crypto::{self, Encoding};
use crate::error::{EpgError, Result};

/// The closed set of key-derivation methods understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthMethod {
    /// The password itself, padded to a valid key length
    #[default]
    Plain,
    /// The MD5 digest of the password, truncated to a 3DES key
    Md5,
    /// The MD5 digest of password + salt, truncated to a DES key
    SaltedMd5,
}

/// Derive the cipher key for `method` from the account password.
///
/// Shared by the forward and reverse pipelines: both sides must derive
/// byte-identical keys for the scheme to round-trip.
///
/// # Errors
///
/// [`EpgError::MissingSalt`] if `method` is [`AuthMethod::SaltedMd5`] and
/// no salt is given.
pub fn derive_key(password: &str, method: AuthMethod, salt: Option<&str>) -> Result<String> {
    match method {
        AuthMethod::Plain => Ok(crypto::pad_key(password)),
        AuthMethod::Md5 => Ok(crypto::md5_key(password)),
        AuthMethod::SaltedMd5 => {
            let salt = salt.ok_or(EpgError::MissingSalt)?;
            Ok(crypto::salted_md5_key(password, salt))
        }
    }
}

/// Produces the encrypted "info" string for one credential.
///
/// Constructed per encryption operation; holds nothing but the borrowed
/// credential, the method tag and the optional salt. The info string is a
/// pure function of those three and is recomputed on every call.
#[derive(Debug)]
pub struct Authenticator<'a> {
    credential: &'a Credential,
    method: AuthMethod,
    salt: Option<String>,
}

impl<'a> Authenticator<'a> {
    /// Create an authenticator.
    ///
    /// # Errors
    ///
    /// [`EpgError::MissingSalt`] if `method` is [`AuthMethod::SaltedMd5`]
    /// and `salt` is `None`.
    pub fn new(
        credential: &'a Credential,
        method: AuthMethod,
        salt: Option<&str>,
    ) -> Result<Self> {
        if method == AuthMethod::SaltedMd5 && salt.is_none() {
            return Err(EpgError::MissingSalt);
        }
        Ok(Self {
            credential,
            method,
            salt: salt.map(str::to_owned),
        })
    }

    /// Key-derivation method of this authenticator
    pub fn method(&self) -> AuthMethod {
        self.method
    }

    /// Salt, present only for [`AuthMethod::SaltedMd5`]
    pub fn salt(&self) -> Option<&str> {
        self.salt.as_deref()
    }

    /// Encrypt the serialized credential into the "info" string.
    ///
    /// The result is the lowercase hex ciphertext the backend expects:
    /// `encrypt(serialize(credential), derive_key(password, method, salt))`.
    pub fn info(&self) -> Result<String> {
        let key = derive_key(self.credential.password(), self.method, self.salt.as_deref())?;
        crypto::encrypt(&self.credential.serialize(), &key, Encoding::Utf8)
    }
}
