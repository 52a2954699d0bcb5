//! Credential management and wire serialization
//!
//! A [`Credential`] is an immutable tuple of the fields the EPG backend
//! authorizes a session against. Construction validates every field and
//! derives an 8-character integrity hash from the session token; the
//! serialized form is the exact `$`-delimited layout the backend decrypts,
//! including the always-empty seventh field between the MAC and the
//! carrier code. That empty field is a quirk of the deployed protocol and
//! must not be "fixed".

use crate::crypto::md5_hex;
use crate::error::{EpgError, Result};
use crate::{
    DEFAULT_CARRIER_CODE, FIELD_DELIMITER, IP_MAX_LENGTH, MAC_MAX_LENGTH, PASSWORD_MAX_LENGTH,
    PRODUCT_ID_MAX_LENGTH, TOKEN_MAX_LENGTH, USER_ID_MAX_LENGTH,
};

/// Number of `$` delimiters in a serialized credential (8 fields)
const DELIMITER_COUNT: usize = 7;

/// An immutable, validated credential tuple.
///
/// Instances can only be produced by the validating constructors
/// ([`Credential::new`], [`Credential::with_carrier`]) or by
/// [`Credential::deserialize`], which re-runs the same validation. The
/// `hash` field is derived from the token at construction and never
/// supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    user_id: String,
    password: String,
    ip: String,
    mac: String,
    product_id: String,
    carrier_code: String,
    hash: String,
}

impl Credential {
    /// Create a credential with the default `"CTC"` carrier code.
    ///
    /// Fails if any field is empty, exceeds its maximum byte length, or
    /// contains the `$` delimiter.
    pub fn new(
        token: &str,
        user_id: &str,
        password: &str,
        ip: &str,
        mac: &str,
        product_id: &str,
    ) -> Result<Self> {
        Self::with_carrier(token, user_id, password, ip, mac, product_id, DEFAULT_CARRIER_CODE)
    }

    /// Create a credential with an explicit carrier code.
    ///
    /// The carrier code has no length limit and may be empty, but like
    /// every other field it must not contain `$`.
    pub fn with_carrier(
        token: &str,
        user_id: &str,
        password: &str,
        ip: &str,
        mac: &str,
        product_id: &str,
        carrier_code: &str,
    ) -> Result<Self> {
        validate_field("token", token, TOKEN_MAX_LENGTH)?;
        validate_field("user_id", user_id, USER_ID_MAX_LENGTH)?;
        validate_field("password", password, PASSWORD_MAX_LENGTH)?;
        validate_field("ip", ip, IP_MAX_LENGTH)?;
        validate_field("mac", mac, MAC_MAX_LENGTH)?;
        validate_field("product_id", product_id, PRODUCT_ID_MAX_LENGTH)?;
        if carrier_code.contains(FIELD_DELIMITER) {
            return Err(EpgError::IllegalDelimiter("carrier_code"));
        }

        Ok(Self {
            hash: token_hash(token),
            token: token.to_string(),
            user_id: user_id.to_string(),
            password: password.to_string(),
            ip: ip.to_string(),
            mac: mac.to_string(),
            product_id: product_id.to_string(),
            carrier_code: carrier_code.to_string(),
        })
    }

    /// Session token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// User identification string
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Account password; never part of the serialized form
    pub fn password(&self) -> &str {
        &self.password
    }

    /// IP address bound to the session
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// MAC address of the device
    pub fn mac(&self) -> &str {
        &self.mac
    }

    /// Product identifier
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Carrier code, `"CTC"` unless overridden
    pub fn carrier_code(&self) -> &str {
        &self.carrier_code
    }

    /// Integrity hash derived from the token at construction
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Serialize into the `$`-delimited plaintext layout.
    ///
    /// Exactly 8 fields in wire order: hash, token, user_id, product_id,
    /// ip, mac, an always-empty reserved field, carrier code. The password
    /// is deliberately absent.
    pub fn serialize(&self) -> String {
        format!(
            "{hash}${token}${user_id}${product_id}${ip}${mac}$${carrier}",
            hash = self.hash,
            token = self.token,
            user_id = self.user_id,
            product_id = self.product_id,
            ip = self.ip,
            mac = self.mac,
            carrier = self.carrier_code,
        )
    }

    /// Rebuild a credential from the serialized layout.
    ///
    /// The serialized form never carries the password, so the caller
    /// supplies it. The token hash is recomputed from the parsed token and
    /// checked against the serialized one; a mismatch means the token was
    /// forged or the ciphertext was decrypted with the wrong key material.
    pub fn deserialize(password: &str, data: &str) -> Result<Self> {
        let delimiters = data.matches(FIELD_DELIMITER).count();
        if delimiters != DELIMITER_COUNT {
            return Err(EpgError::Delimiters(delimiters));
        }

        let fields: Vec<&str> = data.split(FIELD_DELIMITER).collect();
        let credential = Self::with_carrier(
            fields[1], // token
            fields[2], // user_id
            password,
            fields[4], // ip
            fields[5], // mac
            fields[3], // product_id
            fields[7], // carrier code; fields[6] is the reserved empty field
        )?;
        if credential.hash != fields[0] {
            return Err(EpgError::HashMismatch);
        }
        Ok(credential)
    }
}

/// Check one bounded field: present, within its limit, no delimiter.
fn validate_field(name: &'static str, value: &str, max: usize) -> Result<()> {
    if value.is_empty() {
        return Err(EpgError::MissingField(name));
    }
    if value.len() > max {
        return Err(EpgError::FieldTooLong { field: name, max });
    }
    if value.contains(FIELD_DELIMITER) {
        return Err(EpgError::IllegalDelimiter(name));
    }
    Ok(())
}

/// Derive the 8-character integrity hash of a session token.
///
/// Takes the first 8 characters of the lowercase hex MD5 digest and maps
/// each one: digits pass through, the hex letters `a`-`f` become their
/// alphabet position `1`-`6`.
fn token_hash(token: &str) -> String {
    md5_hex(token)
        .chars()
        .take(8)
        .map(|c| {
            if c.is_ascii_digit() {
                c
            } else {
                char::from(b'0' + (c as u8 - b'a' + 1))
            }
        })
        .collect()
}
