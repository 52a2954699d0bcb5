//! Random credential and test-vector generation
//!
//! Produces credentials with fields drawn from the wire-legal alphabet
//! (printable ASCII without whitespace or the `$` delimiter) and complete
//! authentication records for exercising the forward and reverse
//! pipelines. Records serialize to JSON so vector sets can be stored and
//! replayed against other implementations of the scheme.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::auth::{AuthMethod, Authenticator};
use crate::credential::Credential;
use crate::error::Result;
use crate::{PRODUCT_ID_MAX_LENGTH, TOKEN_MAX_LENGTH, USER_ID_MAX_LENGTH};

/// Printable ASCII without whitespace and without the '$' wire delimiter
const FIELD_CHARS: &str = "!\"#%&'()*+,-./0123456789:;<=>?@\
    ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~";

fn random_string(len: usize) -> String {
    let mut rng = rand::rng();
    let chars: Vec<char> = FIELD_CHARS.chars().collect();
    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

/// Random session token, 1 to 100 characters
pub fn random_token() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(1..=TOKEN_MAX_LENGTH);
    random_string(len)
}

/// Random user id, 1 to 40 characters
pub fn random_user_id() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(1..=USER_ID_MAX_LENGTH);
    random_string(len)
}

/// Random password, 4 to 24 characters
pub fn random_password() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(4..=24);
    random_string(len)
}

/// Random dotted-quad IPv4 address
pub fn random_ip() -> String {
    let mut rng = rand::rng();
    format!(
        "{}.{}.{}.{}",
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8),
        rng.random_range(0..=255u8),
    )
}

/// Random colon-separated MAC address
pub fn random_mac() -> String {
    let mut rng = rand::rng();
    let octets: Vec<String> = (0..6)
        .map(|_| format!("{:02x}", rng.random_range(0..=255u8)))
        .collect();
    octets.join(":")
}

/// Random product id, 1 to 50 characters
pub fn random_product_id() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(1..=PRODUCT_ID_MAX_LENGTH);
    random_string(len)
}

/// Random carrier code, 1 to 10 characters
pub fn random_carrier_code() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(1..=10);
    random_string(len)
}

/// Random 8-digit zero-padded salt
pub fn random_salt() -> String {
    let mut rng = rand::rng();
    format!("{:08}", rng.random_range(0..100_000_000u64))
}

/// Build a fully random, always-valid credential
pub fn random_credential() -> Result<Credential> {
    Credential::with_carrier(
        &random_token(),
        &random_user_id(),
        &random_password(),
        &random_ip(),
        &random_mac(),
        &random_product_id(),
        &random_carrier_code(),
    )
}

/// Plain serde mirror of the credential fields.
///
/// Unlike [`Credential`], a record carries no invariants; converting it
/// back goes through the validating constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub token: String,
    pub user_id: String,
    pub password: String,
    pub ip: String,
    pub mac: String,
    pub product_id: String,
    pub carrier_code: String,
}

impl CredentialRecord {
    /// Snapshot an existing credential
    pub fn from_credential(credential: &Credential) -> Self {
        Self {
            token: credential.token().to_string(),
            user_id: credential.user_id().to_string(),
            password: credential.password().to_string(),
            ip: credential.ip().to_string(),
            mac: credential.mac().to_string(),
            product_id: credential.product_id().to_string(),
            carrier_code: credential.carrier_code().to_string(),
        }
    }

    /// Validate the record back into a credential
    pub fn to_credential(&self) -> Result<Credential> {
        Credential::with_carrier(
            &self.token,
            &self.user_id,
            &self.password,
            &self.ip,
            &self.mac,
            &self.product_id,
            &self.carrier_code,
        )
    }
}

/// One complete authentication vector: inputs plus the expected info string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRecord {
    pub credential: CredentialRecord,
    pub method: AuthMethod,
    pub salt: Option<String>,
    pub info: String,
}

/// Generate a random vector with a random method
pub fn random_auth_record() -> Result<AuthRecord> {
    let mut rng = rand::rng();
    let credential = random_credential()?;
    let method = match rng.random_range(0..3) {
        0 => AuthMethod::Plain,
        1 => AuthMethod::Md5,
        _ => AuthMethod::SaltedMd5,
    };
    let salt = (method == AuthMethod::SaltedMd5).then(random_salt);
    let info = Authenticator::new(&credential, method, salt.as_deref())?.info()?;
    Ok(AuthRecord {
        credential: CredentialRecord::from_credential(&credential),
        method,
        salt,
        info,
    })
}

/// Generate a batch of random vectors
pub fn batch_auth_records(amount: usize) -> Result<Vec<AuthRecord>> {
    (0..amount).map(|_| random_auth_record()).collect()
}
