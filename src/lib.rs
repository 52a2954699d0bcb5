//! # EPG Authentication Core
//!
//! A library reproducing the proprietary EPG entitlement authentication
//! scheme of a legacy IPTV backend.
//!
//! ## Features
//!
//! - Validated, immutable credential tuples with a derived integrity hash
//! - The `$`-delimited legacy wire layout, preserved byte for byte
//! - Plain, MD5 and salted-MD5 key derivation
//! - DES/3DES-ECB encryption with PKCS7 padding, hex-encoded transport
//! - Reverse pipeline: decrypt an observed "info" string back into a credential
//! - Parallel exhaustive salt recovery over a bounded decimal salt space
//!
//! ## Example
//!
//! ```
//! use epgcore::{AuthMethod, Authenticator, Credential, reverse};
//!
//! let credential = Credential::new(
//!     "encryptedToken123",
//!     "someusername",
//!     "thisispassword",
//!     "192.168.1.1",
//!     "00:1A:2B:3C:4D:5E",
//!     "product123",
//! )
//! .unwrap();
//!
//! // Forward: produce the "info" string the backend expects.
//! let info = Authenticator::new(&credential, AuthMethod::Md5, None)
//!     .unwrap()
//!     .info()
//!     .unwrap();
//!
//! // Backward: recover the credential from the observed ciphertext.
//! let recovered = reverse("thisispassword", &info, AuthMethod::Md5, None).unwrap();
//! assert_eq!(recovered, credential);
//! ```

pub mod auth;
pub mod credential;
pub mod crypto;
pub mod error;
pub mod generate;
pub mod recover;
pub mod reverse;

// Re-export main types
pub use auth::{AuthMethod, Authenticator, derive_key};
pub use credential::Credential;
pub use crypto::{Encoding, decrypt, encrypt};
pub use error::{EpgError, Result};
pub use recover::{SearchOptions, search_salts};
pub use reverse::reverse;

/// Maximum byte length of the session token field
pub const TOKEN_MAX_LENGTH: usize = 100;

/// Maximum byte length of the user id field
pub const USER_ID_MAX_LENGTH: usize = 40;

/// Maximum byte length of the password field
pub const PASSWORD_MAX_LENGTH: usize = 24;

/// Maximum byte length of the IP address field
pub const IP_MAX_LENGTH: usize = 39;

/// Maximum byte length of the MAC address field
pub const MAC_MAX_LENGTH: usize = 17;

/// Maximum byte length of the product id field
pub const PRODUCT_ID_MAX_LENGTH: usize = 50;

/// Carrier code used when none is supplied
pub const DEFAULT_CARRIER_CODE: &str = "CTC";

/// Field delimiter of the serialized credential layout
pub const FIELD_DELIMITER: char = '$';
