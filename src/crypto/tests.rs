//! Cross-cutting stress tests for the crypto module

use super::cipher::{Encoding, decrypt, encrypt};
use super::key::{md5_key, pad_key, salted_md5_key};

const TEST_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz\
    0123456789_!@#%^&*()<>,./?";

fn random_string(len: usize) -> String {
    use rand::Rng;
    let mut rng = rand::rng();
    let chars: Vec<char> = TEST_CHARS.chars().collect();
    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

/// Any password shape must pad into a key the cipher layer accepts.
#[test]
fn test_stress_padded_password_keys() {
    use rand::Rng;
    let mut rng = rand::rng();

    for i in 0..100 {
        let password_len: usize = rng.random_range(1..40);
        let data_len: usize = rng.random_range(1..200);

        let key = pad_key(&random_string(password_len));
        let plaintext = random_string(data_len);

        let encrypted = encrypt(&plaintext, &key, Encoding::Utf8)
            .unwrap_or_else(|err| panic!("encryption failed at iteration {i}: {err}"));
        let decrypted = decrypt(&encrypted, &key, Encoding::Utf8)
            .unwrap_or_else(|err| panic!("decryption failed at iteration {i}: {err}"));

        assert_eq!(decrypted, plaintext, "mismatch at iteration {i}");
    }
}

/// MD5-derived keys always select 3DES; salted keys always select DES.
#[test]
fn test_stress_digest_keys() {
    use rand::Rng;
    let mut rng = rand::rng();

    for i in 0..100 {
        let secret = random_string(rng.random_range(1..30));
        let salt = random_string(rng.random_range(1..10));
        let plaintext = random_string(rng.random_range(1..300));

        let tdes_key = md5_key(&secret);
        assert_eq!(tdes_key.len(), 24);
        let des_key = salted_md5_key(&secret, &salt);
        assert_eq!(des_key.len(), 8);

        for key in [tdes_key, des_key] {
            let encrypted = encrypt(&plaintext, &key, Encoding::Utf8)
                .unwrap_or_else(|err| panic!("encryption failed at iteration {i}: {err}"));
            let decrypted = decrypt(&encrypted, &key, Encoding::Utf8)
                .unwrap_or_else(|err| panic!("decryption failed at iteration {i}: {err}"));
            assert_eq!(decrypted, plaintext, "mismatch at iteration {i}");
        }
    }
}

/// Multi-byte plaintext survives the round trip in both encodings.
#[test]
fn test_multibyte_plaintext_both_encodings() {
    let plaintext = "Привет мир! 你好世界! مرحبا بالعالم";
    let key = pad_key("secret");

    for encoding in [Encoding::Utf8, Encoding::Utf16Le] {
        let encrypted = encrypt(plaintext, &key, encoding).unwrap();
        let decrypted = decrypt(&encrypted, &key, encoding).unwrap();
        assert_eq!(decrypted, plaintext);
    }
}

/// The two encodings are not interchangeable on the wire.
#[test]
fn test_encodings_produce_different_ciphertext() {
    let key = pad_key("secret");
    let utf8 = encrypt("plain ascii", &key, Encoding::Utf8).unwrap();
    let utf16 = encrypt("plain ascii", &key, Encoding::Utf16Le).unwrap();
    assert_ne!(utf8, utf16);
}

/// Large plaintext, the serialized-credential worst case and beyond.
#[test]
fn test_long_plaintext_roundtrip() {
    let key = md5_key("stress");
    let plaintext = random_string(60_000);

    let encrypted = encrypt(&plaintext, &key, Encoding::Utf8).unwrap();
    let decrypted = decrypt(&encrypted, &key, Encoding::Utf8).unwrap();
    assert_eq!(decrypted, plaintext);
}
