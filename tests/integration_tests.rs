//! Integration tests for epgcore
//!
//! Exercise the full forward and reverse authentication pipelines, the
//! JSON vector format and the parallel salt recovery end to end.

use epgcore::generate::{self, AuthRecord};
use epgcore::{
    AuthMethod, Authenticator, Credential, EpgError, SearchOptions, reverse, search_salts,
};

const TEST_PASSWORD: &str = "thisispassword";

fn sample_credential() -> Credential {
    Credential::new(
        "encryptedToken123",
        "someusername",
        TEST_PASSWORD,
        "192.168.1.1",
        "00:1A:2B:3C:4D:5E",
        "product123",
    )
    .unwrap()
}

#[test]
fn test_wire_layout_is_byte_exact() {
    // md5("abc") = 900150983cd24fb0d6963f7d28e17f72 -> hash "90015098";
    // note the reserved empty field between mac and carrier code.
    let credential =
        Credential::new("abc", "user1", "pass1", "1.2.3.4", "AA:BB", "prod1").unwrap();
    assert_eq!(
        credential.serialize(),
        "90015098$abc$user1$prod1$1.2.3.4$AA:BB$$CTC"
    );
}

#[test]
fn test_forward_then_reverse_all_methods() {
    let credential = sample_credential();
    let cases = [
        (AuthMethod::Plain, None),
        (AuthMethod::Md5, None),
        (AuthMethod::SaltedMd5, Some("00000042")),
    ];
    for (method, salt) in cases {
        let info = Authenticator::new(&credential, method, salt)
            .unwrap()
            .info()
            .unwrap();

        // info is the lowercase hex the backend expects
        assert!(info.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!info.chars().any(|c| c.is_ascii_uppercase()));

        let recovered = reverse(TEST_PASSWORD, &info, method, salt).unwrap();
        assert_eq!(recovered, credential);
    }
}

#[test]
fn test_reverse_rejects_wrong_key_material() {
    let credential = sample_credential();
    let info = Authenticator::new(&credential, AuthMethod::SaltedMd5, Some("12345678"))
        .unwrap()
        .info()
        .unwrap();

    assert!(reverse("wrong-password", &info, AuthMethod::SaltedMd5, Some("12345678")).is_err());
    assert!(reverse(TEST_PASSWORD, &info, AuthMethod::SaltedMd5, Some("87654321")).is_err());
    assert!(reverse(TEST_PASSWORD, &info, AuthMethod::Md5, None).is_err());
    assert!(matches!(
        reverse(TEST_PASSWORD, &info, AuthMethod::SaltedMd5, None),
        Err(EpgError::MissingSalt)
    ));
}

#[test]
fn test_json_vectors_roundtrip_and_replay() {
    let records = generate::batch_auth_records(16).unwrap();
    let json = serde_json::to_string_pretty(&records).unwrap();
    let parsed: Vec<AuthRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), 16);

    for record in parsed {
        let expected = record.credential.to_credential().unwrap();
        let recovered = reverse(
            &record.credential.password,
            &record.info,
            record.method,
            record.salt.as_deref(),
        )
        .unwrap();
        assert_eq!(recovered.serialize(), expected.serialize());
        assert_eq!(recovered, expected);
    }
}

#[test]
fn test_generated_info_matches_recomputation() {
    let record = generate::random_auth_record().unwrap();
    let credential = record.credential.to_credential().unwrap();
    let info = Authenticator::new(&credential, record.method, record.salt.as_deref())
        .unwrap()
        .info()
        .unwrap();
    assert_eq!(info, record.info);
}

#[test]
fn test_salt_search_is_complete_for_any_worker_count() {
    let credential = sample_credential();
    let target = Authenticator::new(&credential, AuthMethod::SaltedMd5, Some("00042"))
        .unwrap()
        .info()
        .unwrap();

    let mut previous: Option<Vec<u64>> = None;
    for workers in [1, 2, 4, 7] {
        let options = SearchOptions {
            max_digits: 5,
            zero_padded: true,
            workers,
        };
        let found = search_salts(&credential, &target, &options).unwrap();
        assert!(found.contains(&42), "salt 42 not found with {workers} workers");

        // the result set does not depend on the partitioning
        if let Some(ref expected) = previous {
            assert_eq!(&found, expected);
        }
        previous = Some(found);
    }
}
