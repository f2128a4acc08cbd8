// tests/core/crypto.rs
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use encrypted_password_vault::consts::{HEADER_LEN, MIN_TOKEN_LEN, TAG_LEN, TOKEN_VERSION};
use encrypted_password_vault::core::{CipherEngine, KeyManager, Token};
use encrypted_password_vault::enums::{EncryptionAlgorithm, InputKind};
use encrypted_password_vault::error::{CoreError, MalformedReason};

use crate::common;

fn raw(token: &str) -> Vec<u8> {
    URL_SAFE_NO_PAD.decode(token).unwrap()
}

fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

#[test]
fn test_encrypt_decrypt_roundtrip() {
    common::setup();
    let engine = CipherEngine::new();
    let keys = KeyManager::initialize();
    let long = "x".repeat(10_000);
    for plaintext in [
        "a",
        "Attack at dawn!",
        "p@$$w0rd\"'`{|}~",
        "pässwörd 🔐 密码",
        long.as_str(),
    ] {
        let token = engine.encrypt(plaintext, keys.key()).unwrap();
        assert_ne!(token, plaintext);
        assert_eq!(engine.decrypt(&token, keys.key()).unwrap(), plaintext);
    }
}

#[test]
fn test_token_is_url_safe_printable() {
    let engine = CipherEngine::new();
    let keys = KeyManager::initialize();
    let token = engine.encrypt("secret", keys.key()).unwrap();
    assert!(token
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'));
    assert_eq!(raw(&token).len(), HEADER_LEN + "secret".len() + TAG_LEN);
}

#[test]
fn test_same_plaintext_yields_distinct_tokens() {
    let engine = CipherEngine::new();
    let keys = KeyManager::initialize();
    let first = engine.encrypt("same", keys.key()).unwrap();
    let second = engine.encrypt("same", keys.key()).unwrap();
    assert_ne!(first, second);
    assert_ne!(
        Token::parse(&first).unwrap().header(),
        Token::parse(&second).unwrap().header()
    );
}

#[test]
fn test_every_single_bit_flip_is_rejected() {
    common::setup();
    let engine = CipherEngine::new();
    let keys = KeyManager::initialize();
    let bytes = raw(&engine.encrypt("secret", keys.key()).unwrap());

    for index in 0..bytes.len() {
        for bit in 0..8 {
            let mut tampered = bytes.clone();
            tampered[index] ^= 1 << bit;
            let result = engine.decrypt(&encode(&tampered), keys.key());
            if index == 0 {
                // The version byte is checked structurally before the cipher runs.
                assert!(
                    matches!(
                        result,
                        Err(CoreError::TokenMalformed(MalformedReason::UnknownVersion(_)))
                    ),
                    "version bit {bit}: {result:?}"
                );
            } else {
                assert!(
                    matches!(result, Err(CoreError::Authentication)),
                    "byte {index} bit {bit}: {result:?}"
                );
            }
        }
    }
}

#[test]
fn test_decrypt_fails_with_wrong_key() {
    let engine = CipherEngine::new();
    let k1 = KeyManager::initialize();
    let k2 = KeyManager::initialize();
    let token = engine.encrypt("secret", k1.key()).unwrap();
    assert!(matches!(
        engine.decrypt(&token, k2.key()),
        Err(CoreError::Authentication)
    ));
}

#[test]
fn test_empty_inputs_are_rejected() {
    let engine = CipherEngine::new();
    let keys = KeyManager::initialize();
    assert!(matches!(
        engine.encrypt("", keys.key()),
        Err(CoreError::EmptyInput(InputKind::Plaintext))
    ));
    assert!(matches!(
        engine.decrypt("", keys.key()),
        Err(CoreError::EmptyInput(InputKind::Token))
    ));
}

#[test]
fn test_malformed_tokens_are_not_authentication_failures() {
    let engine = CipherEngine::new();
    let keys = KeyManager::initialize();

    let cases = [
        ("not-a-valid-token", MalformedReason::Encoding),
        ("****", MalformedReason::Encoding),
        ("c2VjcmV0", MalformedReason::Truncated { len: 6 }),
    ];
    for (input, reason) in cases {
        match engine.decrypt(input, keys.key()) {
            Err(CoreError::TokenMalformed(actual)) => assert_eq!(actual, reason, "{input}"),
            other => panic!("expected TokenMalformed for {input:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_truncation_below_minimum_is_malformed() {
    let engine = CipherEngine::new();
    let keys = KeyManager::initialize();
    let bytes = raw(&engine.encrypt("x", keys.key()).unwrap());
    assert_eq!(bytes.len(), MIN_TOKEN_LEN);

    let short = encode(&bytes[..MIN_TOKEN_LEN - 1]);
    assert!(matches!(
        engine.decrypt(&short, keys.key()),
        Err(CoreError::TokenMalformed(MalformedReason::Truncated { len })) if len == MIN_TOKEN_LEN - 1
    ));

    let longer = raw(&engine.encrypt("xyz", keys.key()).unwrap());
    let chopped = encode(&longer[..longer.len() - 1]);
    assert!(matches!(
        engine.decrypt(&chopped, keys.key()),
        Err(CoreError::Authentication)
    ));
}

#[test]
fn test_unknown_version_is_malformed() {
    let engine = CipherEngine::new();
    let keys = KeyManager::initialize();
    let mut bytes = raw(&engine.encrypt("secret", keys.key()).unwrap());
    assert_eq!(bytes[0], TOKEN_VERSION);
    bytes[0] = 0x80;
    assert!(matches!(
        engine.decrypt(&encode(&bytes), keys.key()),
        Err(CoreError::TokenMalformed(MalformedReason::UnknownVersion(0x80)))
    ));
}

#[test]
fn test_token_parse_exposes_header_only() {
    let engine = CipherEngine::new();
    let keys = KeyManager::initialize();
    let encoded = engine.encrypt("hunter2", keys.key()).unwrap();

    let token = Token::parse(&encoded).unwrap();
    assert_eq!(token.encode(), encoded);
    assert_eq!(token.version(), TOKEN_VERSION);

    let info = token.info();
    assert_eq!(info.algorithm, EncryptionAlgorithm::XChaCha20Poly1305);
    assert_eq!(info.ciphertext_len, "hunter2".len());
    assert_eq!(info.ciphertext_len + TAG_LEN + HEADER_LEN, raw(&encoded).len());
    let issued = info.issued_at.unwrap();
    assert!((chrono::Utc::now() - issued).num_seconds().abs() < 60);
}
