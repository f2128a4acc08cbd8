// src/core/crypto/encrypt.rs
#[allow(deprecated)] // upstream generic-array 0.x deprecation
use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    XChaCha20Poly1305, XNonce,
};
use rand::RngCore;

use super::token::{encode_header, Token};
use crate::consts::NONCE_LEN;
use crate::core::key::SecretKey;
use crate::enums::{EncryptionAlgorithm, InputKind};
use crate::error::{CoreError, Result};

/// Seal `plaintext` into a token stamped with `issued_at`
pub(crate) fn seal(plaintext: &str, key: &SecretKey, issued_at: u64) -> Result<Token> {
    if plaintext.is_empty() {
        return Err(CoreError::EmptyInput(InputKind::Plaintext));
    }
    seal_bytes(plaintext.as_bytes(), key, issued_at)
}

/// Seal arbitrary bytes; callers enforce the non-empty rule
#[allow(deprecated)]
pub(crate) fn seal_bytes(plaintext: &[u8], key: &SecretKey, issued_at: u64) -> Result<Token> {
    let mut nonce = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce);

    let algorithm = EncryptionAlgorithm::XChaCha20Poly1305;
    let header = encode_header(algorithm, issued_at, &nonce);

    let cipher = XChaCha20Poly1305::new(key.expose().into());
    let sealed = cipher
        .encrypt(
            XNonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: &header,
            },
        )
        .map_err(|_| CoreError::Encryption)?;

    Ok(Token::new(algorithm, issued_at, nonce, sealed))
}
