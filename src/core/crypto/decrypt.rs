// src/core/crypto/decrypt.rs
#[allow(deprecated)] // upstream generic-array 0.x deprecation
use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    XChaCha20Poly1305, XNonce,
};
use zeroize::Zeroizing;

use super::token::Token;
use crate::core::key::SecretKey;
use crate::error::{CoreError, MalformedReason, Result};

/// Verify the tag over header and ciphertext, then release the plaintext
///
/// The AEAD checks the tag before decrypting, so a failed check yields no
/// plaintext bytes at all.
#[allow(deprecated)]
pub(crate) fn open(token: &Token, key: &SecretKey) -> Result<String> {
    let header = token.header();
    let cipher = XChaCha20Poly1305::new(key.expose().into());

    let plaintext = Zeroizing::new(
        cipher
            .decrypt(
                XNonce::from_slice(token.nonce()),
                Payload {
                    msg: token.sealed(),
                    aad: &header,
                },
            )
            .map_err(|_| CoreError::Authentication)?,
    );

    std::str::from_utf8(&plaintext)
        .map(str::to_owned)
        .map_err(|_| CoreError::TokenMalformed(MalformedReason::InvalidUtf8))
}
