// src/core/crypto/mod.rs
//! Authenticated encryption of passwords into printable tokens
//!
//! Pure in-memory operations: no I/O and no state beyond the key argument.
//! Decryption runs in a fixed order: empty check, structural parse,
//! authentication, release. Malformed input never reaches the cipher and
//! unauthenticated bytes never reach the caller.
mod decrypt;
mod encrypt;
mod token;

use std::time::Duration;

use chrono::Utc;

pub use token::{Token, TokenInfo};

use crate::consts::MAX_CLOCK_SKEW_SECS;
use crate::core::key::SecretKey;
use crate::enums::InputKind;
use crate::error::{CoreError, Result};

/// Stateless XChaCha20-Poly1305 token cipher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CipherEngine;

impl CipherEngine {
    pub fn new() -> Self {
        Self
    }

    /// Encrypt a non-empty plaintext under a fresh random nonce
    pub fn encrypt(&self, plaintext: &str, key: &SecretKey) -> Result<String> {
        self.encrypt_at(plaintext, key, now_secs())
    }

    pub(crate) fn encrypt_at(
        &self,
        plaintext: &str,
        key: &SecretKey,
        issued_at: u64,
    ) -> Result<String> {
        let token = encrypt::seal(plaintext, key, issued_at)?;
        let encoded = token.encode();
        #[cfg(feature = "logging")]
        tracing::debug!(token_len = encoded.len(), "password encrypted");
        Ok(encoded)
    }

    /// Authenticate and decrypt a token produced by [`encrypt`](Self::encrypt)
    pub fn decrypt(&self, token: &str, key: &SecretKey) -> Result<String> {
        let token = parse_nonempty(token)?;
        decrypt::open(&token, key).inspect_err(log_rejection)
    }

    /// Like [`decrypt`](Self::decrypt), but also rejects tokens older than
    /// `ttl` or stamped too far in the future
    ///
    /// The timestamp is only trusted after authentication succeeds.
    pub fn decrypt_with_ttl(&self, token: &str, key: &SecretKey, ttl: Duration) -> Result<String> {
        self.decrypt_with_ttl_at(token, key, ttl, Utc::now().timestamp())
    }

    fn decrypt_with_ttl_at(
        &self,
        token: &str,
        key: &SecretKey,
        ttl: Duration,
        now: i64,
    ) -> Result<String> {
        let token = parse_nonempty(token)?;
        let plaintext = decrypt::open(&token, key).inspect_err(log_rejection)?;

        let issued_at = i64::try_from(token.issued_at_secs()).unwrap_or(i64::MAX);
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        let expired = issued_at.saturating_add(ttl_secs) < now;
        let from_future = issued_at > now.saturating_add(MAX_CLOCK_SKEW_SECS);
        if expired || from_future {
            let err = CoreError::TokenExpired { issued_at, now };
            log_rejection(&err);
            return Err(err);
        }
        Ok(plaintext)
    }
}

fn parse_nonempty(token: &str) -> Result<Token> {
    if token.is_empty() {
        return Err(CoreError::EmptyInput(InputKind::Token));
    }
    Token::parse(token).inspect_err(log_rejection)
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or(0)
}

#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
fn log_rejection(err: &CoreError) {
    #[cfg(feature = "logging")]
    tracing::warn!("token rejected: {err}");
}
