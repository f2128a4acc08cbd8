// src/core/crypto/token.rs
//! Token wire format
//!
//! ```text
//! [version: 1][issued_at: 8, big-endian][nonce: 24][ciphertext + tag: N + 16]
//! ```
//!
//! The first 33 bytes form the header and are bound to the ciphertext as
//! associated data. The whole thing travels as unpadded URL-safe base64.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::consts::{HEADER_LEN, MIN_TOKEN_LEN, NONCE_LEN, TAG_LEN, TIMESTAMP_LEN};
use crate::enums::EncryptionAlgorithm;
use crate::error::{CoreError, MalformedReason, Result};

/// A structurally valid, not yet authenticated, token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    algorithm: EncryptionAlgorithm,
    issued_at: u64,
    nonce: [u8; NONCE_LEN],
    sealed: Vec<u8>,
}

impl Token {
    pub(crate) fn new(
        algorithm: EncryptionAlgorithm,
        issued_at: u64,
        nonce: [u8; NONCE_LEN],
        sealed: Vec<u8>,
    ) -> Self {
        Self {
            algorithm,
            issued_at,
            nonce,
            sealed,
        }
    }

    /// Structural validation only; nothing here is trustworthy until the
    /// cipher has verified the tag.
    pub fn parse(encoded: &str) -> Result<Self> {
        let raw = URL_SAFE_NO_PAD
            .decode(encoded.trim())
            .map_err(|_| CoreError::TokenMalformed(MalformedReason::Encoding))?;
        Self::from_bytes(&raw)
    }

    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        if raw.len() < MIN_TOKEN_LEN {
            return Err(CoreError::TokenMalformed(MalformedReason::Truncated {
                len: raw.len(),
            }));
        }

        let (header, sealed) = raw.split_at(HEADER_LEN);
        let algorithm = EncryptionAlgorithm::from_version_tag(header[0])
            .ok_or(CoreError::TokenMalformed(MalformedReason::UnknownVersion(header[0])))?;

        let mut timestamp = [0u8; TIMESTAMP_LEN];
        timestamp.copy_from_slice(&header[1..1 + TIMESTAMP_LEN]);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&header[1 + TIMESTAMP_LEN..]);

        Ok(Self {
            algorithm,
            issued_at: u64::from_be_bytes(timestamp),
            nonce,
            sealed: sealed.to_vec(),
        })
    }

    /// Associated data covered by the authentication tag
    pub fn header(&self) -> [u8; HEADER_LEN] {
        encode_header(self.algorithm, self.issued_at, &self.nonce)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.sealed.len());
        out.extend_from_slice(&self.header());
        out.extend_from_slice(&self.sealed);
        out
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.to_bytes())
    }

    pub fn algorithm(&self) -> EncryptionAlgorithm {
        self.algorithm
    }

    pub fn version(&self) -> u8 {
        self.algorithm.version_tag()
    }

    /// Raw issuance time in unix seconds (unauthenticated)
    pub fn issued_at_secs(&self) -> u64 {
        self.issued_at
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.issued_at)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    pub(crate) fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// Ciphertext followed by the Poly1305 tag
    pub(crate) fn sealed(&self) -> &[u8] {
        &self.sealed
    }

    /// Length of the encrypted payload, excluding the tag
    pub fn ciphertext_len(&self) -> usize {
        self.sealed.len() - TAG_LEN
    }

    pub fn info(&self) -> TokenInfo {
        TokenInfo {
            version: self.version(),
            algorithm: self.algorithm,
            issued_at: self.issued_at(),
            ciphertext_len: self.ciphertext_len(),
        }
    }
}

pub(crate) fn encode_header(
    algorithm: EncryptionAlgorithm,
    issued_at: u64,
    nonce: &[u8; NONCE_LEN],
) -> [u8; HEADER_LEN] {
    let mut header = [0u8; HEADER_LEN];
    header[0] = algorithm.version_tag();
    header[1..1 + TIMESTAMP_LEN].copy_from_slice(&issued_at.to_be_bytes());
    header[1 + TIMESTAMP_LEN..].copy_from_slice(nonce);
    header
}

/// Displayable summary of a token's header; never contains plaintext
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenInfo {
    pub version: u8,
    pub algorithm: EncryptionAlgorithm,
    pub issued_at: Option<DateTime<Utc>>,
    pub ciphertext_len: usize,
}
