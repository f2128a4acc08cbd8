// src/core/key.rs
//! Process key lifecycle
//!
//! A [`KeyManager`] owns exactly one 256-bit key drawn from the CSPRNG when it
//! is initialized. There is no way to import, export or re-derive the key, so
//! tokens produced by one process run cannot be decrypted by the next.

use std::fmt;

use crate::aliases::{SecretKey32, SecureRandomExt};
use crate::consts::KEY_LEN;

/// Opaque handle to a symmetric key
///
/// Immutable after creation and zeroized on drop. Key bytes are only visible
/// inside this crate, to the cipher.
pub struct SecretKey(SecretKey32);

impl SecretKey {
    /// Draw a fresh key from the CSPRNG
    pub(crate) fn generate() -> Self {
        Self(SecretKey32::random())
    }

    #[inline]
    pub(crate) fn expose(&self) -> &[u8; KEY_LEN] {
        self.0.expose_secret()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Owns the single key used for the lifetime of the process
///
/// Build one at startup and share it by reference (or `Arc`); concurrent
/// readers need no locking because the key never changes.
#[derive(Debug)]
pub struct KeyManager {
    key: SecretKey,
}

impl KeyManager {
    pub fn initialize() -> Self {
        let manager = Self {
            key: SecretKey::generate(),
        };
        #[cfg(feature = "logging")]
        tracing::info!("process key initialized ({} bits)", KEY_LEN * 8);
        manager
    }

    /// Borrow the key for a cipher call
    #[inline]
    pub fn key(&self) -> &SecretKey {
        &self.key
    }
}
