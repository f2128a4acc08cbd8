// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the small enums that describe user-visible choices:
//! encryption algorithms and the kind of input an operation was given.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::TOKEN_VERSION;

/// Supported token encryption algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum EncryptionAlgorithm {
    #[default]
    XChaCha20Poly1305,
}

impl EncryptionAlgorithm {
    /// Version byte written at the front of every token
    pub const fn version_tag(self) -> u8 {
        match self {
            EncryptionAlgorithm::XChaCha20Poly1305 => TOKEN_VERSION,
        }
    }

    pub fn from_version_tag(tag: u8) -> Option<Self> {
        match tag {
            TOKEN_VERSION => Some(EncryptionAlgorithm::XChaCha20Poly1305),
            _ => None,
        }
    }
}

/// Which user input an operation rejected as empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    Plaintext,
    Token,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Plaintext => f.write_str("password"),
            InputKind::Token => f.write_str("encrypted password"),
        }
    }
}
