// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::enums::InputKind;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Requested password length is out of bounds or not a number
    #[error("invalid password length {value:?}: must be a number between {min} and {max}")]
    InvalidLength {
        value: String,
        min: usize,
        max: usize,
    },

    #[error("{0} is required")]
    EmptyInput(InputKind),

    /// Token could not be parsed; never reaches the cipher
    #[error("invalid encrypted password: {0}")]
    TokenMalformed(MalformedReason),

    // Deliberately carries nothing: wrong key and tampering look the same.
    #[error("encrypted password failed authentication")]
    Authentication,

    /// AEAD refused to seal (message beyond the cipher's length limit)
    #[error("encryption failed")]
    Encryption,

    #[error("token issued at {issued_at} is outside its validity window (now {now})")]
    TokenExpired { issued_at: i64, now: i64 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Why a token failed structural validation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("not URL-safe base64")]
    Encoding,

    #[error("truncated ({len} bytes)")]
    Truncated { len: usize },

    #[error("unknown version 0x{0:02x}")]
    UnknownVersion(u8),

    #[error("plaintext is not UTF-8")]
    InvalidUtf8,
}
