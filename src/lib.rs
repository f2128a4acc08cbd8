// src/lib.rs
//! encrypted-password-vault: generate strong passwords and keep them encrypted in memory
//!
//! Features:
//! - Passwords drawn uniformly from 94 printable symbols with a CSPRNG
//! - XChaCha20-Poly1305 tokens with authenticated version, timestamp and nonce
//! - One zeroizing process key, never persisted
//! - Optional TTL on tokens, TOML configuration, `tracing` logging

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod vault;

// Re-export everything users need at the crate root
pub use crate::config::{load as load_config, Config};
pub use crate::core::{
    generate_password, CipherEngine, KeyManager, LengthPolicy, PasswordGenerator, SecretKey,
    Token, TokenInfo,
};
pub use enums::{EncryptionAlgorithm, InputKind};
pub use error::{CoreError, MalformedReason, Result as CoreResult};
pub use vault::PasswordVault;
