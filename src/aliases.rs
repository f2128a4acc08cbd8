// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret containers used throughout encrypted-password-vault.

pub use secure_gate::{fixed_alias, SecureRandomExt};

// Fixed-size secrets
fixed_alias!(SecretKey32, 32); // 256-bit XChaCha20-Poly1305 key, zeroized on drop
