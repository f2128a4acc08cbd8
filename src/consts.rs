// src/consts.rs
//! Shared constants: security parameters and defaults

/// The 94 printable ASCII symbols passwords are drawn from
/// (ASCII letters, digits, then punctuation).
pub const PASSWORD_ALPHABET: &[u8; 94] = b"abcdefghijklmnopqrstuvwxyz\
ABCDEFGHIJKLMNOPQRSTUVWXYZ\
0123456789\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Shortest password the default policy will generate
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Longest password the default policy will generate
pub const MAX_PASSWORD_LENGTH: usize = 20;

/// Key size for XChaCha20-Poly1305
pub const KEY_LEN: usize = 32;

/// Current token format version (XChaCha20-Poly1305)
pub const TOKEN_VERSION: u8 = 0x01;

/// XChaCha20 extended nonce
pub const NONCE_LEN: usize = 24;

/// Poly1305 authentication tag
pub const TAG_LEN: usize = 16;

/// Size of the big-endian issuance timestamp
pub const TIMESTAMP_LEN: usize = 8;

/// version || issued_at || nonce, authenticated as associated data
pub const HEADER_LEN: usize = 1 + TIMESTAMP_LEN + NONCE_LEN;

/// Smallest structurally valid token: header, one ciphertext byte, tag
pub const MIN_TOKEN_LEN: usize = HEADER_LEN + 1 + TAG_LEN;

/// Tokens stamped further than this in the future are rejected by TTL checks
pub const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Default config file looked up when `EPV_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "password-vault.toml";

/// Default tracing filter for the CLI
pub const DEFAULT_LOG_FILTER: &str = "info";
