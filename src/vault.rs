// src/vault.rs
//! The three operations offered to the user interface, bound to one process key
//!
//! A [`PasswordVault`] is built once at startup and handed to whatever drives
//! the UI. Tokens it produces die with it: the key is never persisted.

use std::time::Duration;

use crate::config::Config;
use crate::core::{CipherEngine, KeyManager, PasswordGenerator};
use crate::error::Result;

#[derive(Debug)]
pub struct PasswordVault {
    keys: KeyManager,
    generator: PasswordGenerator,
    engine: CipherEngine,
    token_ttl: Option<Duration>,
}

impl PasswordVault {
    /// Fresh key, default 6..=20 length policy, no token expiry
    pub fn new() -> Self {
        Self {
            keys: KeyManager::initialize(),
            generator: PasswordGenerator::default(),
            engine: CipherEngine::new(),
            token_ttl: None,
        }
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        Ok(Self {
            keys: KeyManager::initialize(),
            generator: PasswordGenerator::new(config.length_policy()?),
            engine: CipherEngine::new(),
            token_ttl: config.token_ttl(),
        })
    }

    pub fn generator(&self) -> &PasswordGenerator {
        &self.generator
    }

    pub fn generate_password(&self, length: usize) -> Result<String> {
        self.generator.generate(length)
    }

    /// Generate from the raw text of a length field
    pub fn generate_password_from_input(&self, input: &str) -> Result<String> {
        self.generator.generate_from_input(input)
    }

    pub fn encrypt_password(&self, plaintext: &str) -> Result<String> {
        self.engine.encrypt(plaintext, self.keys.key())
    }

    pub fn decrypt_password(&self, token: &str) -> Result<String> {
        match self.token_ttl {
            Some(ttl) => self.engine.decrypt_with_ttl(token, self.keys.key(), ttl),
            None => self.engine.decrypt(token, self.keys.key()),
        }
    }
}

impl Default for PasswordVault {
    fn default() -> Self {
        Self::new()
    }
}
