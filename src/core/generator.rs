// src/core/generator.rs
//! Random password generation
//!
//! Every character is an independent, uniform draw from the 94-symbol
//! [`PASSWORD_ALPHABET`] using the thread-local CSPRNG (ChaCha, OS-seeded).
//! Length bounds are product policy and are enforced here, not by callers.

use rand::Rng;

use crate::consts::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH, PASSWORD_ALPHABET};
use crate::error::{CoreError, Result};

/// Inclusive bounds on generated password length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    min: usize,
    max: usize,
}

impl LengthPolicy {
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || min > max {
            return Err(CoreError::Config(format!(
                "password length bounds must satisfy 1 <= min <= max (got {min}..={max})"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    fn reject(&self, value: impl ToString) -> CoreError {
        CoreError::InvalidLength {
            value: value.to_string(),
            min: self.min,
            max: self.max,
        }
    }
}

impl Default for LengthPolicy {
    fn default() -> Self {
        Self {
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        }
    }
}

/// Generates passwords under a [`LengthPolicy`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordGenerator {
    policy: LengthPolicy,
}

impl PasswordGenerator {
    pub fn new(policy: LengthPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LengthPolicy {
        self.policy
    }

    /// Generate a password of exactly `length` characters
    pub fn generate(&self, length: usize) -> Result<String> {
        if !self.policy.contains(length) {
            return Err(self.policy.reject(length));
        }
        Ok(random_password(length))
    }

    /// Parse a user-typed length and generate
    ///
    /// Non-numeric, negative or out-of-range text is reported verbatim.
    pub fn generate_from_input(&self, input: &str) -> Result<String> {
        let length = input
            .trim()
            .parse::<usize>()
            .map_err(|_| self.policy.reject(input))?;
        self.generate(length)
    }
}

/// Generate a password under the default 6..=20 policy
#[inline]
pub fn generate_password(length: usize) -> Result<String> {
    PasswordGenerator::default().generate(length)
}

fn random_password(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| PASSWORD_ALPHABET[rng.random_range(0..PASSWORD_ALPHABET.len())] as char)
        .collect()
}
