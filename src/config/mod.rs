// src/config/mod.rs
//! Configuration system for encrypted-password-vault
//!
//! TOML file named by `EPV_CONFIG`, falling back to built-in defaults.
//! Only the application shell reads it; core operations take explicit arguments.

pub use app::{load, load_from, Config, GeneratorSettings, LoggingSettings, TokenSettings};

mod app;
mod defaults;
