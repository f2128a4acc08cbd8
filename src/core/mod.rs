// src/core/mod.rs
pub mod crypto;
pub mod generator;
pub mod key;

pub use crypto::*;
pub use generator::*;
pub use key::*;
