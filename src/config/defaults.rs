// src/config/defaults.rs
use crate::config::app::{GeneratorSettings, LoggingSettings, TokenSettings};
use crate::consts::{DEFAULT_LOG_FILTER, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

pub fn default_min_length() -> usize {
    MIN_PASSWORD_LENGTH
}

pub fn default_max_length() -> usize {
    MAX_PASSWORD_LENGTH
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}

pub fn default_generator() -> GeneratorSettings {
    GeneratorSettings {
        min_length: default_min_length(),
        max_length: default_max_length(),
    }
}

pub fn default_tokens() -> TokenSettings {
    TokenSettings { ttl_secs: None }
}

pub fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_log_filter(),
    }
}
