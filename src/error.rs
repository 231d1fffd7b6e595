//! Error types for configuration input.
//!
//! List and value operations are total and never fail; the only fallible surface
//! of the crate is turning user-supplied configuration text into settings.

use std::fmt;

/// Errors raised while building a [`ParseConfig`](crate::ParseConfig) from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The date order name was not recognized.
    UnknownDateOrder(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownDateOrder(name) => {
                write!(
                    f,
                    "unknown date order '{name}' (expected one of: dmy, mdy, ymd)"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
