//! Controller error types.
//!
//! Only construction can fail: an unreadable or invalid configuration is
//! fatal before the first tick. The tick path itself is infallible —
//! abnormal inputs degrade to safe commands, never to errors.

use std::path::PathBuf;

/// Configuration loading/validation error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("failed to read {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// TOML parse error (includes unsupported platform variants, which
    /// fail at the deserialization layer).
    #[error("config parse error: {0}")]
    Parse(String),

    /// Parameter bounds violation.
    #[error("config validation: {0}")]
    Validation(String),
}
