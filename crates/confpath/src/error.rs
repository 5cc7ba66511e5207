//! Configuration error types.
//!
//! Only the input-boundary constructors ([`Node::from_json_str`] and
//! [`Node::from_toml_str`]) can fail. Path resolution reports absence as
//! `None`, never as an error.
//!
//! [`Node::from_json_str`]: crate::Node::from_json_str
//! [`Node::from_toml_str`]: crate::Node::from_toml_str

use thiserror::Error;

/// Errors raised while decoding configuration text into a tree.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input was not valid JSON.
    #[error("while parsing config: {source}")]
    Json {
        /// The underlying JSON parse error.
        #[from]
        source: serde_json::Error,
    },

    /// The input was not valid TOML.
    #[error("while parsing config: {source}")]
    Toml {
        /// The underlying TOML parse error.
        #[from]
        source: toml::de::Error,
    },
}

/// Convenience alias for results carrying a [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
