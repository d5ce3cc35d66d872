//! Error types for smails-core

use thiserror::Error;

/// Result type alias for smails-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in smails-core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file could not be found
    #[error("configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was searched
        path: String,
    },

    /// Failed to parse YAML configuration or props
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    /// Invalid configuration value
    #[error("invalid configuration: {message}")]
    ConfigInvalid {
        /// Description of what's invalid
        message: String,
    },

    /// Mail directory or its `Mail.mjml` template is missing
    #[error("mail '{name}' not found at {path}")]
    MailNotFound {
        /// Name of the mail
        name: String,
        /// Path that was searched
        path: String,
    },

    /// Props file does not describe a mapping
    #[error("invalid props in {path}: {message}")]
    InvalidProps {
        /// Path of the props file
        path: String,
        /// Description of the problem
        message: String,
    },

    /// Template compilation or rendering error
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// The transpiler could not produce any HTML
    #[error("transpile error: {message}")]
    Transpile {
        /// Description reported by the transpiler
        message: String,
    },

    /// Scoping class prefix produced an unusable pattern
    #[error("invalid scoping pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
