//! Error types for the measurement engine.

use thiserror::Error;

/// Errors surfaced by the sample store, statistics engine and configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No samples have been recorded under this benchmark name.
    ///
    /// Indicates statistics were requested before any trial ran for the name.
    /// Callers should treat this as a usage error and not render partial data.
    #[error("no samples recorded for benchmark '{name}'")]
    NotFound {
        /// The benchmark name that was looked up.
        name: String,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_string(),
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
