//! Error types for token generation.

use crate::jwt::AlgorithmFamily;
use thiserror::Error;

/// Failures surfaced by token generation.
///
/// Every variant is terminal for the request that produced it; signing is
/// deterministic, so nothing here is worth retrying.
#[derive(Error, Debug)]
pub enum TokenError {
    /// A required request field was absent
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Algorithm identifier outside the supported set
    #[error("Algorithm not supported: {0}")]
    UnsupportedAlgorithm(String),

    /// Key bytes unusable for the algorithm's family
    #[error("Invalid {family} key material: {reason}")]
    InvalidKeyMaterial {
        /// Family the key was parsed for
        family: AlgorithmFamily,
        /// Backend or parser message
        reason: String,
    },

    /// Claims could not be encoded as JSON
    #[error("Claim serialization error: {0}")]
    Serialization(String),

    /// The cryptographic backend failed
    #[error("Signing backend error: {0}")]
    SigningBackend(String),

    /// Invalid service configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TokenError {
    /// Create an invalid key material error for the given family.
    #[must_use]
    pub fn invalid_key(family: AlgorithmFamily, reason: impl Into<String>) -> Self {
        Self::InvalidKeyMaterial {
            family,
            reason: reason.into(),
        }
    }

    /// Create a signing backend error.
    #[must_use]
    pub fn signing(msg: impl Into<String>) -> Self {
        Self::SigningBackend(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Stable machine-readable code, used for metrics labels and logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField(_) => TOKEN_MISSING_FIELD,
            Self::UnsupportedAlgorithm(_) => TOKEN_UNSUPPORTED_ALGORITHM,
            Self::InvalidKeyMaterial { .. } => TOKEN_INVALID_KEY,
            Self::Serialization(_) => TOKEN_SERIALIZATION_ERROR,
            Self::SigningBackend(_) => TOKEN_SIGNING_ERROR,
            Self::ConfigError(_) => TOKEN_CONFIG_ERROR,
        }
    }

    /// Whether the caller sent a request that can never succeed as written.
    ///
    /// Only structural problems with the request count; algorithm, key and
    /// signing failures are reported as server-side errors.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingRequiredField(_))
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

// Error codes for HTTP responses and metrics

/// Code for [`TokenError::MissingRequiredField`].
pub const TOKEN_MISSING_FIELD: &str = "TOKEN_MISSING_FIELD";
/// Code for [`TokenError::UnsupportedAlgorithm`].
pub const TOKEN_UNSUPPORTED_ALGORITHM: &str = "TOKEN_UNSUPPORTED_ALGORITHM";
/// Code for [`TokenError::InvalidKeyMaterial`].
pub const TOKEN_INVALID_KEY: &str = "TOKEN_INVALID_KEY";
/// Code for [`TokenError::Serialization`].
pub const TOKEN_SERIALIZATION_ERROR: &str = "TOKEN_SERIALIZATION_ERROR";
/// Code for [`TokenError::SigningBackend`].
pub const TOKEN_SIGNING_ERROR: &str = "TOKEN_SIGNING_ERROR";
/// Code for [`TokenError::ConfigError`].
pub const TOKEN_CONFIG_ERROR: &str = "TOKEN_CONFIG_ERROR";
