//! Request-level token generation: enrich the claims, then sign them.

use crate::error::TokenError;
use crate::jwt::{self, ClaimSet, Clock, KeyMaterial, SignedToken, SigningAlgorithm, SystemClock};
use crate::metrics;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};

/// Per-request generation options.
///
/// The algorithm stays a raw identifier here; the encoder decides whether it
/// is supported.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Algorithm identifier, `"HS256"` when omitted
    pub algorithm: String,
    /// Add `exp` one hour after `iat` when the claims lack one
    pub add_exp: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            algorithm: SigningAlgorithm::default().as_str().to_string(),
            add_exp: true,
        }
    }
}

impl GenerationOptions {
    /// Use `algorithm` instead of HS256.
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Turn default expiry on or off.
    #[must_use]
    pub const fn with_add_exp(mut self, add_exp: bool) -> Self {
        self.add_exp = add_exp;
        self
    }
}

/// JSON body of `POST /generate_jwt`.
#[derive(Debug, Deserialize)]
pub struct GenerateJwtRequest {
    /// Signing key; an HMAC secret or a PEM private key
    #[serde(default)]
    pub key: Option<String>,
    /// Claims to sign
    #[serde(default)]
    pub body: ClaimSet,
    /// `null` and absent both mean defaults
    #[serde(default)]
    pub options: Option<GenerationOptions>,
}

/// JSON response of `POST /generate_jwt`.
#[derive(Debug, Serialize)]
pub struct GenerateJwtResponse {
    /// Compact serialized JWT
    pub token: SignedToken,
}

/// Everything needed to produce one token.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// Signing key
    pub key: KeyMaterial,
    /// Claims before enrichment
    pub claims: ClaimSet,
    /// Algorithm and expiry choice
    pub options: GenerationOptions,
}

impl SigningRequest {
    /// Request with default options.
    #[must_use]
    pub fn new(key: impl Into<KeyMaterial>, claims: ClaimSet) -> Self {
        Self {
            key: key.into(),
            claims,
            options: GenerationOptions::default(),
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

impl TryFrom<GenerateJwtRequest> for SigningRequest {
    type Error = TokenError;

    fn try_from(request: GenerateJwtRequest) -> Result<Self, Self::Error> {
        let key = request
            .key
            .ok_or_else(|| TokenError::MissingRequiredField("key".to_string()))?;

        Ok(Self {
            key: KeyMaterial::from(key),
            claims: request.body,
            options: request.options.unwrap_or_default(),
        })
    }
}

/// Turns signing requests into tokens, reading the time from `C`.
#[derive(Debug, Clone, Default)]
pub struct TokenGenerator<C = SystemClock> {
    clock: C,
}

impl TokenGenerator<SystemClock> {
    /// Generator reading the wall clock.
    #[must_use]
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> TokenGenerator<C> {
    /// Generator reading the time from `clock`.
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Enrich the request's claims and sign them.
    ///
    /// # Errors
    ///
    /// Propagates every [`TokenError`] raised by the encoder; nothing is
    /// retried and no fallback algorithm is tried.
    #[tracing::instrument(skip_all, fields(algorithm = %request.options.algorithm))]
    pub fn generate(&self, request: SigningRequest) -> Result<SignedToken, TokenError> {
        let SigningRequest { key, claims, options } = request;
        let started = Instant::now();

        let claims = jwt::enrich(claims, options.add_exp, self.clock.now());

        match jwt::sign(&claims, &key, &options.algorithm) {
            Ok(token) => {
                metrics::record_issued(&options.algorithm, started.elapsed());
                info!(claims = claims.len(), "Token issued");
                Ok(token)
            }
            Err(err) => {
                metrics::record_failure(err.code());
                warn!(code = err.code(), error = %err, "Token generation failed");
                Err(err)
            }
        }
    }
}
