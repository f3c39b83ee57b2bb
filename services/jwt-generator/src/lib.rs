//! JWT Generator library.
//!
//! Enriches caller-supplied claims with `iat`/`exp` and signs them as a
//! compact JWT with HMAC, RSA or ECDSA. Stateless: every call is independent.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod generator;
pub mod http;
pub mod jwt;
pub mod metrics;
pub mod observability;

// Re-exports for convenience
pub use config::Config;
pub use error::TokenError;
pub use generator::{GenerationOptions, SigningRequest, TokenGenerator};
pub use jwt::{sign, ClaimSet, KeyMaterial, SignedToken};
