//! Claim enrichment and compact JWT encoding.

pub mod algorithm;
pub mod claims;
pub mod key;
pub mod serializer;
pub mod signer;

pub use algorithm::{AlgorithmFamily, SigningAlgorithm};
pub use claims::{enrich, ClaimSet, Clock, FixedClock, SystemClock, Timestamp, DEFAULT_TTL_SECONDS};
pub use key::{KeyMaterial, SigningKey};
pub use serializer::{sign, JwtSerializer, SignedToken};
pub use signer::JwtSigner;
