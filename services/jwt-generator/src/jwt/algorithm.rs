//! Supported signing algorithms and their families.

use crate::error::TokenError;
use std::fmt;
use std::str::FromStr;

/// Grouping of algorithms by the shape of key material they consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// Shared secret, HMAC-SHA2
    Hmac,
    /// RSA private key, RSASSA-PKCS1-v1_5
    Rsa,
    /// EC private key on a NIST curve
    Ecdsa,
}

impl AlgorithmFamily {
    /// Human-readable family name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hmac => "HMAC",
            Self::Rsa => "RSA",
            Self::Ecdsa => "ECDSA",
        }
    }
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT signing algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SigningAlgorithm {
    /// HMAC with SHA-256
    #[default]
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSA PKCS#1 v1.5 with SHA-256
    RS256,
    /// RSA PKCS#1 v1.5 with SHA-384
    RS384,
    /// RSA PKCS#1 v1.5 with SHA-512
    RS512,
    /// ECDSA with P-256 and SHA-256
    ES256,
    /// ECDSA with P-384 and SHA-384
    ES384,
    /// ECDSA with P-521 and SHA-512
    ES512,
}

impl SigningAlgorithm {
    /// Every supported algorithm. Lookup by identifier goes through this table.
    pub const ALL: [Self; 9] = [
        Self::HS256,
        Self::HS384,
        Self::HS512,
        Self::RS256,
        Self::RS384,
        Self::RS512,
        Self::ES256,
        Self::ES384,
        Self::ES512,
    ];

    /// Resolve an algorithm identifier. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnsupportedAlgorithm`] carrying `id` when it is
    /// not one of the supported identifiers.
    pub fn from_id(id: &str) -> Result<Self, TokenError> {
        Self::ALL
            .iter()
            .copied()
            .find(|alg| alg.as_str() == id)
            .ok_or_else(|| TokenError::UnsupportedAlgorithm(id.to_string()))
    }

    /// Get algorithm name for JWT header.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
            Self::RS256 => "RS256",
            Self::RS384 => "RS384",
            Self::RS512 => "RS512",
            Self::ES256 => "ES256",
            Self::ES384 => "ES384",
            Self::ES512 => "ES512",
        }
    }

    /// Family of key material this algorithm consumes.
    #[must_use]
    pub const fn family(&self) -> AlgorithmFamily {
        match self {
            Self::HS256 | Self::HS384 | Self::HS512 => AlgorithmFamily::Hmac,
            Self::RS256 | Self::RS384 | Self::RS512 => AlgorithmFamily::Rsa,
            Self::ES256 | Self::ES384 | Self::ES512 => AlgorithmFamily::Ecdsa,
        }
    }

    /// Output size of the SHA-2 digest, in bytes.
    #[must_use]
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::HS256 | Self::RS256 | Self::ES256 => 32,
            Self::HS384 | Self::RS384 | Self::ES384 => 48,
            Self::HS512 | Self::RS512 | Self::ES512 => 64,
        }
    }

    /// Equivalent `jsonwebtoken` algorithm, where that crate can sign it.
    ///
    /// `jsonwebtoken` has no P-521 support, so `ES512` returns `None`.
    #[must_use]
    pub(crate) const fn backend(&self) -> Option<jsonwebtoken::Algorithm> {
        use jsonwebtoken::Algorithm;
        match self {
            Self::HS256 => Some(Algorithm::HS256),
            Self::HS384 => Some(Algorithm::HS384),
            Self::HS512 => Some(Algorithm::HS512),
            Self::RS256 => Some(Algorithm::RS256),
            Self::RS384 => Some(Algorithm::RS384),
            Self::RS512 => Some(Algorithm::RS512),
            Self::ES256 => Some(Algorithm::ES256),
            Self::ES384 => Some(Algorithm::ES384),
            Self::ES512 => None,
        }
    }
}

impl FromStr for SigningAlgorithm {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Display for SigningAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
