//! Compact JWS serialization: `header.payload.signature`.

use crate::error::TokenError;
use crate::jwt::algorithm::SigningAlgorithm;
use crate::jwt::claims::ClaimSet;
use crate::jwt::key::KeyMaterial;
use crate::jwt::signer::JwtSigner;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;
use std::fmt;

const TOKEN_TYPE: &str = "JWT";

#[derive(Debug, Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

impl Header {
    const fn new(algorithm: SigningAlgorithm) -> Self {
        Self {
            alg: algorithm.as_str(),
            typ: TOKEN_TYPE,
        }
    }
}

/// A signed token in compact serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SignedToken(String);

impl SignedToken {
    /// Borrow the compact form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the compact form.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SignedToken> for String {
    fn from(token: SignedToken) -> Self {
        token.0
    }
}

/// Encodes claims into signed tokens for one algorithm.
#[derive(Debug, Clone, Copy)]
pub struct JwtSerializer {
    algorithm: SigningAlgorithm,
}

impl JwtSerializer {
    /// Validate `algorithm` and build a serializer for it.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnsupportedAlgorithm`] for unknown identifiers.
    pub fn new(algorithm: &str) -> Result<Self, TokenError> {
        Ok(Self {
            algorithm: SigningAlgorithm::from_id(algorithm)?,
        })
    }

    /// Algorithm every token is signed with.
    #[must_use]
    pub const fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    /// Serialize and sign `claims` with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Serialization`] if the claims cannot be encoded,
    /// [`TokenError::InvalidKeyMaterial`] if the key does not fit the
    /// algorithm, and [`TokenError::SigningBackend`] if signing fails.
    pub fn serialize(&self, claims: &ClaimSet, key: &KeyMaterial) -> Result<SignedToken, TokenError> {
        let header = encode_segment(&Header::new(self.algorithm))?;
        let payload = encode_segment(claims)?;
        let signing_input = format!("{header}.{payload}");

        let signer = JwtSigner::new(self.algorithm, key)?;
        let signature = signer.sign(signing_input.as_bytes())?;

        Ok(SignedToken(format!("{signing_input}.{signature}")))
    }
}

/// Sign `claims` with `key` under the algorithm named by `algorithm`.
///
/// # Errors
///
/// Fails with [`TokenError::UnsupportedAlgorithm`] before touching the key
/// when `algorithm` is unknown; otherwise as [`JwtSerializer::serialize`].
pub fn sign(claims: &ClaimSet, key: &KeyMaterial, algorithm: &str) -> Result<SignedToken, TokenError> {
    JwtSerializer::new(algorithm)?.serialize(claims, key)
}

fn encode_segment<T: Serialize + ?Sized>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}
