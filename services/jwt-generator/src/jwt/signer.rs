//! Signature computation per algorithm family.

use crate::error::TokenError;
use crate::jwt::algorithm::{AlgorithmFamily, SigningAlgorithm};
use crate::jwt::key::{KeyMaterial, SigningKey};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::errors::ErrorKind;
use signature::Signer;

/// An algorithm bound to key material that has been parsed for it.
#[derive(Debug)]
pub struct JwtSigner {
    algorithm: SigningAlgorithm,
    key: SigningKey,
}

impl JwtSigner {
    /// Parse `material` for `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidKeyMaterial`] if the material cannot be
    /// used with the algorithm's family.
    pub fn new(algorithm: SigningAlgorithm, material: &KeyMaterial) -> Result<Self, TokenError> {
        let key = SigningKey::from_material(algorithm, material)?;
        Ok(Self { algorithm, key })
    }

    /// Algorithm this signer was built for.
    #[must_use]
    pub const fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }

    /// Sign `data` and return the base64url (unpadded) signature.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidKeyMaterial`] when the backend rejects a
    /// key it could only check lazily (DER input, curve mismatch), and
    /// [`TokenError::SigningBackend`] for any other cryptographic failure.
    pub fn sign(&self, data: &[u8]) -> Result<String, TokenError> {
        match &self.key {
            SigningKey::Hmac(key) | SigningKey::Rsa(key) | SigningKey::Ecdsa(key) => {
                let backend = self.algorithm.backend().ok_or_else(|| {
                    TokenError::signing(format!("no ring backend for {}", self.algorithm))
                })?;
                jsonwebtoken::crypto::sign(data, key, backend)
                    .map_err(|e| backend_error(self.algorithm.family(), &e))
            }
            SigningKey::EcdsaP521(key) => {
                let signature: p521::ecdsa::Signature = key
                    .try_sign(data)
                    .map_err(|e| TokenError::signing(e.to_string()))?;
                Ok(URL_SAFE_NO_PAD.encode(signature.to_bytes()))
            }
        }
    }
}

fn backend_error(family: AlgorithmFamily, err: &jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::InvalidRsaKey(_) | ErrorKind::InvalidEcdsaKey | ErrorKind::InvalidKeyFormat => {
            TokenError::invalid_key(family, err.to_string())
        }
        _ => TokenError::signing(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSA_DER: &[u8] = include_bytes!("../../tests/fixtures/rsa_private.der");
    const P256_PEM: &str = include_str!("../../tests/fixtures/ec_p256_private.pem");
    const P384_PEM: &str = include_str!("../../tests/fixtures/ec_p384_private.pem");
    const P521_PEM: &str = include_str!("../../tests/fixtures/ec_p521_private.pem");

    fn decoded_len(signature: &str) -> usize {
        URL_SAFE_NO_PAD.decode(signature).unwrap().len()
    }

    #[test]
    fn test_hmac_signature_lengths() {
        let secret = KeyMaterial::from("test-secret-key-for-testing-only");
        for (alg, len) in [
            (SigningAlgorithm::HS256, 32),
            (SigningAlgorithm::HS384, 48),
            (SigningAlgorithm::HS512, 64),
        ] {
            let signer = JwtSigner::new(alg, &secret).unwrap();
            assert_eq!(decoded_len(&signer.sign(b"payload").unwrap()), len);
        }
    }

    #[test]
    fn test_hmac_deterministic() {
        let signer = JwtSigner::new(SigningAlgorithm::HS256, &"same-key".into()).unwrap();
        assert_eq!(signer.sign(b"same data").unwrap(), signer.sign(b"same data").unwrap());
    }

    #[test]
    fn test_ecdsa_fixed_width_signatures() {
        for (alg, pem, len) in [
            (SigningAlgorithm::ES256, P256_PEM, 64),
            (SigningAlgorithm::ES384, P384_PEM, 96),
            (SigningAlgorithm::ES512, P521_PEM, 132),
        ] {
            let signer = JwtSigner::new(alg, &pem.into()).unwrap();
            assert_eq!(signer.algorithm(), alg);
            assert_eq!(decoded_len(&signer.sign(b"payload").unwrap()), len);
        }
    }

    #[test]
    fn test_rsa_der_key_signs() {
        let signer = JwtSigner::new(SigningAlgorithm::RS256, &RSA_DER.into()).unwrap();
        assert_eq!(decoded_len(&signer.sign(b"payload").unwrap()), 256);
    }

    #[test]
    fn test_rsa_garbage_der_is_invalid_key() {
        let signer = JwtSigner::new(SigningAlgorithm::RS256, &"my_secret_key".into()).unwrap();
        assert!(matches!(
            signer.sign(b"payload"),
            Err(TokenError::InvalidKeyMaterial {
                family: AlgorithmFamily::Rsa,
                ..
            })
        ));
    }

    #[test]
    fn test_curve_mismatch_is_invalid_key() {
        let signer = JwtSigner::new(SigningAlgorithm::ES256, &P384_PEM.into()).unwrap();
        assert!(matches!(
            signer.sign(b"payload"),
            Err(TokenError::InvalidKeyMaterial {
                family: AlgorithmFamily::Ecdsa,
                ..
            })
        ));
    }
}
