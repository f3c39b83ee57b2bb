//! Property-based tests for error handling.
//!
//! Property 7: Error classification and HTTP mapping

use axum::http::StatusCode;
use jwt_generator::error::{
    TOKEN_INVALID_KEY, TOKEN_MISSING_FIELD, TOKEN_SERIALIZATION_ERROR, TOKEN_SIGNING_ERROR,
    TOKEN_UNSUPPORTED_ALGORITHM,
};
use jwt_generator::http::ApiError;
use jwt_generator::jwt::AlgorithmFamily;
use jwt_generator::TokenError;
use proptest::prelude::*;

/// Arbitrary error message generator
fn arb_error_message() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,100}".prop_map(|s| s)
}

fn arb_family() -> impl Strategy<Value = AlgorithmFamily> {
    prop_oneof![
        Just(AlgorithmFamily::Hmac),
        Just(AlgorithmFamily::Rsa),
        Just(AlgorithmFamily::Ecdsa),
    ]
}

/// Every failure the encoder can raise.
fn arb_core_error() -> impl Strategy<Value = TokenError> {
    prop_oneof![
        arb_error_message().prop_map(TokenError::UnsupportedAlgorithm),
        (arb_family(), arb_error_message())
            .prop_map(|(family, reason)| TokenError::invalid_key(family, reason)),
        arb_error_message().prop_map(TokenError::Serialization),
        arb_error_message().prop_map(TokenError::SigningBackend),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 7: Encoder failures are server errors with the cause attached.
    #[test]
    fn prop_core_errors_are_server_errors(err in arb_core_error()) {
        prop_assert!(!err.is_client_error());

        let cause = err.to_string();
        let api = ApiError::from(err);

        prop_assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        prop_assert_eq!(api.detail(), format!("Internal server error: {cause}"));
    }

    /// Property 7: Missing fields are client errors naming the field.
    #[test]
    fn prop_missing_field_is_client_error(field in "[a-z_]{1,16}") {
        let err = TokenError::MissingRequiredField(field.clone());
        prop_assert!(err.is_client_error());
        prop_assert_eq!(err.code(), TOKEN_MISSING_FIELD);

        let api = ApiError::from(err);
        prop_assert_eq!(api.status(), StatusCode::UNPROCESSABLE_ENTITY);
        prop_assert!(api.detail().ends_with(&field));
    }

    /// Property 7: Codes depend only on the variant, never the message.
    #[test]
    fn prop_codes_are_stable(msg in arb_error_message(), family in arb_family()) {
        prop_assert_eq!(TokenError::UnsupportedAlgorithm(msg.clone()).code(), TOKEN_UNSUPPORTED_ALGORITHM);
        prop_assert_eq!(TokenError::invalid_key(family, msg.clone()).code(), TOKEN_INVALID_KEY);
        prop_assert_eq!(TokenError::Serialization(msg.clone()).code(), TOKEN_SERIALIZATION_ERROR);
        prop_assert_eq!(TokenError::signing(msg).code(), TOKEN_SIGNING_ERROR);
    }
}
