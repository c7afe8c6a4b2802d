//! HS256 session tokens embedding the caller's id and name.
//!
//! Tokens are issued without an expiry claim: a session lasts until the
//! signing secret rotates. Verification is a pure function from token to
//! identity; no request state is involved.

use crate::error::AppError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Identity embedded in a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub name: String,
}

/// Signing and verification material derived once from the configured secret.
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl AuthKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Issued tokens carry no `exp`; accept them instead of rejecting as incomplete.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        AuthKeys {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn sign(&self, claims: &Claims) -> Result<String, AppError> {
        Ok(encode(&Header::default(), claims, &self.encoding)?)
    }

    /// Token in, identity out. Any decode failure collapses to
    /// [`AppError::InvalidToken`]; the underlying reason is only logged.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "token rejected");
                Err(AppError::InvalidToken)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> Claims {
        Claims {
            id: 42,
            name: "Dra. Carla".into(),
        }
    }

    #[test]
    fn sign_then_verify_returns_the_same_identity() {
        let keys = AuthKeys::from_secret(b"test-secret");
        let token = keys.sign(&claims()).unwrap();
        assert_eq!(keys.verify(&token).unwrap(), claims());
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let ours = AuthKeys::from_secret(b"test-secret");
        let theirs = AuthKeys::from_secret(b"another-secret");
        let token = theirs.sign(&claims()).unwrap();
        assert!(matches!(ours.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn garbage_is_rejected() {
        let keys = AuthKeys::from_secret(b"test-secret");
        assert!(matches!(
            keys.verify("not.a.token"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn tokens_without_expiry_are_accepted() {
        let keys = AuthKeys::from_secret(b"test-secret");
        let token = keys.sign(&claims()).unwrap();
        // Stock validation insists on an `exp` claim; ours must not.
        let strict = Validation::new(Algorithm::HS256);
        assert!(decode::<Claims>(&token, &DecodingKey::from_secret(b"test-secret"), &strict).is_err());
        assert!(keys.verify(&token).is_ok());
    }
}
