use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;
use super::errors::VerificationError;
use crate::clock::Clock;

/// Issues and verifies HS256 bearer tokens.
///
/// The signing secret is fixed at construction. Expiry is judged against the injected
/// clock rather than the library's own wall-clock check, so tests can move time.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (at least 32 bytes for HS256)
    /// * `clock` - Time source for `iat`/`exp` and expiry checks
    pub fn new(secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            clock,
        }
    }

    /// Issue a token for `subject` that expires `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, self.clock.now(), ttl);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded subject.
    ///
    /// # Errors
    /// * `Malformed` - Not a token of the expected shape (encoding, algorithm, claims)
    /// * `InvalidSignature` - Signed with another secret or altered after signing
    /// * `Expired` - The clock is at or past `exp`
    pub fn verify(&self, token: &str) -> Result<String, VerificationError> {
        let claims = self.decode(token)?;

        if claims.is_expired(self.clock.now()) {
            return Err(VerificationError::Expired);
        }

        Ok(claims.sub)
    }

    fn decode(&self, token: &str) -> Result<Claims, VerificationError> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => VerificationError::InvalidSignature,
                ErrorKind::ExpiredSignature => VerificationError::Expired,
                _ => VerificationError::Malformed(e.to_string()),
            })
    }
}
