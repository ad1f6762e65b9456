use std::sync::Arc;

use chrono::Duration;

use crate::clock::Clock;
use crate::jwt::JwtError;
use crate::jwt::TokenService;
use crate::jwt::VerificationError;
use crate::password::HashError;
use crate::password::PasswordHasher;

/// Password and token primitives behind one handle, built once at startup.
///
/// Deciding *who* a subject is stays with the caller; this type only knows
/// hashes, signatures and expiry.
pub struct Authenticator {
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl Authenticator {
    pub fn new(jwt_secret: &[u8], clock: Arc<dyn Clock>) -> Self {
        Self {
            hasher: PasswordHasher::new(),
            tokens: TokenService::new(jwt_secret, clock),
        }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.hasher.hash(password)
    }

    /// Malformed stored hashes never match.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.hasher.verify(password, stored_hash)
    }

    /// Burn the cost of [`Self::verify_password`] when there is no account to check.
    pub fn verify_decoy(&self, password: &str) -> bool {
        self.hasher.verify_decoy(password)
    }

    pub fn issue_token(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        self.tokens.issue(subject, ttl)
    }

    /// Subject of a well-signed, unexpired token.
    pub fn validate_token(&self, token: &str) -> Result<String, VerificationError> {
        self.tokens.verify(token)
    }
}
