//! Argon2id password hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier as _;
use argon2::password_hash::SaltString;
use argon2::Argon2;
use thiserror::Error;

/// Well-formed Argon2id hash with the default cost parameters that no password matches.
///
/// Checking against it costs the same as checking a real stored hash.
const DECOY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$oxKAVT2EbvaAWTbgXNCnYg$HgGKJpzaWUHklyYKqOD0kMyhi/cI0qHdHekF/rZnvXo";

/// Argon2 refused to produce a hash.
#[derive(Debug, Clone, Error)]
#[error("could not hash password: {0}")]
pub struct HashError(String);

/// Stateless Argon2id hasher. Every call to [`PasswordHasher::hash`] draws a fresh salt,
/// so equal passwords never share a stored value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Produce a PHC string (`$argon2id$v=19$...`) for `password`.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let digest = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HashError(e.to_string()))?;

        Ok(digest.to_string())
    }

    /// `true` only when `stored` parses as a PHC string and matches `password`.
    pub fn verify(&self, password: &str, stored: &str) -> bool {
        PasswordHash::new(stored)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    /// Spend one full verification on a password that has no stored hash to check.
    /// Always `false`.
    pub fn verify_decoy(&self, password: &str) -> bool {
        self.verify(password, DECOY_HASH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_matches_only_its_password() {
        let hasher = PasswordHasher::new();
        let stored = hasher.hash("correct horse").unwrap();

        assert!(stored.starts_with("$argon2id$"));
        assert!(hasher.verify("correct horse", &stored));
        assert!(!hasher.verify("battery staple", &stored));
    }

    #[test]
    fn test_salt_differs_per_hash() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("pw123").unwrap();
        let second = hasher.hash("pw123").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("pw123", &first));
        assert!(hasher.verify("pw123", &second));
    }

    #[test]
    fn test_unparsable_stored_value_never_matches() {
        let hasher = PasswordHasher::new();

        for stored in ["", "plaintext", "$argon2id$v=19$m=19456,t=2,p=1$broken"] {
            assert!(!hasher.verify("plaintext", stored), "{:?}", stored);
        }
    }

    #[test]
    fn test_decoy_costs_the_same_as_a_real_hash() {
        let hasher = PasswordHasher::new();
        let real = hasher.hash("pw123").unwrap();

        let decoy = PasswordHash::new(DECOY_HASH).unwrap();
        let real = PasswordHash::new(&real).unwrap();
        assert_eq!(decoy.algorithm, real.algorithm);
        assert_eq!(decoy.params, real.params);

        assert!(!hasher.verify_decoy("pw123"));
        assert!(!hasher.verify_decoy(""));
    }

    #[test]
    fn test_empty_password_is_hashable() {
        let hasher = PasswordHasher::new();
        let stored = hasher.hash("").unwrap();

        assert!(hasher.verify("", &stored));
        assert!(!hasher.verify(" ", &stored));
    }
}
