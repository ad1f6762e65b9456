//! Credential primitives for the content service.
//!
//! Argon2id password hashes, HS256 bearer tokens with a fixed lifetime, and a
//! [`Clock`] seam so token expiry can be driven from tests. User lookup and
//! ownership rules live in the service; nothing here touches storage.
//!
//! ```
//! use std::sync::Arc;
//!
//! use auth::{Authenticator, SystemClock};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Arc::new(SystemClock));
//!
//! let stored = auth.hash_password("password123").unwrap();
//! assert!(auth.verify_password("password123", &stored));
//!
//! let token = auth.issue_token("alice", Duration::minutes(30)).unwrap();
//! assert_eq!(auth.validate_token(&token).unwrap(), "alice");
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

pub use authenticator::Authenticator;
pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenService;
pub use jwt::VerificationError;
pub use password::HashError;
pub use password::PasswordHasher;
