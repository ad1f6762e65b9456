use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Externally visible authentication failures.
///
/// Why a token or password was rejected is logged, never carried here.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Incorrect username or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    Unauthenticated,

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error(transparent)]
    Lookup(#[from] UserError),
}
