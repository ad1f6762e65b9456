use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}

/// Reasons a presented token is rejected.
///
/// Callers outside this crate collapse these into a single "unauthenticated" outcome;
/// the distinction is for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,
}
