use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("user id must be a positive integer, got {0:?}")]
pub struct UserIdError(pub String);

/// Rejected username.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("username must be {min} to {max} characters long, got {actual}")]
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("username may only use letters, digits, '_' and '-', found {0:?}")]
    Character(char),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{address:?} is not an email address: {reason}")]
pub struct EmailError {
    pub address: String,
    pub reason: String,
}

/// Everything the user operations can fail with.
///
/// Adapters translate their own failures into the last two variants.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error(transparent)]
    InvalidUserId(#[from] UserIdError),

    #[error(transparent)]
    InvalidUsername(#[from] UsernameError),

    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    Password(#[from] auth::HashError),

    #[error("no user with id {0}")]
    NotFound(String),

    #[error("username {0} is taken")]
    UsernameAlreadyExists(String),

    #[error("user store did not answer in time ({0})")]
    StoreTimeout(String),

    #[error("user store failure: {0}")]
    DatabaseError(String),
}
