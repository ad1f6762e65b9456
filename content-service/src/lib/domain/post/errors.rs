use thiserror::Error;

use crate::domain::post::models::PostId;
use crate::domain::user::models::UserId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid post id: {0}")]
    InvalidFormat(String),
}

/// Error for PostContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostContentError {
    #[error("Field '{field}' must not be empty")]
    Empty { field: &'static str },

    #[error("Field '{field}' too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid post content: {0}")]
    InvalidContent(#[from] PostContentError),

    #[error("Post not found: {0}")]
    NotFound(PostId),

    #[error("User {user_id} may not modify post {post_id}")]
    Forbidden { user_id: UserId, post_id: PostId },

    #[error("Record store timed out: {0}")]
    StoreTimeout(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
