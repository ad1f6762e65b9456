use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::post::errors::PostContentError;
use crate::domain::post::errors::PostIdError;
use crate::domain::user::models::UserId;

/// Post aggregate entity. `owner_id` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub owner_id: UserId,
    pub content: PostContent,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// Post unique identifier, assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub i64);

impl PostId {
    /// Parse a post ID from a path segment.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(PostId(id)),
            Ok(id) => Err(PostIdError::InvalidFormat(format!("{} is not positive", id))),
            Err(e) => Err(PostIdError::InvalidFormat(e.to_string())),
        }
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The descriptive text fields of a post.
///
/// Always replaced as a whole on update. Each field is required and at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    name: String,
    platforms: String,
    genre: String,
}

impl PostContent {
    const MAX_LENGTH: usize = 255;

    /// Create validated post content.
    ///
    /// # Errors
    /// * `Empty` - A field is blank
    /// * `TooLong` - A field exceeds 255 characters
    pub fn new(name: String, platforms: String, genre: String) -> Result<Self, PostContentError> {
        Ok(Self {
            name: Self::validated("name", name)?,
            platforms: Self::validated("platforms", platforms)?,
            genre: Self::validated("genre", genre)?,
        })
    }

    fn validated(field: &'static str, value: String) -> Result<String, PostContentError> {
        let length = value.chars().count();
        if value.trim().is_empty() {
            Err(PostContentError::Empty { field })
        } else if length > Self::MAX_LENGTH {
            Err(PostContentError::TooLong {
                field,
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(value)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn platforms(&self) -> &str {
        &self.platforms
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }
}

/// Post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub owner_id: UserId,
    pub content: PostContent,
}

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub content: PostContent,
}

/// Full replacement of a post's text fields.
///
/// Carries the raw fields: they are validated only after ownership is settled, so a
/// stranger learns nothing about the post from validation errors.
#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    pub name: String,
    pub platforms: String,
    pub genre: String,
}

impl UpdatePostCommand {
    pub fn into_content(self) -> Result<PostContent, PostContentError> {
        PostContent::new(self.name, self.platforms, self.genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(name: &str) -> Result<PostContent, PostContentError> {
        PostContent::new(name.to_string(), "PC".to_string(), "RPG".to_string())
    }

    #[test]
    fn test_post_content_valid() {
        let content = content("Elden Ring").unwrap();
        assert_eq!(content.name(), "Elden Ring");
        assert_eq!(content.platforms(), "PC");
        assert_eq!(content.genre(), "RPG");
    }

    #[test]
    fn test_post_content_rejects_blank_fields() {
        assert_eq!(
            content("   ").unwrap_err(),
            PostContentError::Empty { field: "name" }
        );
        assert_eq!(
            PostContent::new("Doom".into(), "PC".into(), "".into()).unwrap_err(),
            PostContentError::Empty { field: "genre" }
        );
    }

    #[test]
    fn test_post_content_length_limit() {
        assert!(content(&"x".repeat(255)).is_ok());
        assert_eq!(
            content(&"x".repeat(256)).unwrap_err(),
            PostContentError::TooLong {
                field: "name",
                max: 255,
                actual: 256
            }
        );
    }

    #[test]
    fn test_post_id_from_string() {
        assert_eq!(PostId::from_string("3"), Ok(PostId(3)));
        assert!(PostId::from_string("0").is_err());
        assert!(PostId::from_string("three").is_err());
    }

    #[test]
    fn test_is_owned_by() {
        let post = Post {
            id: PostId(1),
            owner_id: UserId(1),
            content: content("Doom").unwrap(),
            is_active: true,
            created_at: Utc::now(),
        };
        assert!(post.is_owned_by(UserId(1)));
        assert!(!post.is_owned_by(UserId(2)));
    }
}
