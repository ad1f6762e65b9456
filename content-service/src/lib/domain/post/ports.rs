use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::user::models::User;

/// Port for post domain service operations.
///
/// Every operation takes the already-resolved caller identity.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a post owned by `owner`.
    ///
    /// # Errors
    /// * `StoreTimeout` / `DatabaseError` - Record store failure
    async fn create_post(&self, owner: &User, command: CreatePostCommand)
        -> Result<Post, PostError>;

    /// List every post, oldest first.
    async fn list_posts(&self) -> Result<Vec<Post>, PostError>;

    /// Retrieve a post by id.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// Replace the text fields of a post owned by `identity`.
    ///
    /// # Errors
    /// * `Forbidden` - Caller does not own the post, or the post does not exist
    /// * `InvalidContent` - Caller owns the post but a field is rejected
    /// * `StoreTimeout` / `DatabaseError` - Record store failure
    async fn update_post(
        &self,
        identity: &User,
        id: &PostId,
        command: UpdatePostCommand,
    ) -> Result<Post, PostError>;

    /// Remove a post owned by `identity`.
    ///
    /// # Errors
    /// * `Forbidden` - Caller does not own the post, or the post does not exist
    /// * `StoreTimeout` / `DatabaseError` - Record store failure
    async fn delete_post(&self, identity: &User, id: &PostId) -> Result<(), PostError>;
}

/// Persistence operations for the post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post; the store assigns id, creation time and active flag.
    async fn create(&self, post: NewPost) -> Result<Post, PostError>;

    /// Retrieve post by identifier. `None` if absent.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve all posts ordered by id.
    async fn list_all(&self) -> Result<Vec<Post>, PostError>;

    /// Replace the text fields of an existing post. Owner and creation time are untouched.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn update(&self, id: &PostId, content: PostContent) -> Result<Post, PostError>;

    /// Remove a post.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    async fn delete(&self, id: &PostId) -> Result<(), PostError>;
}
