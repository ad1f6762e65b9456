use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::guard::AccessGuard;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::User;

/// Domain service implementation for post operations.
///
/// Update and delete go through the [`AccessGuard`]; read, list and create only need an identity.
pub struct PostService<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
    guard: AccessGuard<PR>,
}

impl<PR> PostService<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self {
            guard: AccessGuard::new(Arc::clone(&repository)),
            repository,
        }
    }

    async fn authorize(&self, identity: &User, id: &PostId) -> Result<(), PostError> {
        if self.guard.is_owner(identity, id).await? {
            return Ok(());
        }

        tracing::warn!(user_id = %identity.id, post_id = %id, "Ownership check failed");
        Err(PostError::Forbidden {
            user_id: identity.id,
            post_id: *id,
        })
    }
}

#[async_trait]
impl<PR> PostServicePort for PostService<PR>
where
    PR: PostRepository,
{
    async fn create_post(
        &self,
        owner: &User,
        command: CreatePostCommand,
    ) -> Result<Post, PostError> {
        let post = NewPost {
            owner_id: owner.id,
            content: command.content,
        };

        let created = self.repository.create(post).await?;
        tracing::info!(post_id = %created.id, user_id = %owner.id, "Post created");

        Ok(created)
    }

    async fn list_posts(&self) -> Result<Vec<Post>, PostError> {
        self.repository.list_all().await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(*id))
    }

    async fn update_post(
        &self,
        identity: &User,
        id: &PostId,
        command: UpdatePostCommand,
    ) -> Result<Post, PostError> {
        self.authorize(identity, id).await?;
        let content = command.into_content()?;
        self.repository.update(id, content).await
    }

    async fn delete_post(&self, identity: &User, id: &PostId) -> Result<(), PostError> {
        self.authorize(identity, id).await?;
        self.repository.delete(id).await?;
        tracing::info!(post_id = %id, user_id = %identity.id, "Post deleted");

        Ok(())
    }
}
