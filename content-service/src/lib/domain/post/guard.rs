use std::sync::Arc;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::User;

/// Ownership check gating post mutation.
///
/// An absent post is reported as "not owned" rather than as an error; read paths handle
/// not-found on their own.
pub struct AccessGuard<PR>
where
    PR: PostRepository,
{
    repository: Arc<PR>,
}

impl<PR> AccessGuard<PR>
where
    PR: PostRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    /// True iff the post exists and `identity` created it.
    ///
    /// # Errors
    /// * `StoreTimeout` / `DatabaseError` - Record store failure
    pub async fn is_owner(&self, identity: &User, post_id: &PostId) -> Result<bool, PostError> {
        let owned = self
            .repository
            .find_by_id(post_id)
            .await?
            .is_some_and(|post| post.is_owned_by(identity.id));

        Ok(owned)
    }
}
