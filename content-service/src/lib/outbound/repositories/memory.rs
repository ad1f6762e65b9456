use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    posts: BTreeMap<i64, Post>,
    user_sequence: i64,
    post_sequence: i64,
}

/// Process-local record store implementing both repository ports.
///
/// Same rules as the Postgres schema: sequential ids from 1, unique usernames, posts must
/// reference an existing user. Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }

        tables.user_sequence += 1;
        let created = User {
            id: UserId(tables.user_sequence),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            is_active: true,
            created_at: Utc::now(),
        };
        tables.users.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.tables.read().await.users.get(&id.0).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let mut tables = self.tables.write().await;

        if !tables.users.contains_key(&post.owner_id.0) {
            return Err(PostError::DatabaseError(format!(
                "owner {} does not exist",
                post.owner_id
            )));
        }

        tables.post_sequence += 1;
        let created = Post {
            id: PostId(tables.post_sequence),
            owner_id: post.owner_id,
            content: post.content,
            is_active: true,
            created_at: Utc::now(),
        };
        tables.posts.insert(created.id.0, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        Ok(self.tables.read().await.posts.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        Ok(self.tables.read().await.posts.values().cloned().collect())
    }

    async fn update(&self, id: &PostId, content: PostContent) -> Result<Post, PostError> {
        let mut tables = self.tables.write().await;
        let post = tables.posts.get_mut(&id.0).ok_or(PostError::NotFound(*id))?;
        post.content = content;

        Ok(post.clone())
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        self.tables
            .write()
            .await
            .posts
            .remove(&id.0)
            .map(|_| ())
            .ok_or(PostError::NotFound(*id))
    }
}
