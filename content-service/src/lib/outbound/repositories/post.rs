use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use super::timed;
use super::QueryError;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::UserId;

pub struct PostgresPostRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[derive(FromRow)]
struct PostRow {
    id: i64,
    owner_id: i64,
    name: String,
    platforms: String,
    genre: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = PostError;

    fn try_from(r: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId(r.id),
            owner_id: UserId(r.owner_id),
            content: PostContent::new(r.name, r.platforms, r.genre)?,
            is_active: r.is_active,
            created_at: r.created_at,
        })
    }
}

impl From<QueryError> for PostError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::TimedOut(operation) => PostError::StoreTimeout(operation.to_string()),
            QueryError::Database(e) => PostError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let query = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (name, platforms, genre, owner_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, name, platforms, genre, is_active, created_at
            "#,
        )
        .bind(post.content.name())
        .bind(post.content.platforms())
        .bind(post.content.genre())
        .bind(post.owner_id.0)
        .fetch_one(&self.pool);

        timed(self.query_timeout, "posts.create", query)
            .await?
            .try_into()
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let query = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, owner_id, name, platforms, genre, is_active, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool);

        timed(self.query_timeout, "posts.find_by_id", query)
            .await?
            .map(Post::try_from)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostError> {
        let query = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, owner_id, name, platforms, genre, is_active, created_at
            FROM posts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool);

        timed(self.query_timeout, "posts.list_all", query)
            .await?
            .into_iter()
            .map(Post::try_from)
            .collect()
    }

    async fn update(&self, id: &PostId, content: PostContent) -> Result<Post, PostError> {
        let query = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts
            SET name = $2, platforms = $3, genre = $4
            WHERE id = $1
            RETURNING id, owner_id, name, platforms, genre, is_active, created_at
            "#,
        )
        .bind(id.0)
        .bind(content.name())
        .bind(content.platforms())
        .bind(content.genre())
        .fetch_optional(&self.pool);

        timed(self.query_timeout, "posts.update", query)
            .await?
            .ok_or(PostError::NotFound(*id))?
            .try_into()
    }

    async fn delete(&self, id: &PostId) -> Result<(), PostError> {
        let query = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool);

        let result = timed(self.query_timeout, "posts.delete", query).await?;

        if result.rows_affected() == 0 {
            return Err(PostError::NotFound(*id));
        }

        Ok(())
    }
}
