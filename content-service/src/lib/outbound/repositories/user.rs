use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use super::timed;
use super::QueryError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";

pub struct PostgresUserRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(r: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId(r.id),
            username: Username::new(r.username)?,
            email: EmailAddress::new(r.email)?,
            password_hash: r.password_hash,
            is_active: r.is_active,
            created_at: r.created_at,
        })
    }
}

impl From<QueryError> for UserError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::TimedOut(operation) => UserError::StoreTimeout(operation.to_string()),
            QueryError::Database(e) => UserError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, is_active, created_at
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool);

        let row = timed(self.query_timeout, "users.create", query)
            .await
            .map_err(|e| match e {
                QueryError::Database(ref db)
                    if db.as_database_error().is_some_and(|db_err| {
                        db_err.is_unique_violation()
                            && db_err.constraint() == Some(USERNAME_UNIQUE_CONSTRAINT)
                    }) =>
                {
                    UserError::UsernameAlreadyExists(user.username.as_str().to_string())
                }
                other => UserError::from(other),
            })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool);

        timed(self.query_timeout, "users.find_by_id", query)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let query = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool);

        timed(self.query_timeout, "users.find_by_username", query)
            .await?
            .map(User::try_from)
            .transpose()
    }
}
