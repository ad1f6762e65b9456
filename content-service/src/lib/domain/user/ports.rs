use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// User operations offered to the inbound adapters.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Hash the password and store the account. Fails with `UsernameAlreadyExists` on a
    /// taken name.
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// `NotFound` when no such id exists.
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;
}

/// User storage. Absence is `Ok(None)`; only store failures are errors.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// The store assigns `id`, `created_at` and `is_active = true`.
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}
