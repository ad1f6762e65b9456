use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Registration and lookup. Plaintext passwords stop here.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// `authenticator` is the same instance the credential verifier checks logins with.
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        let CreateUserCommand {
            username,
            email,
            password,
        } = command;

        let new_user = NewUser {
            password_hash: self.authenticator.hash_password(&password)?,
            username,
            email,
        };

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        match self.repository.find_by_id(id).await? {
            Some(user) => Ok(user),
            None => Err(UserError::NotFound(id.to_string())),
        }
    }
}
