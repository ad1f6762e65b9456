use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

/// Credential verifier: authenticates logins and resolves bearer tokens to users.
pub struct CredentialVerifier<UR>
where
    UR: UserRepository,
{
    authenticator: Arc<Authenticator>,
    repository: Arc<UR>,
    token_ttl: Duration,
}

impl<UR> CredentialVerifier<UR>
where
    UR: UserRepository,
{
    /// # Arguments
    /// * `authenticator` - Shared password and token primitives
    /// * `repository` - User lookup by username
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(authenticator: Arc<Authenticator>, repository: Arc<UR>, token_ttl: Duration) -> Self {
        Self {
            authenticator,
            repository,
            token_ttl,
        }
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, AuthError> {
        let Ok(username) = Username::new(username.to_string()) else {
            return Ok(None);
        };

        Ok(self.repository.find_by_username(&username).await?)
    }
}

#[async_trait]
impl<UR> AuthServicePort for CredentialVerifier<UR>
where
    UR: UserRepository,
{
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let Some(user) = self.find_user(username).await? else {
            // Same Argon2 cost as a wrong password, so timing does not reveal unknown names.
            self.authenticator.verify_decoy(password);
            tracing::info!(username = %username, "Login rejected: unknown user");
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .authenticator
            .verify_password(password, &user.password_hash)
        {
            tracing::info!(username = %username, "Login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(username = %username, user_id = %user.id, "Login succeeded");
        Ok(user)
    }

    fn issue_token(&self, user: &User) -> Result<AccessToken, AuthError> {
        self.authenticator
            .issue_token(user.username.as_str(), self.token_ttl)
            .map(AccessToken::bearer)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))
    }

    async fn resolve_identity(&self, token: &str) -> Result<User, AuthError> {
        let subject = self.authenticator.validate_token(token).map_err(|reason| {
            tracing::debug!(reason = %reason, "Token verification failed");
            AuthError::Unauthenticated
        })?;

        match self.find_user(&subject).await? {
            Some(user) => Ok(user),
            None => {
                tracing::warn!(subject = %subject, "Token subject no longer exists");
                Err(AuthError::Unauthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::ManualClock;
    use chrono::TimeZone;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::errors::UserError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::UserId;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
        }
    }

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn alice(password_hash: String) -> User {
        User {
            id: UserId(1),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Repository that only knows alice, whose password is "pw123".
    fn repository_with_alice(authenticator: &Authenticator) -> MockTestUserRepository {
        let stored = alice(authenticator.hash_password("pw123").unwrap());
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .returning(move |username| {
                Ok((username.as_str() == "alice").then(|| stored.clone()))
            });
        repository
    }

    fn verifier(clock: Arc<ManualClock>) -> CredentialVerifier<MockTestUserRepository> {
        let authenticator = Arc::new(Authenticator::new(SECRET, clock));
        let repository = repository_with_alice(&authenticator);
        CredentialVerifier::new(authenticator, Arc::new(repository), Duration::minutes(30))
    }

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        ))
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let verifier = verifier(clock());

        let user = verifier.authenticate("alice", "pw123").await.unwrap();
        assert_eq!(user.id, UserId(1));
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let verifier = verifier(clock());

        let wrong_password = verifier.authenticate("alice", "nope").await.unwrap_err();
        let unknown_user = verifier.authenticate("mallory", "pw123").await.unwrap_err();
        let unparsable_user = verifier.authenticate("a b", "pw123").await.unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert!(matches!(unparsable_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_unknown_user_pays_for_a_password_check() {
        let verifier = verifier(clock());

        let started = std::time::Instant::now();
        let _ = verifier.authenticate("alice", "wrong").await;
        let wrong_password = started.elapsed();

        let started = std::time::Instant::now();
        let _ = verifier.authenticate("mallory", "wrong").await;
        let unknown_user = started.elapsed();

        let started = std::time::Instant::now();
        let _ = verifier.authenticate("a b", "wrong").await;
        let unparsable_user = started.elapsed();

        assert!(
            unknown_user * 4 >= wrong_password,
            "unknown user took {:?}, wrong password took {:?}",
            unknown_user,
            wrong_password
        );
        assert!(
            unparsable_user * 4 >= wrong_password,
            "unparsable user took {:?}, wrong password took {:?}",
            unparsable_user,
            wrong_password
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_not_invalid_credentials() {
        let authenticator = Arc::new(Authenticator::new(SECRET, clock()));
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .returning(|_| Err(UserError::StoreTimeout("find_by_username".to_string())));
        let verifier =
            CredentialVerifier::new(authenticator, Arc::new(repository), Duration::minutes(30));

        let result = verifier.authenticate("alice", "pw123").await;
        assert!(matches!(
            result,
            Err(AuthError::Lookup(UserError::StoreTimeout(_)))
        ));
    }

    #[tokio::test]
    async fn test_issued_token_resolves_to_user() {
        let verifier = verifier(clock());

        let user = verifier.authenticate("alice", "pw123").await.unwrap();
        let token = verifier.issue_token(&user).unwrap();
        assert_eq!(token.token_type, "bearer");

        let resolved = verifier.resolve_identity(&token.access_token).await.unwrap();
        assert_eq!(resolved.id, user.id);
    }

    #[tokio::test]
    async fn test_expired_token_is_unauthenticated() {
        let clock = clock();
        let verifier = verifier(clock.clone());

        let user = verifier.authenticate("alice", "pw123").await.unwrap();
        let token = verifier.issue_token(&user).unwrap();

        clock.advance(Duration::minutes(29));
        assert!(verifier.resolve_identity(&token.access_token).await.is_ok());

        clock.advance(Duration::minutes(1));
        let result = verifier.resolve_identity(&token.access_token).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_garbage_token_is_unauthenticated() {
        let verifier = verifier(clock());

        let result = verifier.resolve_identity("not.a.token").await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_token_for_vanished_user_is_unauthenticated() {
        let clock = clock();
        let verifier = verifier(clock.clone());

        // Signed with the right secret, but nobody called "ghost" exists.
        let authenticator = Authenticator::new(SECRET, clock);
        let token = authenticator
            .issue_token("ghost", Duration::minutes(30))
            .unwrap();

        let result = verifier.resolve_identity(&token).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_token_from_other_secret_is_unauthenticated() {
        let verifier = verifier(clock());

        let foreign = Authenticator::new(b"another_secret_key_of_32_bytes!!", clock());
        let token = foreign.issue_token("alice", Duration::minutes(30)).unwrap();

        let result = verifier.resolve_identity(&token).await;
        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }
}
