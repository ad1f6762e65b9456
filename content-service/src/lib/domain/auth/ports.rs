use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AccessToken;
use crate::domain::user::models::User;

/// Port for credential verification and identity resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check a username/password pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password (indistinguishable)
    /// * `Lookup` - Record store failure
    async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError>;

    /// Issue a bearer token whose subject is the user's username.
    ///
    /// # Errors
    /// * `TokenIssuance` - Signing failed
    fn issue_token(&self, user: &User) -> Result<AccessToken, AuthError>;

    /// Resolve a presented bearer token to the user it was issued for.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token is malformed, forged or expired, or its user no longer exists
    /// * `Lookup` - Record store failure
    async fn resolve_identity(&self, token: &str) -> Result<User, AuthError>;
}
