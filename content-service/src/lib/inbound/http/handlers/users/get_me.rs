use axum::http::StatusCode;
use axum::Extension;

use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::middleware::AuthenticatedUser;

/// The caller's own record, as resolved from the bearer token.
pub async fn get_me(Extension(caller): Extension<AuthenticatedUser>) -> ApiSuccess<UserData> {
    ApiSuccess::new(StatusCode::OK, (&caller.user).into())
}
