use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity resolved from the bearer token, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
}

/// Middleware that resolves the bearer token to a user and adds it to request extensions.
///
/// Any token problem (missing, wrong scheme, forged, expired, unknown subject) gets the same
/// 401 answer. Record store failures keep their own status.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers()).ok_or_else(|| {
        tracing::debug!("Missing or non-bearer Authorization header");
        ApiError::from(AuthError::Unauthenticated)
    })?;

    let user = state.auth_service.resolve_identity(token).await?;

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

/// Token from an `Authorization: Bearer <token>` header. The scheme is case-insensitive.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
