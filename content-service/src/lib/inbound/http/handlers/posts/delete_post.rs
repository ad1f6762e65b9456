use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::PostId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Owner-only. Answers 204 with no body.
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let post_id = PostId::from_string(&raw_id).map_err(PostError::from)?;
    state.post_service.delete_post(&caller.user, &post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
