use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_post::PostRequest;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::PostId;
use crate::domain::post::models::UpdatePostCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PostData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Replace all text fields of a post. Only its owner may do this; the fields are checked
/// after ownership.
pub async fn update_post(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(raw_id): Path<String>,
    ApiJson(body): ApiJson<PostRequest>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let post_id = PostId::from_string(&raw_id).map_err(PostError::from)?;
    let command = UpdatePostCommand::from(body);

    let post = state
        .post_service
        .update_post(&caller.user, &post_id, command)
        .await?;

    Ok(ApiSuccess::new(StatusCode::OK, PostData::from(&post)))
}
