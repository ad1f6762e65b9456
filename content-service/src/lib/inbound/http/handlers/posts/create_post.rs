use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::domain::post::errors::PostContentError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::PostContent;
use crate::domain::post::models::UpdatePostCommand;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PostData;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    ApiJson(body): ApiJson<PostRequest>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    let command = CreatePostCommand {
        content: body.try_into_content()?,
    };

    state
        .post_service
        .create_post(&caller.user, command)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

/// Text fields of a post, shared by create and update (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostRequest {
    name: String,
    platforms: String,
    genre: String,
}

impl PostRequest {
    pub(crate) fn try_into_content(self) -> Result<PostContent, PostContentError> {
        PostContent::new(self.name, self.platforms, self.genre)
    }
}

impl From<PostRequest> for UpdatePostCommand {
    fn from(request: PostRequest) -> Self {
        Self {
            name: request.name,
            platforms: request.platforms,
            genre: request.genre,
        }
    }
}

impl From<PostContentError> for ApiError {
    fn from(err: PostContentError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
