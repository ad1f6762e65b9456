use axum::extract::State;
use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PostData;
use crate::inbound::http::router::AppState;

/// Every post from every user. No pagination.
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<PostData>>, ApiError> {
    let posts = state.post_service.list_posts().await?;
    let data = posts.iter().map(PostData::from).collect();

    Ok(ApiSuccess::new(StatusCode::OK, data))
}
