use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;

/// `GET /users/{id}`: public profile of any user, for an authenticated caller.
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let id = UserId::from_string(&raw_id).map_err(UserError::from)?;
    let user = state.user_service.get_user(&id).await?;

    Ok(ApiSuccess::new(StatusCode::OK, UserData::from(&user)))
}
