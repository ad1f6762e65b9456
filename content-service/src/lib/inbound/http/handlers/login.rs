use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiForm;
use crate::inbound::http::router::AppState;

/// OAuth2 password-flow style login.
///
/// Answers with the bare token object rather than the usual envelope, which is the shape
/// password-flow clients expect.
pub async fn login(
    State(state): State<AppState>,
    ApiForm(form): ApiForm<LoginForm>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .auth_service
        .authenticate(&form.username, &form.password)
        .await?;

    let token = state.auth_service.issue_token(&user)?;

    Ok(Json(TokenResponse {
        access_token: token.access_token,
        token_type: token.token_type.to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
