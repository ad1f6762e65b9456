use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::user::errors::EmailError;
use crate::domain::user::errors::UsernameError;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::UserData;
use crate::inbound::http::router::AppState;

/// Open registration. No token required.
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegistrationRequest>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let command = CreateUserCommand::try_from(body)?;
    let user = state.user_service.create_user(command).await?;

    Ok(ApiSuccess::new(StatusCode::CREATED, UserData::from(&user)))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationRequest {
    username: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Username(#[from] UsernameError),

    #[error(transparent)]
    Email(#[from] EmailError),

    #[error("password must not be empty")]
    EmptyPassword,
}

impl TryFrom<RegistrationRequest> for CreateUserCommand {
    type Error = RegistrationError;

    fn try_from(request: RegistrationRequest) -> Result<Self, Self::Error> {
        if request.password.is_empty() {
            return Err(RegistrationError::EmptyPassword);
        }

        Ok(CreateUserCommand::new(
            Username::new(request.username)?,
            EmailAddress::new(request.email)?,
            request.password,
        ))
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
