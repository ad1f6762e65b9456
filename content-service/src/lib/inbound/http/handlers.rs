use axum::extract::rejection::FormRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

pub mod health;
pub mod login;
pub mod posts;
pub mod users;

pub use health::health;
pub use login::login;
pub use posts::create_post;
pub use posts::delete_post;
pub use posts::get_post;
pub use posts::list_posts;
pub use posts::update_post;
pub use users::create_user;
pub use users::get_me;
pub use users::get_user;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// [`axum::Json`] whose rejections are answered in the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// [`axum::Form`] whose rejections are answered in the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Form), rejection(ApiError))]
pub struct ApiForm<T>(pub T);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    ServiceUnavailable(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    /// Authentication failure; answered with a bearer challenge.
    Unauthorized(String),
    /// Ownership failure. Shares the 401 status with authentication failures.
    NotOwner(String),
}

pub const INVALID_LOGIN_MESSAGE: &str = "Incorrect username or password";
pub const UNAUTHENTICATED_MESSAGE: &str = "Could not validate credentials";
pub const NOT_OWNER_MESSAGE: &str = "Not authorized to modify this post";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "Record store unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::NotOwner(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Unauthorized(msg) => {
                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(ApiResponseBody::new_error(StatusCode::UNAUTHORIZED, msg)),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                return response;
            }
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl ApiError {
    /// Body that could not be read or deserialized. Keeps axum's 422 for well-formed input
    /// with wrong or missing fields; everything else is a 400.
    fn rejected_body(status: StatusCode, message: String) -> Self {
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            ApiError::UnprocessableEntity(message)
        } else {
            ApiError::BadRequest(message)
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected_body(rejection.status(), rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::rejected_body(rejection.status(), rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUsername(_) | UserError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::StoreTimeout(_) => ApiError::ServiceUnavailable(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::NotFound(_) => ApiError::NotFound(err.to_string()),
            PostError::Forbidden { .. } => ApiError::NotOwner(NOT_OWNER_MESSAGE.to_string()),
            PostError::InvalidPostId(_) => ApiError::BadRequest(err.to_string()),
            PostError::InvalidContent(_) => ApiError::UnprocessableEntity(err.to_string()),
            PostError::StoreTimeout(_) => ApiError::ServiceUnavailable(err.to_string()),
            PostError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Unauthorized(INVALID_LOGIN_MESSAGE.to_string()),
            AuthError::Unauthenticated => ApiError::Unauthorized(UNAUTHENTICATED_MESSAGE.to_string()),
            AuthError::TokenIssuance(_) => ApiError::InternalServerError(err.to_string()),
            AuthError::Lookup(e) => ApiError::from(e),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public view of a user. The password hash is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: i64,
    pub name: String,
    pub platforms: String,
    pub genre: String,
    pub owner_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.0,
            name: post.content.name().to_string(),
            platforms: post.content.platforms().to_string(),
            genre: post.content.genre().to_string(),
            owner_id: post.owner_id.0,
            is_active: post.is_active,
            created_at: post.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::post::models::PostId;
    use crate::domain::user::models::UserId;

    #[test]
    fn test_unauthorized_carries_bearer_challenge() {
        let response = ApiError::from(AuthError::Unauthenticated).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_forbidden_is_reported_as_401() {
        let err = ApiError::from(PostError::Forbidden {
            user_id: UserId(2),
            post_id: PostId(1),
        });
        assert_eq!(err, ApiError::NotOwner(NOT_OWNER_MESSAGE.to_string()));
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unparsable_ids_are_bad_requests() {
        let user_id = UserId::from_string("bob").map_err(UserError::from).unwrap_err();
        assert!(matches!(ApiError::from(user_id), ApiError::BadRequest(_)));

        let post_id = PostId::from_string("0").map_err(PostError::from).unwrap_err();
        assert!(matches!(ApiError::from(post_id), ApiError::BadRequest(_)));
    }

    #[test]
    fn test_login_failures_share_one_message() {
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials),
            ApiError::Unauthorized(INVALID_LOGIN_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_store_errors_map_to_server_statuses() {
        assert_eq!(
            ApiError::from(PostError::StoreTimeout("posts.list_all".into()))
                .into_response()
                .status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::from(AuthError::Lookup(UserError::DatabaseError("boom".into())))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(UserError::UsernameAlreadyExists("alice".into()))
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
    }
}
