use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_post;
use super::handlers::create_user;
use super::handlers::delete_post;
use super::handlers::get_me;
use super::handlers::get_post;
use super::handlers::get_user;
use super::handlers::health;
use super::handlers::list_posts;
use super::handlers::login;
use super::handlers::update_post;
use super::middleware::authenticate as auth_middleware;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::service::CredentialVerifier;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::post::service::PostService;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::domain::user::service::UserService;

/// Shared, read-only request context.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub post_service: Arc<dyn PostServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

impl AppState {
    /// Wire the domain services over a pair of repositories.
    pub fn from_repositories<UR, PR>(
        user_repository: Arc<UR>,
        post_repository: Arc<PR>,
        authenticator: Arc<Authenticator>,
        token_ttl: chrono::Duration,
    ) -> Self
    where
        UR: UserRepository,
        PR: PostRepository,
    {
        Self {
            user_service: Arc::new(UserService::new(
                Arc::clone(&user_repository),
                Arc::clone(&authenticator),
            )),
            post_service: Arc::new(PostService::new(post_repository)),
            auth_service: Arc::new(CredentialVerifier::new(
                authenticator,
                user_repository,
                token_ttl,
            )),
        }
    }
}

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/token", post(login))
        .route("/users", post(create_user));

    let protected_routes = Router::new()
        .route("/users/me", get(get_me))
        .route("/users/:user_id", get(get_user))
        .route("/posts", post(create_post).get(list_posts))
        .route(
            "/posts/:post_id",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
