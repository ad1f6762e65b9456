#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration as StdDuration;

use auth::Authenticator;
use auth::ManualClock;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use content_service::inbound::http::router::create_router;
use content_service::inbound::http::router::AppState;
use content_service::outbound::repositories::InMemoryStore;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_TTL_MINUTES: i64 = 30;

/// Test application that spawns a real server over the in-memory store.
///
/// Time only moves through `clock`, so token expiry is deterministic.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub clock: Arc<ManualClock>,
    pub store: InMemoryStore,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        ));
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET, clock.clone()));

        let store = InMemoryStore::new();
        let repository = Arc::new(store.clone());
        let state = AppState::from_repositories(
            Arc::clone(&repository),
            repository,
            authenticator,
            Duration::minutes(TOKEN_TTL_MINUTES),
        );

        let router = create_router(state, StdDuration::from_secs(30));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            clock,
            store,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(self.url(path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(self.url(path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.put(self.url(path)).bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(self.url(path)).bearer_auth(token)
    }

    /// POST /users
    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/users")
            .json(&json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// POST /token with form-encoded credentials
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user and return a valid access token for it.
    pub async fn signed_up(&self, username: &str, password: &str) -> String {
        let response = self.register(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }

    /// Create a post and return its id.
    pub async fn create_post(&self, token: &str, name: &str, platforms: &str, genre: &str) -> i64 {
        let response = self
            .post_authenticated("/posts", token)
            .json(&json!({ "name": name, "platforms": platforms, "genre": genre }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("post id missing")
    }
}
