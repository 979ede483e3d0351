//! End-to-end tests over HTTP: a real server on an ephemeral port, exercised
//! with reqwest. Tokens are passed explicitly rather than through a cookie
//! store so each step's inputs are visible in the test.

use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use clipstream_adapters::{
    ArgonCredentialHasher, HashingSettings, InMemoryAccountStore, JwtTokenIssuer, TokenSettings,
};
use clipstream_auth_service::{AppState, AuthService, SessionCookies};
use secrecy::Secret;

struct TestApp {
    address: String,
    client: reqwest::Client,
}

impl TestApp {
    async fn spawn() -> Self {
        Self::spawn_with_token_settings(test_token_settings()).await
    }

    async fn spawn_with_token_settings(token_settings: TokenSettings) -> Self {
        let state = AppState::new(
            InMemoryAccountStore::new(),
            // Light work factor; these tests exercise the flow, not argon2
            ArgonCredentialHasher::new(HashingSettings {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            }),
            JwtTokenIssuer::new(token_settings),
            SessionCookies::default(),
        );

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            AuthService::new(state)
                .run_standalone(listener, None)
                .await
                .expect("Server failed");
        });

        Self {
            address,
            client: reqwest::Client::new(),
        }
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/register", self.address))
            .json(&json!({
                "username": username,
                "email": email,
                "displayName": "Test Account",
                "password": password,
            }))
            .send()
            .await
            .expect("Register request failed")
    }

    async fn login(&self, identifier: &str, password: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/login", self.address))
            .json(&json!({ "identifier": identifier, "password": password }))
            .send()
            .await
            .expect("Login request failed")
    }

    async fn refresh(&self, refresh_token: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/refresh", self.address))
            .json(&json!({ "refreshToken": refresh_token }))
            .send()
            .await
            .expect("Refresh request failed")
    }

    async fn logout(&self, access_token: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/logout", self.address))
            .bearer_auth(access_token)
            .send()
            .await
            .expect("Logout request failed")
    }

    async fn change_password(
        &self,
        access_token: &str,
        old_password: &str,
        new_password: &str,
    ) -> reqwest::Response {
        self.client
            .post(format!("{}/change-password", self.address))
            .bearer_auth(access_token)
            .json(&json!({ "oldPassword": old_password, "newPassword": new_password }))
            .send()
            .await
            .expect("Change password request failed")
    }

    async fn me(&self, access_token: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/me", self.address))
            .bearer_auth(access_token)
            .send()
            .await
            .expect("Me request failed")
    }

    /// Register + login, returning (access, refresh).
    async fn registered_session(&self, username: &str, email: &str, password: &str) -> (String, String) {
        let response = self.register(username, email, password).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = self.login(username, password).await.json().await.unwrap();
        (
            body["accessToken"].as_str().unwrap().to_string(),
            body["refreshToken"].as_str().unwrap().to_string(),
        )
    }
}

fn test_token_settings() -> TokenSettings {
    TokenSettings {
        access_secret: Secret::from("test-access-secret".to_string()),
        access_ttl_seconds: 600,
        refresh_secret: Secret::from("test-refresh-secret".to_string()),
        refresh_ttl_seconds: 864_000,
    }
}

#[tokio::test]
async fn register_returns_created_profile_without_secrets() {
    let app = TestApp::spawn().await;

    let response = app.register("alice", "alice@example.com", "correct-horse").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["email"], "alice@example.com");
    assert!(body.get("password").is_none());
    assert!(body.get("passwordDigest").is_none());
    assert!(body.get("refreshToken").is_none());
}

#[tokio::test]
async fn duplicate_registration_conflicts() {
    let app = TestApp::spawn().await;

    app.register("alice", "alice@example.com", "correct-horse").await;
    let response = app.register("alice", "alice@example.com", "correct-horse").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_registration_input_is_a_bad_request() {
    let app = TestApp::spawn().await;

    // Username too short
    let response = app.register("al", "alice@example.com", "correct-horse").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Password too short
    let response = app.register("alice", "alice@example.com", "short").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_returns_tokens_and_session_cookies() {
    let app = TestApp::spawn().await;
    app.register("alice", "alice@example.com", "correct-horse").await;

    let response = app.login("alice", "correct-horse").await;
    assert_eq!(response.status(), StatusCode::OK);

    let cookies: Vec<_> = response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("accessToken=") && c.contains("HttpOnly")));
    assert!(cookies.iter().any(|c| c.starts_with("refreshToken=") && c.contains("HttpOnly")));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["accessToken"].as_str().is_some());
    assert!(body["refreshToken"].as_str().is_some());
}

#[tokio::test]
async fn login_by_email_works_too() {
    let app = TestApp::spawn().await;
    app.register("alice", "alice@example.com", "correct-horse").await;

    let response = app.login("alice@example.com", "correct-horse").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn wrong_password_and_unknown_account_answer_alike() {
    let app = TestApp::spawn().await;
    app.register("alice", "alice@example.com", "correct-horse").await;

    let wrong_password = app.login("alice", "battery-staple").await;
    let unknown = app.login("nobody", "battery-staple").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    let a: Value = wrong_password.json().await.unwrap();
    let b: Value = unknown.json().await.unwrap();
    assert_eq!(a["error"], b["error"]);
}

#[tokio::test]
async fn wrong_password_leaves_the_active_session_usable() {
    let app = TestApp::spawn().await;
    let (_, refresh) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    app.login("alice", "battery-staple").await;

    // The failed attempt must not have disturbed the stored token
    let response = app.refresh(&refresh).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn refresh_rotates_and_old_token_is_rejected() {
    let app = TestApp::spawn().await;
    let (_, first_refresh) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    let response = app.refresh(&first_refresh).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    let second_refresh = body["refreshToken"].as_str().unwrap().to_string();
    assert_ne!(first_refresh, second_refresh);

    // Replaying the rotated-out token must fail
    let replay = app.refresh(&first_refresh).await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);

    // The current token still works
    let current = app.refresh(&second_refresh).await;
    assert_eq!(current.status(), StatusCode::OK);
}

#[tokio::test]
async fn second_login_supersedes_the_first_session() {
    let app = TestApp::spawn().await;
    let (_, first_refresh) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    let body: Value = app.login("alice", "correct-horse").await.json().await.unwrap();
    let second_refresh = body["refreshToken"].as_str().unwrap().to_string();

    assert_eq!(app.refresh(&first_refresh).await.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.refresh(&second_refresh).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn logout_then_refresh_is_rejected() {
    let app = TestApp::spawn().await;
    let (access, refresh) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    assert_eq!(app.logout(&access).await.status(), StatusCode::OK);
    assert_eq!(app.refresh(&refresh).await.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_is_idempotent() {
    let app = TestApp::spawn().await;
    let (access, _) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    assert_eq!(app.logout(&access).await.status(), StatusCode::OK);
    // The access token is still cryptographically valid; a second logout is
    // a no-op, not an error
    assert_eq!(app.logout(&access).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn change_password_rejects_reusing_the_current_password() {
    let app = TestApp::spawn().await;
    let (access, _) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    let response = app.change_password(&access, "correct-horse", "correct-horse").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn change_password_requires_the_current_password() {
    let app = TestApp::spawn().await;
    let (access, refresh) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    let response = app.change_password(&access, "battery-staple", "new-password-1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Failed attempt left the session alone
    assert_eq!(app.refresh(&refresh).await.status(), StatusCode::OK);
}

#[tokio::test]
async fn change_password_revokes_the_session_and_old_password() {
    let app = TestApp::spawn().await;
    let (access, refresh) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    let response = app.change_password(&access, "correct-horse", "battery-staple").await;
    assert_eq!(response.status(), StatusCode::OK);

    // Old session is gone, old password no longer logs in
    assert_eq!(app.refresh(&refresh).await.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.login("alice", "correct-horse").await.status(), StatusCode::UNAUTHORIZED);

    // The new password does
    assert_eq!(app.login("alice", "battery-staple").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn me_returns_the_authenticated_profile() {
    let app = TestApp::spawn().await;
    let (access, _) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    let response = app.me(&access).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["username"], "alice");
    assert!(body.get("refreshToken").is_none());
}

#[tokio::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let app = TestApp::spawn().await;

    let missing = app
        .client
        .get(format!("{}/me", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let garbage = app.me("not-a-token").await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_access_token_is_rejected() {
    let app = TestApp::spawn_with_token_settings(TokenSettings {
        // Far enough in the past to clear decode leeway
        access_ttl_seconds: -600,
        ..test_token_settings()
    })
    .await;
    let (access, _) = app
        .registered_session("alice", "alice@example.com", "correct-horse")
        .await;

    assert_eq!(app.me(&access).await.status(), StatusCode::UNAUTHORIZED);
}
