//! HTTP client for the platform auth service.
//!
//! Covers the surface the core needs: sign-up, password sign-in, the
//! password-reset email flow, and the admin account count behind the
//! bootstrap gate.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::session::Session;

/// Auth service REST client.
pub struct AuthClient {
    client: Client,
    config: AuthConfig,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: Uuid,
    email: String,
}

#[derive(Deserialize)]
struct UserList {
    users: Vec<serde_json::Value>,
}

impl AuthClient {
    pub fn new(config: AuthConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { client, config }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.auth_url.trim_end_matches('/'))
    }

    /// Creates an account and returns its session. Callers go through
    /// [`crate::gate::OwnerGate::sign_up`], which enforces the
    /// single-owner rule first.
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<Session> {
        let resp = self
            .client
            .post(self.url("signup"))
            .header("apikey", &self.config.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = check(resp).await?;
        let token: TokenResponse = resp.json().await?;
        debug!(email = %token.user.email, "owner account created");
        Ok(session_from(token))
    }

    /// Password sign-in.
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session> {
        let resp = self
            .client
            .post(self.url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = check(resp).await?;
        let token: TokenResponse = resp.json().await?;
        Ok(session_from(token))
    }

    /// Sends the password-reset email; the link lands on
    /// `redirect_to`.
    pub async fn send_password_reset(&self, email: &str, redirect_to: &str) -> AuthResult<()> {
        let resp = self
            .client
            .post(self.url("recover"))
            .query(&[("redirect_to", redirect_to)])
            .header("apikey", &self.config.api_key)
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// Total number of accounts the auth service knows about. Needs the
    /// service key; only the bootstrap gate calls this.
    pub async fn admin_user_count(&self) -> AuthResult<u32> {
        let service_key = self
            .config
            .service_key
            .as_deref()
            .ok_or(AuthError::MissingServiceKey)?;
        let resp = self
            .client
            .get(self.url("admin/users"))
            .header("apikey", &self.config.api_key)
            .bearer_auth(service_key)
            .send()
            .await?;
        let resp = check(resp).await?;
        let list: UserList = resp.json().await?;
        Ok(list.users.len() as u32)
    }
}

fn session_from(token: TokenResponse) -> Session {
    Session {
        user_id: token.user.id,
        email: token.user.email,
        access_token: token.access_token,
    }
}

/// 400/401 from the auth service means the credentials were refused;
/// everything else non-2xx is a service failure.
async fn check(resp: Response) -> AuthResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    if status == StatusCode::BAD_REQUEST || status == StatusCode::UNAUTHORIZED {
        return Err(AuthError::Credentials(message));
    }
    Err(AuthError::Api {
        status: status.as_u16(),
        message,
    })
}
