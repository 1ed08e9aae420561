//! Auth service configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the auth service client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the auth endpoint
    /// (e.g. "https://project.example.co/auth/v1").
    pub auth_url: String,

    /// Platform API key sent with every request.
    pub api_key: String,

    /// Elevated key for the account-count admin query. Absent in
    /// deployments that never run the owner status check locally.
    pub service_key: Option<String>,
}

impl AuthConfig {
    pub fn new(auth_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            auth_url: auth_url.into(),
            api_key: api_key.into(),
            service_key: None,
        }
    }

    #[must_use]
    pub fn with_service_key(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(key.into());
        self
    }
}
