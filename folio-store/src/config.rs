//! Store adapter configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the table REST client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the table REST endpoint
    /// (e.g. "https://project.example.co/rest/v1").
    pub rest_url: String,

    /// Platform API key sent with every request. Doubles as the bearer
    /// token for anonymous (public read / contact submit) calls.
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(rest_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            rest_url: rest_url.into(),
            api_key: api_key.into(),
        }
    }
}
