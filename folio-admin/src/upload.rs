//! Owner-only file upload relay.
//!
//! Stores a file in the platform's storage bucket under an
//! owner-namespaced key and hands back the public retrieval URL for
//! the caller to attach to an entity field (e.g.
//! `profile_image_url`). No URL is ever returned for a failed upload.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use folio_auth::Session;

use crate::error::UploadError;

/// Object storage configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base URL of the storage API
    /// (e.g. "https://project.example.co/storage/v1").
    pub storage_url: String,

    /// Platform API key sent with every request.
    pub api_key: String,

    /// Bucket that receives uploads.
    pub bucket: String,
}

/// REST client for the object storage service.
pub struct StorageClient {
    client: Client,
    config: StorageConfig,
}

impl StorageClient {
    pub fn new(config: StorageConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");
        Self { client, config }
    }

    fn base(&self) -> &str {
        self.config.storage_url.trim_end_matches('/')
    }

    /// Stores an object under `bucket/key`.
    pub async fn put_object(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
        token: &str,
    ) -> Result<(), UploadError> {
        let url = format!("{}/object/{}/{key}", self.base(), self.config.bucket);
        let resp = self
            .client
            .post(url)
            .header("apikey", &self.config.api_key)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(UploadError::Storage {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    /// Public retrieval URL for a stored object.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/object/public/{}/{key}", self.base(), self.config.bucket)
    }
}

/// Owner-gated upload producing a public URL.
pub struct UploadRelay {
    storage: StorageClient,
}

impl UploadRelay {
    pub fn new(storage: StorageClient) -> Self {
        Self { storage }
    }

    /// Uploads `bytes` for the signed-in owner and returns the public
    /// URL of the stored object.
    ///
    /// The key is namespaced by the owner's account id with a
    /// millisecond token, so repeated uploads of the same file never
    /// collide.
    pub async fn upload(
        &self,
        session: Option<&Session>,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, UploadError> {
        let session = session.ok_or(UploadError::AuthRequired)?;
        let key = object_key(session.user_id, file_name, Utc::now().timestamp_millis());
        self.storage
            .put_object(&key, bytes, content_type, &session.access_token)
            .await?;
        debug!(%key, "upload stored");
        Ok(self.storage.public_url(&key))
    }
}

/// `{account}/{millis}.{ext}`, extension taken from the original file
/// name. Files without one get a generic extension rather than a
/// trailing dot.
fn object_key(owner: Uuid, file_name: &str, millis: i64) -> String {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("bin");
    format!("{owner}/{millis}.{ext}")
}
