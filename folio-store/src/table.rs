//! Thin REST client for the platform's table store.
//!
//! Speaks the PostgREST dialect: equality filters (`col=eq.value`),
//! `order=` expressions, `limit=`, and `Prefer: return=representation`
//! on writes so mutations hand back the stored row. Auth is the
//! platform `apikey` header plus a bearer token: the caller's session
//! when one is passed, the anonymous key otherwise.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};

/// Query options for reads: ordering, equality filters, row limit.
#[derive(Debug, Clone, Default)]
pub struct Query {
    order: Option<String>,
    filters: Vec<(String, String)>,
    limit: Option<u32>,
}

impl Query {
    /// A query ordered by the given expression (`column.direction`,
    /// comma-separated for tiebreaks).
    pub fn ordered(expr: &str) -> Self {
        Self {
            order: Some(expr.to_string()),
            ..Self::default()
        }
    }

    /// Adds an equality filter on `column`.
    #[must_use]
    pub fn filter(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    /// Caps the number of returned rows.
    #[must_use]
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = Some(n);
        self
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        for (column, value) in &self.filters {
            params.push((column.clone(), format!("eq.{value}")));
        }
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// REST client shared by every repository.
#[derive(Clone)]
pub struct TableClient {
    client: Client,
    config: StoreConfig,
}

impl TableClient {
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self { client, config }
    }

    fn url(&self, table: &str) -> String {
        format!("{}/{}", self.config.rest_url.trim_end_matches('/'), table)
    }

    fn authed(&self, req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        req.header("apikey", &self.config.api_key)
            .bearer_auth(token.unwrap_or(&self.config.api_key))
    }

    /// Fetches rows matching the query. An empty table yields an empty
    /// vec, never an error.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        token: Option<&str>,
        query: &Query,
    ) -> StoreResult<Vec<T>> {
        let resp = self
            .authed(self.client.get(self.url(table)), token)
            .query(&query.params())
            .send()
            .await?;
        let resp = check(resp).await?;
        Ok(resp.json().await?)
    }

    /// Inserts a row and returns the stored representation.
    pub async fn insert<T: DeserializeOwned>(
        &self,
        table: &str,
        token: Option<&str>,
        body: &Value,
    ) -> StoreResult<T> {
        debug!(table, "insert");
        let resp = self
            .authed(self.client.post(self.url(table)), token)
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let resp = check(resp).await?;
        let mut rows: Vec<T> = resp.json().await?;
        rows.pop().ok_or(StoreError::NotFound)
    }

    /// Inserts a row without reading it back (`return=minimal`). Used by
    /// the public contact surface, whose callers are never allowed to
    /// read the table.
    pub async fn insert_only(
        &self,
        table: &str,
        token: Option<&str>,
        body: &Value,
    ) -> StoreResult<()> {
        debug!(table, "insert (no read-back)");
        let resp = self
            .authed(self.client.post(self.url(table)), token)
            .header("Prefer", "return=minimal")
            .json(body)
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }

    /// Patches the row with the given id, returning the updated
    /// representation.
    pub async fn update<T: DeserializeOwned>(
        &self,
        table: &str,
        token: Option<&str>,
        id: Uuid,
        body: &Value,
    ) -> StoreResult<T> {
        debug!(table, %id, "update");
        let resp = self
            .authed(self.client.patch(self.url(table)), token)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(body)
            .send()
            .await?;
        let resp = check(resp).await?;
        let mut rows: Vec<T> = resp.json().await?;
        rows.pop().ok_or(StoreError::NotFound)
    }

    /// Deletes the row with the given id.
    pub async fn delete(&self, table: &str, token: Option<&str>, id: Uuid) -> StoreResult<()> {
        debug!(table, %id, "delete");
        let resp = self
            .authed(self.client.delete(self.url(table)), token)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }
}

/// Maps non-success responses into the error taxonomy. 401/403 is the
/// store's access control saying no; everything else non-2xx is a plain
/// API failure.
async fn check(resp: Response) -> StoreResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(StoreError::Denied(message));
    }
    Err(StoreError::Api {
        status: status.as_u16(),
        message,
    })
}
