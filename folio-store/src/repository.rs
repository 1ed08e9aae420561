//! Generic typed repository over the table client.
//!
//! One implementation serves every entity: the entity contributes its
//! table name, ordering, and draft validation through [`TableRecord`]
//! and [`Draft`]; the repository contributes the CRUD mechanics,
//! timestamp/owner stamping, and change publication.

use std::marker::PhantomData;

use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use folio_types::{ChangeEvent, ChangeOp, Draft, TableRecord};

use crate::error::StoreResult;
use crate::notify::ChangeHub;
use crate::table::{Query, TableClient};

pub struct Repository<R: TableRecord> {
    client: TableClient,
    hub: Option<ChangeHub>,
    _marker: PhantomData<fn() -> R>,
}

impl<R: TableRecord> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            hub: self.hub.clone(),
            _marker: PhantomData,
        }
    }
}

impl<R: TableRecord> Repository<R> {
    pub fn new(client: TableClient) -> Self {
        Self {
            client,
            hub: None,
            _marker: PhantomData,
        }
    }

    /// A repository whose mutations publish change events to `hub`.
    pub fn with_hub(client: TableClient, hub: ChangeHub) -> Self {
        Self {
            client,
            hub: Some(hub),
            _marker: PhantomData,
        }
    }

    /// Lists every row in the entity's documented order.
    pub async fn list(&self) -> StoreResult<Vec<R>> {
        self.list_as(None).await
    }

    /// Lists with an explicit caller token, for tables visitors cannot
    /// read.
    pub async fn list_as(&self, token: Option<&str>) -> StoreResult<Vec<R>> {
        self.client
            .select(R::TABLE, token, &Query::ordered(R::ORDER_BY))
            .await
    }

    /// Lists rows matching an equality filter, in the documented order.
    pub async fn list_where(&self, column: &str, value: impl ToString) -> StoreResult<Vec<R>> {
        self.client
            .select(
                R::TABLE,
                None,
                &Query::ordered(R::ORDER_BY).filter(column, value),
            )
            .await
    }

    /// Fetches the first row in order, or `None` when the table is
    /// empty. Absence is not an error; only a store failure is.
    ///
    /// The ordering makes the pick deterministic when more rows exist
    /// than should (lowest `display_order`, earliest created).
    pub async fn get_one(&self) -> StoreResult<Option<R>> {
        let mut rows: Vec<R> = self
            .client
            .select(R::TABLE, None, &Query::ordered(R::ORDER_BY).limit(1))
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    /// Validates and inserts a draft, stamping the owner id and write
    /// timestamp. A validation failure aborts before any request.
    pub async fn create<D: Draft<Record = R>>(
        &self,
        token: &str,
        owner: Uuid,
        draft: &D,
    ) -> StoreResult<R> {
        draft.validate()?;
        let mut body = serde_json::to_value(draft)?;
        stamp(&mut body, Some(owner));
        let row = self.client.insert(R::TABLE, Some(token), &body).await?;
        self.publish(ChangeOp::Insert);
        Ok(row)
    }

    /// Validates and writes a full draft over the row with `id`,
    /// re-stamping `updated_at`.
    pub async fn update<D: Draft<Record = R>>(
        &self,
        token: &str,
        id: Uuid,
        draft: &D,
    ) -> StoreResult<R> {
        draft.validate()?;
        let mut body = serde_json::to_value(draft)?;
        stamp(&mut body, None);
        let row = self.client.update(R::TABLE, Some(token), id, &body).await?;
        self.publish(ChangeOp::Update);
        Ok(row)
    }

    /// Patches explicit fields without draft validation or stamping.
    /// For single-flag mutations like a contact message's `read` marker
    /// on tables that carry no `updated_at`.
    pub async fn update_fields(&self, token: &str, id: Uuid, fields: Value) -> StoreResult<R> {
        let row = self
            .client
            .update(R::TABLE, Some(token), id, &fields)
            .await?;
        self.publish(ChangeOp::Update);
        Ok(row)
    }

    /// Deletes the row with `id`. Irreversible once the store accepts
    /// it.
    pub async fn delete(&self, token: &str, id: Uuid) -> StoreResult<()> {
        self.client.delete(R::TABLE, Some(token), id).await?;
        self.publish(ChangeOp::Delete);
        Ok(())
    }

    fn publish(&self, op: ChangeOp) {
        if let Some(hub) = &self.hub {
            hub.publish(ChangeEvent::new(R::TABLE, op));
        }
    }
}

/// Stamps the adapter-maintained columns into a draft's JSON body.
fn stamp(body: &mut Value, owner: Option<Uuid>) {
    if let Some(obj) = body.as_object_mut() {
        obj.insert(
            "updated_at".to_string(),
            Value::String(Utc::now().to_rfc3339()),
        );
        if let Some(owner) = owner {
            obj.insert("user_id".to_string(), Value::String(owner.to_string()));
        }
    }
}
