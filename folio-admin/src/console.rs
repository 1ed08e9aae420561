//! Owner-gated mutation console.
//!
//! Order of checks on every mutation: owner session first (no store
//! call without one), then draft validation (no write with missing
//! required fields), then the store, whose own row-level authorization
//! still applies and surfaces as a denied store error. Successful
//! mutations publish change events so the live view refreshes within
//! one debounce cycle.

use serde_json::json;
use uuid::Uuid;

use folio_auth::Session;
use folio_store::{ChangeHub, Repository, TableClient};
use folio_types::{ContactMessage, Draft, TableRecord};

use crate::error::{AdminError, AdminResult};

pub struct AdminConsole {
    client: TableClient,
    hub: ChangeHub,
}

impl AdminConsole {
    pub fn new(client: TableClient, hub: ChangeHub) -> Self {
        Self { client, hub }
    }

    /// Resolves the owner session. Any authenticated session is the
    /// owner (the bootstrap gate allows at most one account), so
    /// absence is the only failure.
    fn owner(session: Option<&Session>) -> AdminResult<&Session> {
        session.ok_or(AdminError::Unauthorized)
    }

    fn repo<R: TableRecord>(&self) -> Repository<R> {
        Repository::with_hub(self.client.clone(), self.hub.clone())
    }

    /// Creates an entity from a validated draft.
    pub async fn create<D: Draft>(
        &self,
        session: Option<&Session>,
        draft: &D,
    ) -> AdminResult<D::Record> {
        let session = Self::owner(session)?;
        draft.validate()?;
        Ok(self
            .repo::<D::Record>()
            .create(&session.access_token, session.user_id, draft)
            .await?)
    }

    /// Writes a validated draft over the entity with `id`.
    pub async fn update<D: Draft>(
        &self,
        session: Option<&Session>,
        id: Uuid,
        draft: &D,
    ) -> AdminResult<D::Record> {
        let session = Self::owner(session)?;
        draft.validate()?;
        Ok(self
            .repo::<D::Record>()
            .update(&session.access_token, id, draft)
            .await?)
    }

    /// Deletes the entity with `id`. Irreversible and unconditional
    /// once authorized.
    pub async fn delete<R: TableRecord>(
        &self,
        session: Option<&Session>,
        id: Uuid,
    ) -> AdminResult<()> {
        let session = Self::owner(session)?;
        Ok(self.repo::<R>().delete(&session.access_token, id).await?)
    }

    /// Lists every entity of a type in its documented order, for the
    /// console's editing tables. Public collections need no session;
    /// this uses none so the store's read policy stays authoritative.
    pub async fn list<R: TableRecord>(&self) -> AdminResult<Vec<R>> {
        Ok(self.repo::<R>().list().await?)
    }

    // ── Contact inbox ────────────────────────────────────────────

    /// Lists contact messages, newest first. Owner only: visitors can
    /// write messages but never read them back.
    pub async fn contact_messages(
        &self,
        session: Option<&Session>,
    ) -> AdminResult<Vec<ContactMessage>> {
        let session = Self::owner(session)?;
        Ok(self
            .repo::<ContactMessage>()
            .list_as(Some(&session.access_token))
            .await?)
    }

    /// Flips the `read` flag, the only mutable field on a message.
    pub async fn mark_read(
        &self,
        session: Option<&Session>,
        id: Uuid,
        read: bool,
    ) -> AdminResult<ContactMessage> {
        let session = Self::owner(session)?;
        Ok(self
            .repo::<ContactMessage>()
            .update_fields(&session.access_token, id, json!({ "read": read }))
            .await?)
    }

    /// Deletes a contact message.
    pub async fn delete_message(&self, session: Option<&Session>, id: Uuid) -> AdminResult<()> {
        self.delete::<ContactMessage>(session, id).await
    }
}
