//! Public contact surface.
//!
//! Visitors submit a message with no authorization; the row is
//! write-only from the public side and nothing is read back to the
//! submitter.

use folio_types::{ContactDraft, ContactMessage, Draft, TableRecord};

use crate::error::StoreResult;
use crate::notify::ChangeHub;
use crate::table::TableClient;

/// Performs the single anonymous insert behind the public contact form.
pub async fn submit_contact(client: &TableClient, draft: &ContactDraft) -> StoreResult<()> {
    draft.validate()?;
    let body = serde_json::to_value(draft)?;
    client.insert_only(ContactMessage::TABLE, None, &body).await
}

/// Same as [`submit_contact`], announcing the new message on `hub` so
/// an open admin console refreshes its inbox.
pub async fn submit_contact_notifying(
    client: &TableClient,
    hub: &ChangeHub,
    draft: &ContactDraft,
) -> StoreResult<()> {
    submit_contact(client, draft).await?;
    hub.publish(folio_types::ChangeEvent::new(
        ContactMessage::TABLE,
        folio_types::ChangeOp::Insert,
    ));
    Ok(())
}
