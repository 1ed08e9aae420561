//! Owner bootstrap gate.
//!
//! Account creation is permitted exactly once, while zero accounts
//! exist; afterwards only sign-in and password reset are offered. There
//! is no path back: the core has no owner-deletion operation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::AuthClient;
use crate::error::{AuthError, AuthResult};
use crate::session::Session;

/// Outcome of the one-shot owner status check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerStatus {
    pub can_signup: bool,
    pub user_count: u32,
}

/// Decides whether the site is Uninitialized (signup open) or Owned
/// (signup closed), and whether a caller is the owner.
pub struct OwnerGate {
    auth: Arc<AuthClient>,
}

impl OwnerGate {
    pub fn new(auth: Arc<AuthClient>) -> Self {
        Self { auth }
    }

    /// Reports whether account creation is currently permitted.
    ///
    /// Fails closed: when the account count cannot be read, signup is
    /// reported closed rather than risking a second account.
    pub async fn check_owner_status(&self) -> OwnerStatus {
        match self.auth.admin_user_count().await {
            Ok(count) => OwnerStatus {
                can_signup: count == 0,
                user_count: count,
            },
            Err(e) => {
                warn!("owner status check failed, reporting signup closed: {e}");
                OwnerStatus {
                    can_signup: false,
                    user_count: 0,
                }
            }
        }
    }

    /// True iff a session is present. At most one account can ever
    /// exist, so any authenticated session belongs to the owner.
    pub fn is_owner(session: Option<&Session>) -> bool {
        session.is_some()
    }

    /// Creates the one owner account, re-checking the gate first. Once
    /// any account exists this refuses with [`AuthError::SignupClosed`]
    /// without touching the auth service's signup endpoint.
    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<Session> {
        let status = self.check_owner_status().await;
        if !status.can_signup {
            return Err(AuthError::SignupClosed);
        }
        self.auth.sign_up(email, password).await
    }
}
