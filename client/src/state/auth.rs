//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` from the root `App`. The identity
//! subscription installed there is the only writer; page guards, the header
//! and the dashboard only read it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Session;

/// Authentication state tracking the current session and whether the
/// provider has reported at least once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// False until the first state-change notification. While unresolved the
    /// UI shows neither login nor profile controls and guards do nothing.
    pub resolved: bool,
}

impl AuthState {
    /// State after a provider notification. Replaces the session wholesale.
    pub fn notified(session: Option<Session>) -> Self {
        Self { session, resolved: true }
    }

    /// Apply a provider notification in place. Returns whether the signed-in
    /// identity changed, in which case any UI built for the old one is stale.
    pub fn apply(&mut self, session: Option<Session>) -> bool {
        let changed = self.uid() != session.as_ref().map(|s| s.uid.as_str());
        *self = Self::notified(session);
        changed
    }

    pub fn uid(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.uid.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.email.as_deref())
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}
