//! Shared data shapes for the identity bridge, the catalog and the host.
//!
//! DESIGN
//! ======
//! These types cross two boundaries: JSON emitted by the identity bridge
//! module and JSON served by the host process. The host depends on this crate
//! so both sides agree on one schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The currently authenticated user as reported by the identity provider.
///
/// Replaced wholesale on every state-change notification and never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Provider-assigned user identifier.
    pub uid: String,
    /// Full display name, if the provider knows one.
    #[serde(default)]
    pub display_name: Option<String>,
    /// Account email; progress records are keyed by it.
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Session {
    /// First word of the display name, or `"User"` when there is none.
    pub fn first_name(&self) -> &str {
        self.display_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or("User")
    }

    /// Whether this session's email appears in `allowlist` (case-insensitive).
    pub fn is_admin(&self, allowlist: &[String]) -> bool {
        let Some(email) = self.email.as_deref() else {
            return false;
        };
        allowlist.iter().any(|entry| entry.eq_ignore_ascii_case(email))
    }
}

/// A course entry from the static catalog. Extra catalog fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
}

/// Firebase project settings needed to initialize the identity bridge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

/// Public runtime configuration served at `/api/client-config`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub firebase: FirebaseConfig,
    #[serde(default)]
    pub admin_emails: Vec<String>,
}
