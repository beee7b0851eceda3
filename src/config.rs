//! Host configuration parsed from environment variables.

use std::path::PathBuf;

use avesafe_client::net::types::{ClientConfig, FirebaseConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "public";
pub const CATALOG_FILE_NAME: &str = "courses.json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Static site served as the fallback for every unmatched path.
    pub site_dir: PathBuf,
    pub courses_path: PathBuf,
    /// Public settings handed to the browser at `/api/client-config`.
    pub client: ClientConfig,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `FIREBASE_API_KEY`, `FIREBASE_AUTH_DOMAIN`, `FIREBASE_PROJECT_ID`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `public`
    /// - `COURSES_PATH`: default `$SITE_DIR/courses.json`
    /// - `FIREBASE_APP_ID`
    /// - `ADMIN_EMAILS`: comma-separated allowlist
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let required = |var: &'static str| non_empty(var).ok_or(ConfigError::Missing { var });

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_dir = PathBuf::from(non_empty("SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.to_owned()));
        let courses_path = non_empty("COURSES_PATH").map_or_else(|| site_dir.join(CATALOG_FILE_NAME), PathBuf::from);

        let firebase = FirebaseConfig {
            api_key: required("FIREBASE_API_KEY")?,
            auth_domain: required("FIREBASE_AUTH_DOMAIN")?,
            project_id: required("FIREBASE_PROJECT_ID")?,
            app_id: non_empty("FIREBASE_APP_ID"),
        };
        let admin_emails = parse_admin_emails(lookup("ADMIN_EMAILS").as_deref());

        Ok(Self { port, site_dir, courses_path, client: ClientConfig { firebase, admin_emails } })
    }
}

/// Split a comma-separated allowlist, dropping blanks.
pub fn parse_admin_emails(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
