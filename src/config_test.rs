use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

const FIREBASE: [(&str, &str); 3] =
    [("FIREBASE_API_KEY", "key"), ("FIREBASE_AUTH_DOMAIN", "avesafe.firebaseapp.com"), ("FIREBASE_PROJECT_ID", "avesafe")];

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&FIREBASE)).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_dir, PathBuf::from("public"));
    assert_eq!(cfg.courses_path, PathBuf::from("public").join("courses.json"));
    assert_eq!(cfg.client.firebase.project_id, "avesafe");
    assert_eq!(cfg.client.firebase.app_id, None);
    assert!(cfg.client.admin_emails.is_empty());
}

#[test]
fn from_lookup_reads_overrides() {
    let mut pairs = FIREBASE.to_vec();
    pairs.extend([
        ("PORT", "8080"),
        ("SITE_DIR", "/srv/site"),
        ("FIREBASE_APP_ID", "1:42:web:abc"),
        ("ADMIN_EMAILS", "a@x.com, b@x.com"),
    ]);
    let cfg = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.courses_path, PathBuf::from("/srv/site/courses.json"));
    assert_eq!(cfg.client.firebase.app_id.as_deref(), Some("1:42:web:abc"));
    assert_eq!(cfg.client.admin_emails, vec!["a@x.com".to_owned(), "b@x.com".to_owned()]);
}

#[test]
fn explicit_courses_path_wins_over_site_dir() {
    let mut pairs = FIREBASE.to_vec();
    pairs.extend([("SITE_DIR", "site"), ("COURSES_PATH", "data/catalog.json")]);
    let cfg = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(cfg.courses_path, PathBuf::from("data/catalog.json"));
}

#[test]
fn missing_firebase_setting_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&FIREBASE[..2])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "FIREBASE_PROJECT_ID" });
}

#[test]
fn blank_required_value_counts_as_missing() {
    let mut pairs = FIREBASE.to_vec();
    pairs[0] = ("FIREBASE_API_KEY", "   ");
    let err = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "FIREBASE_API_KEY" });
}

#[test]
fn invalid_port_errors() {
    let mut pairs = FIREBASE.to_vec();
    pairs.push(("PORT", "eighty"));
    let err = ServerConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn parse_admin_emails_drops_blanks() {
    assert_eq!(parse_admin_emails(Some(" a@x.com ,, ,b@x.com,")), vec!["a@x.com".to_owned(), "b@x.com".to_owned()]);
    assert!(parse_admin_emails(None).is_empty());
}

// =============================================================================
// from_env — uses the process environment, so only the error path is checked.
// =============================================================================

#[test]
fn from_env_requires_firebase_settings() {
    if std::env::var("FIREBASE_API_KEY").is_ok() {
        return;
    }
    assert_eq!(ServerConfig::from_env().unwrap_err(), ConfigError::Missing { var: "FIREBASE_API_KEY" });
}
