use super::*;

#[test]
fn decode_session_reads_bridge_payload() {
    let raw = r#"{"uid":"u-1","display_name":"Ada Lovelace","email":"ada@x.com","photo_url":"https://img/a.png"}"#;
    let session = decode_session(raw).unwrap();
    assert_eq!(session.uid, "u-1");
    assert_eq!(session.first_name(), "Ada");
    assert_eq!(session.photo_url.as_deref(), Some("https://img/a.png"));
}

#[test]
fn decode_session_rejects_garbage() {
    assert!(matches!(decode_session("not json"), Err(IdentityError::Malformed(_))));
}

#[test]
fn decode_session_rejects_empty_uid() {
    let raw = r#"{"uid":"","email":"a@b.com"}"#;
    assert_eq!(decode_session(raw), Err(IdentityError::Malformed("empty uid".to_owned())));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn operations_are_unavailable_off_browser() {
    assert_eq!(init(&FirebaseConfig::default()), Err(IdentityError::Unavailable));
    assert_eq!(subscribe(|_| {}), Err(IdentityError::Unavailable));
}

#[test]
fn error_messages_name_the_failure() {
    assert_eq!(
        IdentityError::Rejected("auth/popup-closed-by-user".to_owned()).to_string(),
        "identity provider rejected the request: auth/popup-closed-by-user"
    );
}
