use super::*;

#[test]
fn mirror_starts_empty_and_tracks_latest_session() {
    assert_eq!(mirrored_session(), None);

    let session = Session {
        uid: "u1".to_owned(),
        display_name: Some("Ada".to_owned()),
        email: Some("ada@x.com".to_owned()),
        photo_url: None,
    };
    mirror_session(Some(&session));
    assert_eq!(mirrored_session(), Some(session));
    assert_eq!(mirrored_email().as_deref(), Some("ada@x.com"));

    mirror_session(None);
    assert_eq!(mirrored_session(), None);
    assert_eq!(mirrored_email(), None);
}
