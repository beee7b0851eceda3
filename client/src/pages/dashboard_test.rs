use super::*;

fn catalog() -> Vec<Course> {
    vec![
        Course { id: "html".to_owned(), title: "HTML".to_owned() },
        Course { id: "css".to_owned(), title: "CSS".to_owned() },
    ]
}

fn store(raw: &str) -> ProgressStore {
    ProgressStore::parse(Some(raw))
}

// =============================================================
// build_dashboard
// =============================================================

#[test]
fn mixed_progress_yields_two_rows_and_one_certificate() {
    let store = store(r#"{"u@x.com":{"html":{"progress":100},"css":{"progress":40}}}"#);
    let view = build_dashboard(&catalog(), &store, Some("u@x.com"));

    let ProgressSection::Rows(rows) = &view.progress else {
        panic!("expected progress rows, got {:?}", view.progress);
    };
    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].percent, rows[0].completed), (100, true));
    assert_eq!(rows[0].label(), "Completed");
    assert_eq!((rows[1].percent, rows[1].completed), (40, false));
    assert_eq!(rows[1].label(), "40% Complete");

    assert_eq!(
        view.certificates,
        CertificateSection::Earned(vec![CertificateEntry { course_id: "html".to_owned(), title: "HTML".to_owned() }])
    );
    assert_eq!(view.certificate_count(), 1);
}

#[test]
fn user_without_entries_gets_empty_state_in_both_sections() {
    let store = store(r#"{"someone@else.com":{"html":{"progress":100}}}"#);
    let view = build_dashboard(&catalog(), &store, Some("u@x.com"));
    assert_eq!(view.progress, ProgressSection::NotStarted);
    assert_eq!(view.certificates, CertificateSection::NotStarted);
    assert_eq!(view.certificate_count(), 0);
}

#[test]
fn malformed_storage_behaves_as_empty() {
    let view = build_dashboard(&catalog(), &store("{{{{"), Some("u@x.com"));
    assert_eq!(view.progress, ProgressSection::NotStarted);
    assert_eq!(view.certificate_count(), 0);
}

#[test]
fn session_without_email_is_not_started() {
    let store = store(r#"{"u@x.com":{"html":{"progress":100}}}"#);
    let view = build_dashboard(&catalog(), &store, None);
    assert_eq!(view.progress, ProgressSection::NotStarted);
}

#[test]
fn started_but_nothing_completed_shows_none_earned() {
    let store = store(r#"{"u@x.com":{"css":{"progress":99}}}"#);
    let view = build_dashboard(&catalog(), &store, Some("u@x.com"));
    assert_eq!(view.certificates, CertificateSection::NoneEarned);
    let ProgressSection::Rows(rows) = view.progress else {
        panic!("expected rows");
    };
    // Catalog courses without an entry render at 0%.
    assert_eq!(rows[0].percent, 0);
    assert_eq!(rows[1].percent, 99);
}

#[test]
fn values_over_one_hundred_earn_no_certificate() {
    let store = store(r#"{"u@x.com":{"html":{"progress":150},"css":{"progress":100.5}}}"#);
    let view = build_dashboard(&catalog(), &store, Some("u@x.com"));
    assert_eq!(view.certificates, CertificateSection::NoneEarned);
    let ProgressSection::Rows(rows) = view.progress else {
        panic!("expected rows");
    };
    assert_eq!((rows[0].percent, rows[0].completed), (100, false));
    assert_eq!(rows[0].label(), "100% Complete");
    assert_eq!((rows[1].percent, rows[1].completed), (100, false));
}

#[test]
fn rendering_is_pure() {
    let store = store(r#"{"u@x.com":{"html":{"progress":100}}}"#);
    let before = store.clone();
    let first = build_dashboard(&catalog(), &store, Some("u@x.com"));
    let second = build_dashboard(&catalog(), &store, Some("u@x.com"));
    assert_eq!(first, second);
    assert_eq!(store, before);
}

#[test]
fn certificate_links_carry_course_id() {
    let entry = CertificateEntry { course_id: "css".to_owned(), title: "CSS".to_owned() };
    assert_eq!(entry.href(), "/certificate?course=css");
}

// =============================================================
// welcome_view
// =============================================================

#[test]
fn welcome_view_requires_display_name() {
    let session = Session { uid: "u".to_owned(), display_name: None, email: Some("u@x.com".to_owned()), photo_url: None };
    assert_eq!(welcome_view(&session), None);
}

#[test]
fn welcome_view_falls_back_to_default_avatar() {
    let session = Session {
        uid: "u".to_owned(),
        display_name: Some("Ada Lovelace".to_owned()),
        email: Some("ada@x.com".to_owned()),
        photo_url: None,
    };
    let view = welcome_view(&session).unwrap();
    assert_eq!(view.photo_url, DEFAULT_AVATAR_URL);
    assert_eq!(view.display_name, "Ada Lovelace");
    assert_eq!(view.email, "ada@x.com");
}
