use super::*;

fn session(email: Option<&str>) -> Session {
    Session { uid: "u1".to_owned(), display_name: None, email: email.map(str::to_owned), photo_url: None }
}

#[test]
fn session_log_line_reports_sign_out() {
    assert_eq!(session_log_line(None, &[]), "no user signed in");
}

#[test]
fn session_log_line_marks_admins() {
    let admins = vec!["Boss@AveSafe.org".to_owned()];
    assert_eq!(session_log_line(Some(&session(Some("boss@avesafe.org"))), &admins), "admin signed in: boss@avesafe.org");
    assert_eq!(session_log_line(Some(&session(Some("kid@avesafe.org"))), &admins), "user signed in: kid@avesafe.org");
}

#[test]
fn session_log_line_falls_back_to_uid() {
    assert_eq!(session_log_line(Some(&session(None)), &[]), "user signed in: u1");
}

#[test]
fn startup_error_wraps_both_sources() {
    let err: StartupError = ApiError::Unavailable.into();
    assert_eq!(err.to_string(), "client config: not available on server");
    let err: StartupError = IdentityError::Unavailable.into();
    assert_eq!(err.to_string(), "identity provider not available outside the browser");
}
