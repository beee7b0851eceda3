use super::*;

#[test]
fn validate_email_login_trims_email() {
    assert_eq!(
        validate_email_login("  user@example.com  ", "hunter2"),
        Ok(("user@example.com".to_owned(), "hunter2".to_owned()))
    );
}

#[test]
fn validate_email_login_keeps_password_verbatim() {
    assert_eq!(
        validate_email_login("a@b.com", " spaced pass "),
        Ok(("a@b.com".to_owned(), " spaced pass ".to_owned()))
    );
}

#[test]
fn validate_email_login_requires_both_fields() {
    assert_eq!(validate_email_login("", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_email_login("a@b.com", "   "), Err("Enter both email and password."));
    assert_eq!(validate_email_login("   ", ""), Err("Enter both email and password."));
}

#[test]
fn sign_in_failed_message_names_method() {
    assert_eq!(sign_in_failed_message("Google"), "Google sign-in failed. Please try again.");
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn rejected_attempt_keeps_entered_credentials() {
    // Reactive runtime for signals (required under `sandboxed-arenas`).
    let owner = leptos::prelude::Owner::new();
    owner.set();
    let form = LoginForm::new();
    form.email.set("ada@x.com".to_owned());
    form.password.set("hunter2".to_owned());

    assert!(form.begin_attempt());
    form.reject("Email");

    assert_eq!(form.email.get_untracked(), "ada@x.com");
    assert_eq!(form.password.get_untracked(), "hunter2");
    assert_eq!(form.info.get_untracked(), "Email sign-in failed. Please try again.");
    assert!(!form.busy.get_untracked());
}

#[test]
fn begin_attempt_refuses_while_busy_and_clears_notice() {
    // Reactive runtime for signals (required under `sandboxed-arenas`).
    let owner = leptos::prelude::Owner::new();
    owner.set();
    let form = LoginForm::new();
    form.info.set("old notice".to_owned());

    assert!(form.begin_attempt());
    assert!(form.info.get_untracked().is_empty());
    assert!(!form.begin_attempt());

    form.finish();
    assert!(form.begin_attempt());
}
