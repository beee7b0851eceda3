use super::*;
use crate::net::types::Session;

fn signed_in() -> AuthState {
    AuthState::notified(Some(Session {
        uid: "u1".to_owned(),
        display_name: None,
        email: Some("u@x.com".to_owned()),
        photo_url: None,
    }))
}

#[test]
fn prompt_shown_for_login_action_when_signed_out() {
    assert!(show_login_prompt(Some("login"), &AuthState::notified(None)));
}

#[test]
fn prompt_hidden_without_action() {
    assert!(!show_login_prompt(None, &AuthState::notified(None)));
    assert!(!show_login_prompt(Some("browse"), &AuthState::notified(None)));
}

#[test]
fn prompt_hidden_when_signed_in_or_unresolved() {
    assert!(!show_login_prompt(Some("login"), &signed_in()));
    assert!(!show_login_prompt(Some("login"), &AuthState::default()));
}
