use super::*;
use crate::net::types::Session;

fn signed_in() -> AuthState {
    AuthState::notified(Some(Session {
        uid: "u1".to_owned(),
        display_name: Some("Alice".to_owned()),
        email: Some("alice@example.com".to_owned()),
        photo_url: None,
    }))
}

fn signed_out() -> AuthState {
    AuthState::notified(None)
}

#[test]
fn guards_wait_until_provider_reports() {
    let state = AuthState::default();
    assert_eq!(guard_decision(GuardedPage::Login, &state), GuardDecision::Wait);
    assert_eq!(guard_decision(GuardedPage::Dashboard, &state), GuardDecision::Wait);
}

#[test]
fn login_page_redirects_signed_in_users_to_dashboard() {
    assert_eq!(
        guard_decision(GuardedPage::Login, &signed_in()),
        GuardDecision::Redirect(DASHBOARD_PATH)
    );
}

#[test]
fn login_page_allows_signed_out_users() {
    assert_eq!(guard_decision(GuardedPage::Login, &signed_out()), GuardDecision::Allow);
}

#[test]
fn dashboard_redirects_signed_out_users_to_login_prompt() {
    assert_eq!(
        guard_decision(GuardedPage::Dashboard, &signed_out()),
        GuardDecision::Redirect("/?action=login")
    );
}

#[test]
fn dashboard_allows_signed_in_users() {
    assert_eq!(guard_decision(GuardedPage::Dashboard, &signed_in()), GuardDecision::Allow);
}
