//! Page guard: which routes require a session and where to send visitors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. The decision is
//! a pure function of the page and the auth state; `install_page_guard` wires
//! it to an effect that re-evaluates once per state-change notification.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PROMPT_PATH: &str = "/?action=login";

/// Pages with guard rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardedPage {
    /// Signed-in visitors are sent to the dashboard.
    Login,
    /// Signed-out visitors are sent to the login-prompting entry page.
    Dashboard,
}

/// Outcome of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The provider has not reported yet; render a placeholder and wait.
    Wait,
    /// Render the page.
    Allow,
    /// Replace the current history entry with this path.
    Redirect(&'static str),
}

/// Decide what `page` should do for `state`.
pub fn guard_decision(page: GuardedPage, state: &AuthState) -> GuardDecision {
    if !state.resolved {
        return GuardDecision::Wait;
    }
    match (page, state.is_signed_in()) {
        (GuardedPage::Login, true) => GuardDecision::Redirect(DASHBOARD_PATH),
        (GuardedPage::Dashboard, false) => GuardDecision::Redirect(LOGIN_PROMPT_PATH),
        _ => GuardDecision::Allow,
    }
}

/// Redirect whenever the guard for `page` says so.
pub fn install_page_guard<F>(page: GuardedPage, auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = guard_decision(page, &auth.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
