//! Login page supporting Google pop-up and email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{GuardedPage, install_page_guard};

const MISSING_CREDENTIALS: &str = "Enter both email and password.";

/// Trim the email and require both fields. Passwords are kept verbatim.
pub fn validate_email_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Short inline notice after a rejected sign-in. Details go to the log only.
pub fn sign_in_failed_message(method: &str) -> String {
    format!("{method} sign-in failed. Please try again.")
}

/// Reactive state of the login form.
#[derive(Clone, Copy, Debug)]
pub struct LoginForm {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    /// Inline notice; empty when nothing to show.
    pub info: RwSignal<String>,
    pub busy: RwSignal<bool>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            info: RwSignal::new(String::new()),
            busy: RwSignal::new(false),
        }
    }

    /// Start an attempt. Returns false if one is already running.
    pub fn begin_attempt(self) -> bool {
        if self.busy.get_untracked() {
            return false;
        }
        self.busy.set(true);
        self.info.set(String::new());
        true
    }

    /// Return to the pre-attempt state with a short notice. Entered values
    /// are kept.
    pub fn reject(self, method: &str) {
        self.info.set(sign_in_failed_message(method));
        self.busy.set(false);
    }

    pub fn finish(self) {
        self.busy.set(false);
    }
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_page_guard(GuardedPage::Login, auth, navigate.clone());

    let form = LoginForm::new();
    let LoginForm { email, password, info, busy } = form;

    let navigate_google = navigate.clone();
    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if !form.begin_attempt() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_google.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::sign_in_with_google().await {
                    Ok(session) => {
                        log::info!(
                            "signed in with Google: uid={} email={}",
                            session.uid,
                            session.email.as_deref().unwrap_or("-")
                        );
                        form.finish();
                        navigate(
                            crate::util::auth::DASHBOARD_PATH,
                            leptos_router::NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(e) => {
                        log::error!("Google login error: {e}");
                        form.reject("Google");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate_google;
            form.finish();
        }
    };

    let on_email = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_email_login(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                if !busy.get_untracked() {
                    info.set(message.to_owned());
                }
                return;
            }
        };
        if !form.begin_attempt() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::identity::sign_in_with_email(&email_value, &password_value).await {
                    Ok(session) => {
                        log::info!("signed in with email: uid={}", session.uid);
                        form.finish();
                        navigate(
                            crate::util::auth::DASHBOARD_PATH,
                            leptos_router::NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(e) => {
                        log::error!("email login error: {e}");
                        form.reject("Email");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, email_value, password_value);
            form.finish();
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"AveSafe"</h1>
                <p class="login-card__subtitle">"Sign in to track your progress"</p>
                <button id="googleLoginBtn" class="login-button" type="button" on:click=on_google disabled=move || busy.get()>
                    "Continue with Google"
                </button>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or"</p>
                <form class="login-form" on:submit=on_email>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
