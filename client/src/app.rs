//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the three shared signals (`AuthState`, `UiState`,
//! `ClientConfig`) and renders the header and profile menu exactly once, above
//! the router. In the browser it also runs the identity startup sequence:
//! fetch the client config, initialize the provider, subscribe. The
//! subscription callback is the only writer of `AuthState`.
//!
//! ERROR HANDLING
//! ==============
//! A failed startup step is logged and the session is marked resolved with no
//! user, so guards and header still settle instead of waiting forever.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{header::SiteHeader, profile_menu::ProfileMenu, profile_menu::install_outside_click_listener};
use crate::net::api::ApiError;
use crate::net::identity::IdentityError;
use crate::net::types::{ClientConfig, Session};
use crate::pages::{certificate::CertificatePage, dashboard::DashboardPage, home::HomePage, login::LoginPage};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::hooks::SessionHooks;

/// Failure in the identity startup sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StartupError {
    #[error("client config: {0}")]
    Config(#[from] ApiError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Log line for a session change, distinguishing admins from regular users.
pub fn session_log_line(session: Option<&Session>, admin_emails: &[String]) -> String {
    match session {
        None => "no user signed in".to_owned(),
        Some(s) => {
            let who = s.email.as_deref().unwrap_or(&s.uid);
            if s.is_admin(admin_emails) {
                format!("admin signed in: {who}")
            } else {
                format!("user signed in: {who}")
            }
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, starts the identity subscription and
/// sets up client-side routing. Embedder hooks are picked up from context if
/// one was provided before mounting.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let config = RwSignal::new(ClientConfig::default());
    let hooks = use_context::<SessionHooks>().unwrap_or_default();

    provide_context(auth);
    provide_context(ui);
    provide_context(config);

    start_identity(auth, ui, config, hooks);
    install_outside_click_listener(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/avesafe.css"/>
        <Title text="AveSafe"/>

        <Router>
            <SiteHeader/>
            <ProfileMenu/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("certificate") view=CertificatePage/>
                </Routes>
            </main>
        </Router>
    }
}

fn start_identity(auth: RwSignal<AuthState>, ui: RwSignal<UiState>, config: RwSignal<ClientConfig>, hooks: SessionHooks) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(e) = connect_identity(auth, ui, config, hooks).await {
            log::error!("identity startup failed: {e}");
            auth.set(AuthState::notified(None));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, ui, config, hooks);
    }
}

#[cfg(feature = "hydrate")]
async fn connect_identity(
    auth: RwSignal<AuthState>,
    ui: RwSignal<UiState>,
    config: RwSignal<ClientConfig>,
    hooks: SessionHooks,
) -> Result<(), StartupError> {
    use crate::net::{api, identity};
    use crate::util::{dom, hooks::run_session_hooks};

    let client_config = api::fetch_client_config().await?;
    identity::init(&client_config.firebase)?;
    let admin_emails = client_config.admin_emails.clone();
    config.set(client_config);

    identity::subscribe(move |session: Option<Session>| {
        let changed = auth.try_update(|state| state.apply(session.clone())).unwrap_or(false);
        if changed {
            ui.update(UiState::close_menu);
        }
        crate::exports::mirror_session(session.as_ref());
        log::info!("{}", session_log_line(session.as_ref(), &admin_emails));
        run_session_hooks(&hooks, session.as_ref(), &dom::current_path(), dom::visual_course_progress());
    })?;
    Ok(())
}
