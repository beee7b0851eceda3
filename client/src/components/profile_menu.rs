//! Floating profile menu attached at the app root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `App` as a sibling of the header, never inside it, so its
//! element ids cannot collide with header markup. The menu is keyed by session
//! identity: a different user gets a freshly built menu and the old one is
//! dropped.
//!
//! Toggle semantics live in `UiState`; the page-wide outside-click listener is
//! attached once per page.

#[cfg(test)]
#[path = "profile_menu_test.rs"]
mod profile_menu_test;

use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{MenuState, UiState};
use crate::util::auth::DASHBOARD_PATH;

static LISTENERS_ATTACHED: AtomicBool = AtomicBool::new(false);

/// Content of the menu for one signed-in identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    /// Session uid; a change means the menu must be rebuilt.
    pub key: String,
    pub greeting: String,
}

/// Menu for the current session; `None` when signed out or unresolved.
pub fn menu_view(state: &AuthState) -> Option<MenuView> {
    let session = state.session.as_ref()?;
    Some(MenuView { key: session.uid.clone(), greeting: format!("Hello! {}", session.first_name()) })
}

/// Inline style for the menu element.
pub fn menu_style(menu: MenuState) -> String {
    match menu {
        MenuState::Closed => "display: none;".to_owned(),
        MenuState::Open(placement) => format!("display: flex; visibility: visible; {}", placement.style()),
    }
}

/// Claim the one-per-page slot for global listeners. Only the first caller
/// gets `true`.
pub fn claim_listener_slot() -> bool {
    !LISTENERS_ATTACHED.swap(true, Ordering::AcqRel)
}

/// Close the menu on clicks outside both the menu and its trigger icon.
pub fn install_outside_click_listener(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom::{PROFILE_ICON_ID, PROFILE_MENU_ID, target_within};
        use crate::util::menu_math::outside_click_closes;

        if !claim_listener_slot() {
            return;
        }
        log::debug!("attaching profile menu listeners");
        let _handle = window_event_listener(leptos::ev::click, move |ev| {
            let target = ev.target();
            let inside_menu = target_within(target.as_ref(), PROFILE_MENU_ID);
            let on_icon = target_within(target.as_ref(), PROFILE_ICON_ID);
            if outside_click_closes(ui.get_untracked().menu.is_open(), inside_menu, on_icon) {
                ui.update(UiState::close_menu);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}

/// Profile menu with dashboard and sign-out items.
#[component]
pub fn ProfileMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let menu = Memo::new(move |_| menu_view(&auth.get()));

    let on_sign_out = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        log::info!("sign out requested");
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::identity::sign_out().await {
                Ok(()) => crate::util::dom::hard_navigate("/"),
                Err(e) => log::error!("sign out failed: {e}"),
            }
        });
    };

    move || {
        menu.get().map(|m| {
            view! {
                <div id="profileMenu" class="profile-menu" data-session=m.key style=move || menu_style(ui.get().menu)>
                    <div class="profile-menu-header">{m.greeting}</div>
                    <a
                        href=DASHBOARD_PATH
                        id="dashboardBtn"
                        class="profile-menu-item"
                        on:click=move |_| ui.update(UiState::close_menu)
                    >
                        "Dashboard"
                    </a>
                    <div id="signOutBtn" class="profile-menu-item danger" on:click=on_sign_out>
                        "Sign Out"
                    </div>
                </div>
            }
        })
    }
}
