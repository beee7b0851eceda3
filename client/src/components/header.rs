//! Site header with the login control and the profile icon.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` is the only owner of the header and renders it before the
//! routed page, so no other code re-injects these controls. Visibility is a
//! pure projection of `AuthState` (`header_view`), which makes re-rendering
//! with the same session a no-op.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dom::{self, PROFILE_ICON_ID, PROFILE_MENU_ID};
use crate::util::menu_math::{MenuPlacement, Rect, place_menu};

/// Avatar shown when the provider has no photo for the user.
pub const DEFAULT_AVATAR_URL: &str = "https://www.gstatic.com/firebasejs/ui/2.0.0/images/auth/person.svg";

/// Visible state of the header controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderView {
    pub login_visible: bool,
    pub profile_visible: bool,
    pub avatar_url: String,
}

/// Project auth state onto the header. While the provider has not reported
/// yet both controls stay hidden; afterwards exactly one is visible.
pub fn header_view(state: &AuthState) -> HeaderView {
    let signed_in = state.is_signed_in();
    HeaderView {
        login_visible: state.resolved && !signed_in,
        profile_visible: state.resolved && signed_in,
        avatar_url: state
            .session
            .as_ref()
            .and_then(|s| s.photo_url.clone())
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_owned()),
    }
}

/// Placement for the menu from whatever could be measured. Unmeasured
/// values fall back to a zero rect and width, still clamped to the inset.
pub fn menu_placement(icon: Option<Rect>, menu_width: Option<f64>) -> MenuPlacement {
    place_menu(icon.unwrap_or_default(), menu_width.unwrap_or(0.0))
}

fn display(visible: bool, shown_as: &'static str) -> &'static str {
    if visible { shown_as } else { "none" }
}

/// Top navigation bar.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let view_model = Memo::new(move |_| header_view(&auth.get()));

    let on_profile_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let placement =
            menu_placement(dom::element_rect(PROFILE_ICON_ID), dom::measure_hidden_width(PROFILE_MENU_ID));
        ui.update(|u| u.toggle_menu(placement));
    };

    view! {
        <header class="site-header" class:auth-loading=move || !auth.get().resolved>
            <a href="/" class="site-header__brand">"AveSafe"</a>
            <nav class="site-header__nav">
                <a href="/#courses" class="site-header__link">"Courses"</a>
            </nav>
            <span class="site-header__spacer"></span>
            <a
                id="loginBtn"
                href="/login"
                class="btn login-btn"
                style:display=move || display(view_model.get().login_visible, "flex")
            >
                "Login"
            </a>
            <img
                id="profileIcon"
                class="profile-icon"
                alt="Profile"
                src=move || view_model.get().avatar_url
                style:display=move || display(view_model.get().profile_visible, "block")
                on:click=on_profile_click
            />
        </header>
    }
}
