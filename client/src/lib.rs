//! # avesafe-client
//!
//! Leptos + WASM frontend for the AveSafe learning site: the sign-in flow,
//! the shared header and profile menu, and the learner dashboard built from
//! the course catalog and locally stored progress.
//!
//! The browser entry point is `hydrate`. Pages that need to react to session
//! changes (tutorials, certificates) mount through `hydrateWithHooks` from
//! page script, or `hydrate_with_hooks` from Rust.

pub mod app;
pub mod components;
pub mod exports;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    hydrate_with_hooks(util::hooks::SessionHooks::default());
}

/// Hydrate the server-rendered body with embedder callbacks in context.
#[cfg(feature = "hydrate")]
pub fn hydrate_with_hooks(hooks: util::hooks::SessionHooks) {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger already set: {e}").into());
    }
    leptos::mount::hydrate_body(move || {
        provide_context(hooks);
        view! { <app::App/> }
    });
}
