//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site header and profile menu once for the whole app
//! and read shared state from Leptos context providers.

pub mod header;
pub mod profile_menu;
