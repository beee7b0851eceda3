//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, catalog fetches) and
//! keeps its rendering decisions in pure view-model functions next to it.

pub mod certificate;
pub mod dashboard;
pub mod home;
pub mod login;
