//! Networking modules for HTTP resources and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches the static catalog and runtime config, `identity` wraps the
//! Firebase bridge, and `types` defines the shared wire schema.

pub mod api;
pub mod identity;
pub mod types;
