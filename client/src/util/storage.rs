//! Browser localStorage access.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only `web-sys` glue so state modules can parse
//! stored entries without repeating it. Off-browser every read is `None`.

/// Read the raw string stored under `key`. Missing storage (private mode,
/// SSR) and missing entries both read as `None`.
pub fn read_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
