//! Identity provider bridge (Firebase Authentication).
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider is an external collaborator. In the browser it is reached
//! through the `js/identity.js` module, which wraps the Firebase modular SDK
//! and hands sessions back as JSON. Everything here is a thin, typed facade;
//! no session is cached or persisted on this side.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, IdentityError>`. Call sites log failures and
//! leave the UI in its pre-attempt state. Off-browser builds return
//! `IdentityError::Unavailable` from every operation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use super::types::{FirebaseConfig, Session};

#[cfg(feature = "hydrate")]
mod bridge {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(module = "/js/identity.js")]
    extern "C" {
        #[wasm_bindgen(js_name = initIdentity, catch)]
        pub fn init_identity(config_json: &str) -> Result<(), JsValue>;

        #[wasm_bindgen(js_name = signInWithGoogle, catch)]
        pub async fn sign_in_with_google() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = signInWithEmail, catch)]
        pub async fn sign_in_with_email(email: &str, password: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = signOutUser, catch)]
        pub async fn sign_out() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = subscribe, catch)]
        pub fn subscribe(callback: &Closure<dyn FnMut(Option<String>)>) -> Result<(), JsValue>;
    }

    /// Best-effort human-readable message from a thrown JS value.
    pub fn js_message(value: &JsValue) -> String {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return String::from(err.message());
        }
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}

/// Failure talking to the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("identity provider not available outside the browser")]
    Unavailable,
    #[error("identity provider not initialized: {0}")]
    NotInitialized(String),
    #[error("identity provider rejected the request: {0}")]
    Rejected(String),
    #[error("identity provider returned a malformed session: {0}")]
    Malformed(String),
}

/// Initialize the provider with this deployment's Firebase settings.
/// Repeated calls are ignored by the bridge.
///
/// # Errors
///
/// Returns `NotInitialized` if the SDK refuses the configuration.
pub fn init(config: &FirebaseConfig) -> Result<(), IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let raw = serde_json::to_string(config).map_err(|e| IdentityError::NotInitialized(e.to_string()))?;
        bridge::init_identity(&raw).map_err(|e| IdentityError::NotInitialized(bridge::js_message(&e)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(IdentityError::Unavailable)
    }
}

/// Sign in through the Google pop-up, always prompting for account selection.
///
/// # Errors
///
/// Returns `Rejected` when the user closes the pop-up or the provider refuses.
pub async fn sign_in_with_google() -> Result<Session, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let value = bridge::sign_in_with_google()
            .await
            .map_err(|e| IdentityError::Rejected(bridge::js_message(&e)))?;
        decode_session_value(value.as_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(IdentityError::Unavailable)
    }
}

/// Sign in with an email/password account.
///
/// # Errors
///
/// Returns `Rejected` for wrong credentials or network failures.
pub async fn sign_in_with_email(email: &str, password: &str) -> Result<Session, IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        let value = bridge::sign_in_with_email(email, password)
            .await
            .map_err(|e| IdentityError::Rejected(bridge::js_message(&e)))?;
        decode_session_value(value.as_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(IdentityError::Unavailable)
    }
}

/// Sign the current user out.
///
/// # Errors
///
/// Returns `Rejected` if the provider could not complete the sign-out.
pub async fn sign_out() -> Result<(), IdentityError> {
    #[cfg(feature = "hydrate")]
    {
        bridge::sign_out()
            .await
            .map(|_| ())
            .map_err(|e| IdentityError::Rejected(bridge::js_message(&e)))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(IdentityError::Unavailable)
    }
}

/// Register `on_change` for every provider state change. The subscription
/// lives for the rest of the page.
///
/// A payload that cannot be decoded is logged and reported as signed out.
///
/// # Errors
///
/// Returns `NotInitialized` if called before [`init`].
pub fn subscribe<F>(on_change: F) -> Result<(), IdentityError>
where
    F: FnMut(Option<Session>) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::closure::Closure;

        let mut on_change = on_change;
        let callback = Closure::<dyn FnMut(Option<String>)>::new(move |raw: Option<String>| {
            let session = match raw.map(|raw| decode_session(&raw)).transpose() {
                Ok(session) => session,
                Err(e) => {
                    log::error!("{e}");
                    None
                }
            };
            on_change(session);
        });
        bridge::subscribe(&callback).map_err(|e| IdentityError::NotInitialized(bridge::js_message(&e)))?;
        callback.forget();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
        Err(IdentityError::Unavailable)
    }
}

/// Decode one session payload emitted by the bridge.
///
/// # Errors
///
/// Returns `Malformed` if the payload is not a session object or lacks a uid.
pub fn decode_session(raw: &str) -> Result<Session, IdentityError> {
    let session: Session = serde_json::from_str(raw).map_err(|e| IdentityError::Malformed(e.to_string()))?;
    if session.uid.is_empty() {
        return Err(IdentityError::Malformed("empty uid".to_owned()));
    }
    Ok(session)
}

#[cfg(feature = "hydrate")]
fn decode_session_value(raw: Option<String>) -> Result<Session, IdentityError> {
    let raw = raw.ok_or_else(|| IdentityError::Malformed("expected a JSON string".to_owned()))?;
    decode_session(&raw)
}
