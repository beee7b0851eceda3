//! Functions published to other page scripts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tutorial pages written in plain JS call `loginWithGoogle`,
//! `loginWithEmail`, `currentUserEmail` and `currentUser` on the wasm module.
//! The last two read a mirror of the session signal; `App`'s identity
//! subscription is its only writer, right after it updates `AuthState`.
//!
//! Those pages mount the app through `hydrateWithHooks({ saveProgress,
//! renderSidebar, updateCourseProgress, initCertificatePage })` instead of
//! `hydrate()`. Any member may be omitted. The functions are kept in a
//! thread-local slot and reached through `SessionHooks::dispatching`, since JS
//! values cannot cross into the `Send` hooks held in context.

#[cfg(test)]
#[path = "exports_test.rs"]
mod exports_test;

use std::cell::RefCell;

use crate::net::types::Session;

thread_local! {
    static MIRROR: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Replace the mirrored session.
pub fn mirror_session(session: Option<&Session>) {
    MIRROR.with(|slot| *slot.borrow_mut() = session.cloned());
}

/// Last session reported by the identity provider.
pub fn mirrored_session() -> Option<Session> {
    MIRROR.with(|slot| slot.borrow().clone())
}

pub fn mirrored_email() -> Option<String> {
    MIRROR.with(|slot| slot.borrow().as_ref().and_then(|s| s.email.clone()))
}

#[cfg(feature = "hydrate")]
mod js {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::net::identity;
    use crate::net::types::Session;
    use crate::util::hooks::{HookCall, HookPresence, SessionHooks};

    /// Page-script callbacks handed to `hydrateWithHooks`.
    #[derive(Default)]
    struct JsHooks {
        save_progress: Option<js_sys::Function>,
        render_sidebar: Option<js_sys::Function>,
        update_course_progress: Option<js_sys::Function>,
        init_certificate_page: Option<js_sys::Function>,
    }

    impl JsHooks {
        fn read(hooks: &JsValue) -> Self {
            let member = |name: &str| {
                js_sys::Reflect::get(hooks, &JsValue::from_str(name))
                    .ok()
                    .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            };
            Self {
                save_progress: member("saveProgress"),
                render_sidebar: member("renderSidebar"),
                update_course_progress: member("updateCourseProgress"),
                init_certificate_page: member("initCertificatePage"),
            }
        }

        fn presence(&self) -> HookPresence {
            HookPresence {
                save_progress: self.save_progress.is_some(),
                render_sidebar: self.render_sidebar.is_some(),
                update_course_progress: self.update_course_progress.is_some(),
                init_certificate_page: self.init_certificate_page.is_some(),
            }
        }
    }

    thread_local! {
        static JS_HOOKS: RefCell<JsHooks> = RefCell::new(JsHooks::default());
    }

    fn call_js_hook(call: HookCall) {
        // Clone the function out so a hook that re-enters this module does
        // not hit a held borrow.
        let (function, arg) = JS_HOOKS.with(|slot| {
            let hooks = slot.borrow();
            match call {
                HookCall::SaveProgress(course) => (hooks.save_progress.clone(), Some(JsValue::from_str(course))),
                HookCall::RenderSidebar => (hooks.render_sidebar.clone(), None),
                HookCall::UpdateCourseProgress(course) => {
                    (hooks.update_course_progress.clone(), Some(JsValue::from_str(course)))
                }
                HookCall::InitCertificatePage(session) => {
                    let arg = session.as_ref().map_or(Ok(JsValue::NULL), session_to_js).unwrap_or(JsValue::NULL);
                    (hooks.init_certificate_page.clone(), Some(arg))
                }
            }
        });
        let Some(function) = function else {
            return;
        };
        let result = match arg {
            Some(arg) => function.call1(&JsValue::NULL, &arg),
            None => function.call0(&JsValue::NULL),
        };
        if let Err(e) = result {
            log::warn!("session hook threw: {e:?}");
        }
    }

    /// Hydrate with page-script callbacks run on every session change.
    #[wasm_bindgen(js_name = hydrateWithHooks)]
    pub fn hydrate_with_js_hooks(hooks: JsValue) {
        let js_hooks = JsHooks::read(&hooks);
        let present = js_hooks.presence();
        JS_HOOKS.with(|slot| *slot.borrow_mut() = js_hooks);
        crate::hydrate_with_hooks(SessionHooks::dispatching(present, call_js_hook));
    }

    fn session_to_js(session: &Session) -> Result<JsValue, JsValue> {
        let raw = serde_json::to_string(session).map_err(|e| JsValue::from_str(&e.to_string()))?;
        js_sys::JSON::parse(&raw)
    }

    #[wasm_bindgen(js_name = loginWithGoogle)]
    pub async fn login_with_google() -> Result<JsValue, JsValue> {
        let session = identity::sign_in_with_google()
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        session_to_js(&session)
    }

    #[wasm_bindgen(js_name = loginWithEmail)]
    pub async fn login_with_email(email: String, password: String) -> Result<JsValue, JsValue> {
        let session = identity::sign_in_with_email(&email, &password)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        session_to_js(&session)
    }

    #[wasm_bindgen(js_name = currentUserEmail)]
    pub fn current_user_email() -> Option<String> {
        super::mirrored_email()
    }

    /// Current session as a plain object, or `null` when signed out.
    #[wasm_bindgen(js_name = currentUser)]
    pub fn current_user() -> Result<JsValue, JsValue> {
        match super::mirrored_session() {
            Some(session) => session_to_js(&session),
            None => Ok(JsValue::NULL),
        }
    }
}
