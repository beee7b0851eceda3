//! Optional embedder callbacks run on every session change.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tutorial and certificate scripts owned by other code want to react once the
//! session is known (save progress, re-render a sidebar that was drawn locked,
//! refresh the progress circle). They hand their callbacks in as a
//! `SessionHooks` context value before the app mounts; absent hooks are
//! skipped.

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

use std::sync::Arc;

use crate::net::types::Session;

/// Delay before retrying a progress save once the session is known.
pub const SAVE_PROGRESS_DELAY_MS: u32 = 500;

/// Course kinds with tutorial pages, in detection order.
pub const COURSE_KINDS: [&str; 9] = ["html", "css", "js", "python", "react", "sql", "java", "git", "methodologies"];

pub type CourseHook = Arc<dyn Fn(&'static str) + Send + Sync>;
pub type UnitHook = Arc<dyn Fn() + Send + Sync>;
pub type SessionHook = Arc<dyn Fn(Option<&Session>) + Send + Sync>;

/// Named optional callbacks supplied at construction.
#[derive(Clone, Default)]
pub struct SessionHooks {
    pub save_progress: Option<CourseHook>,
    pub render_sidebar: Option<UnitHook>,
    pub update_course_progress: Option<CourseHook>,
    pub init_certificate_page: Option<SessionHook>,
}

impl std::fmt::Debug for SessionHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHooks")
            .field("save_progress", &self.save_progress.is_some())
            .field("render_sidebar", &self.render_sidebar.is_some())
            .field("update_course_progress", &self.update_course_progress.is_some())
            .field("init_certificate_page", &self.init_certificate_page.is_some())
            .finish()
    }
}

/// One hook invocation, for callbacks that live outside Rust.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HookCall {
    SaveProgress(&'static str),
    RenderSidebar,
    UpdateCourseProgress(&'static str),
    InitCertificatePage(Option<Session>),
}

/// Which externally held callbacks exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HookPresence {
    pub save_progress: bool,
    pub render_sidebar: bool,
    pub update_course_progress: bool,
    pub init_certificate_page: bool,
}

impl SessionHooks {
    /// Hooks that forward every call to `dispatch`. Only hooks marked present
    /// are set, so absent ones are still skipped by `run_session_hooks`.
    pub fn dispatching(present: HookPresence, dispatch: fn(HookCall)) -> Self {
        Self {
            save_progress: present
                .save_progress
                .then(|| Arc::new(move |course: &'static str| dispatch(HookCall::SaveProgress(course))) as CourseHook),
            render_sidebar: present
                .render_sidebar
                .then(|| Arc::new(move || dispatch(HookCall::RenderSidebar)) as UnitHook),
            update_course_progress: present
                .update_course_progress
                .then(|| Arc::new(move |course: &'static str| dispatch(HookCall::UpdateCourseProgress(course))) as CourseHook),
            init_certificate_page: present.init_certificate_page.then(|| {
                Arc::new(move |session: Option<&Session>| dispatch(HookCall::InitCertificatePage(session.cloned())))
                    as SessionHook
            }),
        }
    }
}

/// Course kind of a tutorial page path such as `/tutorials/css/selectors`.
pub fn course_from_path(path: &str) -> Option<&'static str> {
    let path = path.to_ascii_lowercase();
    if !path.contains("/tutorials/") {
        return None;
    }
    COURSE_KINDS
        .into_iter()
        .find(|kind| path.contains(&format!("/{kind}/")))
}

/// Run the hooks for one state-change notification.
///
/// `visual_progress` is the percentage currently shown on the page's progress
/// circle; a save is only retried when it is above zero so a freshly reset
/// course is not written back.
pub fn run_session_hooks(hooks: &SessionHooks, session: Option<&Session>, path: &str, visual_progress: Option<u32>) {
    if session.is_some() && path.to_ascii_lowercase().contains("/tutorials/") {
        let course = course_from_path(path);

        if let (Some(course), Some(save)) = (course, hooks.save_progress.as_ref()) {
            if visual_progress.unwrap_or(0) > 0 {
                schedule_save(save.clone(), course);
            }
        }

        if let Some(render_sidebar) = &hooks.render_sidebar {
            render_sidebar();
        }

        if let (Some(course), Some(update)) = (course, &hooks.update_course_progress) {
            update(course);
        }
    }

    if let Some(init) = &hooks.init_certificate_page {
        init(session);
    }
}

fn schedule_save(save: CourseHook, course: &'static str) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(SAVE_PROGRESS_DELAY_MS, move || save(course)).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        save(course);
    }
}
