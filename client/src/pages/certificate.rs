//! Certificate page for one course (`/certificate?course={id}`).
//!
//! The certificate is only shown when the signed-in user's stored progress
//! for the course is exactly 100%.

#[cfg(test)]
#[path = "certificate_test.rs"]
mod certificate_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_query_map;

use crate::net::types::{Course, Session};
use crate::state::auth::AuthState;
use crate::state::progress::ProgressStore;

/// What the certificate page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CertificateView {
    SignedOut,
    UnknownCourse,
    NotEarned { title: String, progress: u8 },
    Earned { title: String, holder: String },
}

/// Resolve the certificate for `course_id` from the catalog and stored progress.
pub fn certificate_view(
    catalog: &[Course],
    store: &ProgressStore,
    session: Option<&Session>,
    course_id: Option<&str>,
) -> CertificateView {
    let Some(session) = session else {
        return CertificateView::SignedOut;
    };
    let Some(course) = course_id.and_then(|id| catalog.iter().find(|c| c.id == id)) else {
        return CertificateView::UnknownCourse;
    };
    let progress = session
        .email
        .as_deref()
        .map(|email| store.course(email, &course.id))
        .unwrap_or_default();
    if progress.is_completed() {
        let holder = session
            .display_name
            .clone()
            .or_else(|| session.email.clone())
            .unwrap_or_else(|| "AveSafe learner".to_owned());
        CertificateView::Earned { title: course.title.clone(), holder }
    } else {
        CertificateView::NotEarned { title: course.title.clone(), progress: progress.percent }
    }
}

#[component]
pub fn CertificatePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let catalog = RwSignal::new(None::<Vec<Course>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_courses().await {
            Ok(courses) => catalog.set(Some(courses)),
            Err(e) => log::error!("error loading courses for certificate: {e}"),
        }
    });

    let resolved = Memo::new(move |_| {
        let state = auth.get();
        if !state.resolved {
            return None;
        }
        let courses = catalog.get()?;
        let course_id = query.get().get("course");
        Some(certificate_view(&courses, &ProgressStore::load(), state.session.as_ref(), course_id.as_deref()))
    });

    view! {
        <div class="certificate-page">
            {move || match resolved.get() {
                None => view! { <p>"Loading..."</p> }.into_any(),
                Some(CertificateView::SignedOut) => view! {
                    <p>"Sign in to view your certificates."</p>
                    <a href="/login" class="btn">"Sign In"</a>
                }
                .into_any(),
                Some(CertificateView::UnknownCourse) => view! { <p>"Course not found."</p> }.into_any(),
                Some(CertificateView::NotEarned { title, progress }) => view! {
                    <p>{format!("{title}: {progress}% complete. Finish the course to earn this certificate.")}</p>
                }
                .into_any(),
                Some(CertificateView::Earned { title, holder }) => view! {
                    <div class="certificate">
                        <p class="certificate__label">"Certificate of Completion"</p>
                        <h1 class="certificate__holder">{holder}</h1>
                        <p>"has completed"</p>
                        <h2 class="certificate__course">{title}</h2>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
