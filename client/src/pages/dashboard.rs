//! Dashboard page: welcome header, course progress and earned certificates.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. Signed-out visitors are redirected to the login prompt
//! before any dashboard content renders. For a session, the catalog is
//! fetched once and joined with the locally stored progress through
//! `build_dashboard`, a pure function of (catalog, progress, email).
//!
//! ERROR HANDLING
//! ==============
//! A catalog failure is logged and both sections stay unrendered. Storage
//! problems read as "no progress".

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::components::header::DEFAULT_AVATAR_URL;
use crate::net::types::{ClientConfig, Course, Session};
use crate::state::auth::AuthState;
use crate::state::progress::ProgressStore;
use crate::util::auth::{GuardDecision, GuardedPage, guard_decision, install_page_guard};

/// One row of the progress section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressRow {
    pub course_id: String,
    pub title: String,
    pub percent: u8,
    pub completed: bool,
}

impl ProgressRow {
    pub fn label(&self) -> String {
        if self.completed { "Completed".to_owned() } else { format!("{}% Complete", self.percent) }
    }
}

/// One earned certificate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateEntry {
    pub course_id: String,
    pub title: String,
}

impl CertificateEntry {
    pub fn href(&self) -> String {
        format!("/certificate?course={}", self.course_id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressSection {
    /// The user has no stored entries at all.
    NotStarted,
    Rows(Vec<ProgressRow>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CertificateSection {
    /// The user has no stored entries at all.
    NotStarted,
    /// Started courses, none completed.
    NoneEarned,
    Earned(Vec<CertificateEntry>),
}

/// Everything the two dashboard sections render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    pub progress: ProgressSection,
    pub certificates: CertificateSection,
}

impl DashboardView {
    pub fn certificate_count(&self) -> usize {
        match &self.certificates {
            CertificateSection::Earned(entries) => entries.len(),
            _ => 0,
        }
    }
}

/// Join the catalog with `email`'s stored progress. Never mutates the store.
pub fn build_dashboard(catalog: &[Course], store: &ProgressStore, email: Option<&str>) -> DashboardView {
    let Some(email) = email.filter(|email| store.for_user(email).is_some()) else {
        return DashboardView { progress: ProgressSection::NotStarted, certificates: CertificateSection::NotStarted };
    };

    let rows: Vec<ProgressRow> = catalog
        .iter()
        .map(|course| {
            let progress = store.course(email, &course.id);
            ProgressRow {
                course_id: course.id.clone(),
                title: course.title.clone(),
                percent: progress.percent,
                completed: progress.is_completed(),
            }
        })
        .collect();

    let earned: Vec<CertificateEntry> = rows
        .iter()
        .filter(|row| row.completed)
        .map(|row| CertificateEntry { course_id: row.course_id.clone(), title: row.title.clone() })
        .collect();

    let certificates = if earned.is_empty() { CertificateSection::NoneEarned } else { CertificateSection::Earned(earned) };
    DashboardView { progress: ProgressSection::Rows(rows), certificates }
}

/// Welcome header content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WelcomeView {
    pub photo_url: String,
    pub display_name: String,
    pub email: String,
}

/// Welcome header for `session`; only rendered when a display name exists.
pub fn welcome_view(session: &Session) -> Option<WelcomeView> {
    let display_name = session.display_name.clone()?;
    Some(WelcomeView {
        photo_url: session.photo_url.clone().unwrap_or_else(|| DEFAULT_AVATAR_URL.to_owned()),
        display_name,
        email: session.email.clone().unwrap_or_default(),
    })
}

/// Dashboard page. Redirects to the login prompt if signed out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<RwSignal<ClientConfig>>();
    install_page_guard(GuardedPage::Dashboard, auth, use_navigate());

    let decision = Memo::new(move |_| guard_decision(GuardedPage::Dashboard, &auth.get()));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if decision.get() == GuardDecision::Wait { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                {move || auth.get().session.as_ref().and_then(welcome_view).map(|w| view! { <WelcomeHeader welcome=w/> })}
                <Show when=move || {
                    let admins = config.get().admin_emails;
                    auth.get().session.is_some_and(|s| s.is_admin(&admins))
                }>
                    <div id="adminAccessContainer" class="admin-access">
                        <a href="/admin.html" class="btn-small">"Admin Panel"</a>
                    </div>
                </Show>
                <DashboardSections email=Signal::derive(move || auth.get().email().map(str::to_owned))/>
            </div>
        </Show>
    }
}

#[component]
fn WelcomeHeader(welcome: WelcomeView) -> impl IntoView {
    view! {
        <div id="dashboardWelcome" class="dashboard-welcome">
            <img src=welcome.photo_url alt="Profile" class="dashboard-avatar"/>
            <div class="dashboard-welcome__text">
                <span class="dashboard-welcome__greeting">"Welcome back!"</span>
                <span class="dashboard-welcome__name">{welcome.display_name}</span>
                <span class="dashboard-welcome__email">{welcome.email}</span>
            </div>
        </div>
    }
}

/// Progress and certificate sections. Renders nothing until the catalog has
/// loaded; stays empty if it never does.
#[component]
fn DashboardSections(email: Signal<Option<String>>) -> impl IntoView {
    let catalog = RwSignal::new(None::<Vec<Course>>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_courses().await {
            Ok(courses) => catalog.set(Some(courses)),
            Err(e) => log::error!("error loading courses for dashboard: {e}"),
        }
    });

    let dashboard = Memo::new(move |_| {
        catalog
            .get()
            .map(|courses| build_dashboard(&courses, &ProgressStore::load(), email.get().as_deref()))
    });

    view! {
        <section class="dashboard-section">
            <h2>"Your Progress"</h2>
            <div id="courseProgressSection">
                {move || dashboard.get().map(|d| view! { <ProgressSectionView section=d.progress/> })}
            </div>
        </section>
        <section class="dashboard-section">
            <h2>"Certificates"</h2>
            <div id="certificatesSection">
                {move || dashboard.get().map(|d| view! { <CertificateSectionView section=d.certificates/> })}
            </div>
        </section>
    }
}

#[component]
fn ProgressSectionView(section: ProgressSection) -> impl IntoView {
    match section {
        ProgressSection::NotStarted => view! {
            <p class="text-muted">"You haven't started any courses yet."</p>
            <a href="/#courses" class="btn-small">"Browse Courses"</a>
        }
        .into_any(),
        ProgressSection::Rows(rows) => view! {
            <div class="course-list">
                {rows
                    .into_iter()
                    .map(|row| {
                        let label = row.label();
                        view! {
                            <div class="course-item">
                                <div class="course-header">
                                    <span>{row.title}</span>
                                    <span class="course-header__status" class:completed=row.completed>{label}</span>
                                </div>
                                <div class="dash-progress-track">
                                    <div
                                        class="dash-progress-fill"
                                        class:completed=row.completed
                                        style:width=format!("{}%", row.percent)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn CertificateSectionView(section: CertificateSection) -> impl IntoView {
    match section {
        CertificateSection::NotStarted => view! { <p class="text-muted">"No certificates earned yet."</p> }.into_any(),
        CertificateSection::NoneEarned => view! {
            <div class="cert-empty text-muted">"Complete a course to earn your certificate!"</div>
        }
        .into_any(),
        CertificateSection::Earned(entries) => view! {
            <div class="cert-grid">
                {entries
                    .into_iter()
                    .map(|entry| {
                        let href = entry.href();
                        view! {
                            <div class="cert-card">
                                <div class="cert-card__icon">"🏆"</div>
                                <h4>{entry.title}</h4>
                                <a href=href class="btn-small">"View"</a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
    }
}
