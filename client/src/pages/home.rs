//! Entry page: site intro, course list, and the login prompt target.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::types::Course;
use crate::state::auth::AuthState;

/// Whether to show the sign-in prompt: requested via `?action=login` and
/// nobody is signed in (once the provider has reported).
pub fn show_login_prompt(action: Option<&str>, state: &AuthState) -> bool {
    action == Some("login") && state.resolved && !state.is_signed_in()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let courses = RwSignal::new(Vec::<Course>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_courses().await {
            Ok(list) => courses.set(list),
            Err(e) => log::error!("error loading course catalog: {e}"),
        }
    });

    let prompt = move || show_login_prompt(query.get().get("action").as_deref(), &auth.get());

    view! {
        <div class="home-page">
            <Show when=prompt>
                <div class="login-prompt">
                    <p>"Please sign in to view your dashboard."</p>
                    <a href="/login" class="btn">"Sign In"</a>
                </div>
            </Show>
            <section class="hero">
                <h1>"Learn to build the web, one course at a time."</h1>
                <p>"Track your progress and earn certificates as you go."</p>
            </section>
            <section id="courses" class="course-catalog">
                <h2>"Courses"</h2>
                <ul class="course-catalog__list">
                    <For each=move || courses.get() key=|course| course.id.clone() let:course>
                        <li class="course-catalog__item">{course.title}</li>
                    </For>
                </ul>
            </section>
        </div>
    }
}
