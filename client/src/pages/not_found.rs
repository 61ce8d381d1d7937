//! Fallback for unknown routes and missing records.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <section class="not-found">
            <h1 class="page-header__title">"Not found"</h1>
            <p class="page-header__subtitle">"The record or page you asked for does not exist."</p>
            <a class="btn" href="/">"Home"</a>
        </section>
    }
}
