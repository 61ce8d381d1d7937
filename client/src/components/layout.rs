//! Page chrome: brand link plus navigation to every section.

use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 10] = [
    ("/passports", "Registry"),
    ("/passports/new", "New passport"),
    ("/catalog/components", "Components"),
    ("/catalog/templates", "Templates"),
    ("/jobs/imports", "Imports"),
    ("/jobs/exports", "Exports"),
    ("/cbam", "CBAM"),
    ("/compliance", "Compliance"),
    ("/audit", "Audit"),
    ("/artifacts", "Artifacts"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <nav class="app-nav">
                <a class="app-nav__brand" href="/">
                    <span class="app-nav__badge">"DPP"</span>
                    "Battery Passport Studio"
                </a>
                <div class="app-nav__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a class="app-nav__link" href=href>{label}</a> })
                        .collect::<Vec<_>>()}
                </div>
            </nav>
            <main class="app-main">{children()}</main>
        </div>
    }
}

/// Title block shared by every page.
#[component]
pub fn PageHeader(
    eyebrow: &'static str,
    title: String,
    #[prop(optional)] subtitle: Option<String>,
    #[prop(optional)] action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div>
                <p class="page-header__eyebrow">{eyebrow}</p>
                <h1 class="page-header__title">{title}</h1>
                {subtitle.map(|text| view! { <p class="page-header__subtitle">{text}</p> })}
            </div>
            {action.map(|(href, label)| view! { <a class="btn btn--primary" href=href>{label}</a> })}
        </header>
    }
}
