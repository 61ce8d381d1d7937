//! Landing page with section shortcuts.

use leptos::prelude::*;

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("Battery passport deadline", "18 Feb 2027", "Annex XIII public tier required"),
    ("Data tiers", "Public + Restricted", "Scan page shows the public tier only"),
    ("Carbon border", "CBAM", "Declarations with default or verified factors"),
];

const SECTIONS: [(&str, &str, &str); 6] = [
    ("/passports", "Passport registry", "Create, edit and share QR-ready passports."),
    ("/catalog/templates", "Templates", "Reusable defaults for a battery model."),
    ("/catalog/components", "Components", "Cells, modules and BMS parts with references."),
    ("/jobs/imports", "Bulk jobs", "Import records from JSON and export CSV."),
    ("/cbam", "CBAM", "Quarterly declarations, suppliers and factor library."),
    ("/compliance", "Other regimes", "CRA, EUDR, AI Act, EPD and NIS2 registers."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <p class="page-header__eyebrow">"Battery passport studio"</p>
            <h1 class="hero__title">"Launch battery passports without enterprise bloat."</h1>
            <p class="hero__lead">
                "Capture Annex XIII public fields, keep restricted data guarded, and ship QR-ready passports your customers can scan."
            </p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="/passports/new">"Create passport"</a>
                <a class="btn" href="/passports">"View registry"</a>
            </div>
            <div class="hero__highlights">
                {HIGHLIGHTS
                    .into_iter()
                    .map(|(title, value, note)| {
                        view! {
                            <div class="panel">
                                <p class="panel__label">{title}</p>
                                <p class="panel__value">{value}</p>
                                <p class="panel__hint">{note}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
        <section class="section-grid">
            {SECTIONS
                .into_iter()
                .map(|(href, title, text)| {
                    view! {
                        <a class="card section-card" href=href>
                            <h2 class="card__title">{title}</h2>
                            <p class="card__subtitle">{text}</p>
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
