//! Restricted document metadata. Fetch errors are surfaced.

use leptos::prelude::*;
use records::RestrictedArtifact;

use crate::components::layout::PageHeader;
use crate::components::notice::{EmptyState, ErrorText, JsonBlock};
use crate::net::loaders::load_list;
use crate::net::{spawn, use_api};
use crate::state::listing::Loaded;
use crate::util::format::{format_date, text_or};

#[component]
pub fn ArtifactsPage() -> impl IntoView {
    let api = use_api();
    let artifacts = RwSignal::new(None::<Loaded<RestrictedArtifact>>);

    spawn(async move {
        artifacts.set(Some(load_list("artifacts", api.client().list_artifacts()).await));
    });

    view! {
        <PageHeader
            eyebrow="Restricted"
            title="Artifacts".to_owned()
            subtitle="Conformity documents, test reports and dismantling files attached to passports.".to_owned()
        />
        {move || match artifacts.get() {
            None => view! { <p class="loading">"Loading artifacts..."</p> }.into_any(),
            Some(loaded) => view! {
                {loaded.error.clone().map(|message| view! { <ErrorText message=message/> })}
                {if loaded.is_empty() {
                    view! { <EmptyState text="No artifacts uploaded yet."/> }.into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {loaded.items.into_iter().map(artifact_card).collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }}
            }
            .into_any(),
        }}
    }
}

fn artifact_card(artifact: RestrictedArtifact) -> impl IntoView {
    let passport_link = artifact.passport_id.map(|id| {
        let href = format!("/passports/{id}");
        view! { <a class="card__link" href=href>"Passport"</a> }
    });
    view! {
        <article class="card">
            <p class="card__eyebrow">{text_or(artifact.kind.as_deref(), "document")}</p>
            <h3 class="card__title">{artifact.title}</h3>
            <p class="card__meta">{format!("Added {}", format_date(&artifact.created_at))}</p>
            {artifact.url.map(|url| view! { <a class="card__link" href=url target="_blank" rel="noopener">"Open"</a> })}
            {passport_link}
            {artifact.metadata.map(|meta| view! { <JsonBlock value=Some(meta) empty=""/> })}
        </article>
    }
}
