//! Audit log, newest first. Fetch errors are shown, not swallowed.

use leptos::prelude::*;
use records::AuditLog;

use crate::components::layout::PageHeader;
use crate::components::notice::{EmptyState, ErrorText, JsonBlock};
use crate::net::loaders::load_list;
use crate::net::{spawn, use_api};
use crate::state::listing::Loaded;
use crate::util::format::{format_datetime, text_or};

#[component]
pub fn AuditPage() -> impl IntoView {
    let api = use_api();
    let entries = RwSignal::new(None::<Loaded<AuditLog>>);

    spawn(async move {
        entries.set(Some(load_list("audit log", api.client().list_audit_logs()).await));
    });

    view! {
        <PageHeader
            eyebrow="Audit"
            title="Activity log".to_owned()
            subtitle="The 200 most recent changes in your organisation.".to_owned()
        />
        {move || match entries.get() {
            None => view! { <p class="loading">"Loading audit log..."</p> }.into_any(),
            Some(loaded) => view! {
                {loaded.error.clone().map(|message| view! { <ErrorText message=message/> })}
                {if loaded.is_empty() {
                    view! { <EmptyState text="No audit entries yet."/> }.into_any()
                } else {
                    loaded.items.into_iter().map(audit_row).collect::<Vec<_>>().into_any()
                }}
            }
            .into_any(),
        }}
    }
}

fn audit_row(entry: AuditLog) -> impl IntoView {
    let target = match &entry.entity_id {
        Some(id) => format!("{} {id}", entry.entity),
        None => entry.entity.clone(),
    };
    view! {
        <article class="audit-row">
            <div class="audit-row__head">
                <span class="pill">{entry.action}</span>
                <span class="audit-row__target">{target}</span>
                <span class="audit-row__actor">{text_or(entry.actor.as_deref(), "system")}</span>
                <time class="audit-row__time">{format_datetime(&entry.created_at)}</time>
            </div>
            {entry.details.map(|details| view! { <JsonBlock value=Some(details) empty=""/> })}
        </article>
    }
}
