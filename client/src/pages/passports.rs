//! Passport registry list.

use leptos::prelude::*;
use records::BatteryPassport;

use crate::components::layout::PageHeader;
use crate::components::notice::{EmptyState, ErrorText};
use crate::components::passport_card::PassportCard;
use crate::net::loaders::load_list;
use crate::net::{spawn, use_api};
use crate::state::listing::Loaded;

#[component]
pub fn PassportsPage() -> impl IntoView {
    let api = use_api();
    let passports = RwSignal::new(None::<Loaded<BatteryPassport>>);

    spawn(async move {
        let client = api.client();
        passports.set(Some(load_list("passports", client.list_passports()).await));
    });

    view! {
        <PageHeader
            eyebrow="Passport registry"
            title="Battery passports".to_owned()
            subtitle="Public tier is QR-ready. Restricted data stays server-side.".to_owned()
            action=("/passports/new", "New passport")
        />
        {move || match passports.get() {
            None => view! { <p class="loading">"Loading passports..."</p> }.into_any(),
            Some(loaded) => view! {
                {loaded.error.map(|message| view! { <ErrorText message=message/> })}
                {if loaded.items.is_empty() {
                    view! {
                        <EmptyState text="No passports yet. Start with a single record or import in bulk."/>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            {loaded
                                .items
                                .into_iter()
                                .map(|passport| view! { <PassportCard passport=passport/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }}
            }
            .into_any(),
        }}
    }
}
