//! Minor compliance registers on one page.
//!
//! Each section has a quick-add that posts the register's starter record.
//! Any add failure goes to one shared banner; every success reloads all
//! five lists.

use leptos::prelude::*;
use records::{AiSystem, ComplianceRecord, CraProduct, EpdRecord, EudrSupplier, Nis2Attestation};

use crate::components::layout::PageHeader;
use crate::components::notice::ErrorBanner;
use crate::net::loaders::{ComplianceLists, load_compliance};
use crate::net::{Api, actions, spawn, use_api};
use crate::state::listing::Loaded;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Register {
    Cra,
    Eudr,
    Ai,
    Epd,
    Nis2,
}

fn reload(api: Api, lists: RwSignal<Option<ComplianceLists>>) {
    spawn(async move {
        lists.set(Some(load_compliance(&api.client()).await));
    });
}

async fn add(api: Api, register: Register) -> Result<(), String> {
    let client = api.client();
    match register {
        Register::Cra => actions::quick_add::<CraProduct>(&client).await.map(drop),
        Register::Eudr => actions::quick_add::<EudrSupplier>(&client).await.map(drop),
        Register::Ai => actions::quick_add::<AiSystem>(&client).await.map(drop),
        Register::Epd => actions::quick_add::<EpdRecord>(&client).await.map(drop),
        Register::Nis2 => actions::quick_add::<Nis2Attestation>(&client).await.map(drop),
    }
}

#[component]
pub fn CompliancePage() -> impl IntoView {
    let api = use_api();
    let lists = RwSignal::new(None::<ComplianceLists>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    reload(api, lists);

    let on_add = Callback::new(move |register: Register| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            match add(api, register).await {
                Ok(()) => reload(api, lists),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    });

    view! {
        <PageHeader
            eyebrow="Compliance"
            title="Other regimes".to_owned()
            subtitle="CRA, EUDR, AI Act, EPD and NIS2 registers.".to_owned()
        />
        <ErrorBanner message=error/>
        {move || match lists.get() {
            None => view! { <p class="loading">"Loading registers..."</p> }.into_any(),
            Some(lists) => view! {
                <div class="card-grid">
                    {section(lists.cra, Register::Cra, on_add, busy)}
                    {section(lists.eudr, Register::Eudr, on_add, busy)}
                    {section(lists.ai, Register::Ai, on_add, busy)}
                    {section(lists.epd, Register::Epd, on_add, busy)}
                    {section(lists.nis2, Register::Nis2, on_add, busy)}
                </div>
            }
            .into_any(),
        }}
    }
}

fn section<R: ComplianceRecord>(
    loaded: Loaded<R>,
    register: Register,
    on_add: Callback<Register>,
    busy: RwSignal<bool>,
) -> impl IntoView {
    let rows = loaded
        .items
        .iter()
        .map(|record| view! { <li title=record.id().to_owned()>{record.summary()}</li> })
        .collect::<Vec<_>>();
    let empty = loaded.items.is_empty();
    view! {
        <section class="card compliance-section">
            <div class="compliance-section__head">
                <h2 class="card__title">{R::TITLE}</h2>
                <button
                    class="btn"
                    type="button"
                    disabled=move || busy.get()
                    on:click=move |_| on_add.run(register)
                >
                    "Quick add"
                </button>
            </div>
            {if empty {
                view! { <p class="card__meta">"Nothing recorded yet."</p> }.into_any()
            } else {
                view! { <ul class="compliance-section__list">{rows}</ul> }.into_any()
            }}
        </section>
    }
}
