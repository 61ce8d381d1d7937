//! CBAM reference data: supplier list and emission factor library.
//!
//! Both create forms reset to blank on success and reload their list.

use leptos::prelude::*;
use records::{CbamFactor, CbamSupplier};

use crate::components::field::TextInput;
use crate::components::layout::PageHeader;
use crate::components::notice::{EmptyState, ErrorText};
use crate::net::loaders::load_list;
use crate::net::{Api, actions, spawn, use_api};
use crate::state::cbam_draft::{FactorDraft, SupplierDraft};
use crate::state::form::FormState;
use crate::state::listing::Loaded;
use crate::util::format::{text_or, value_or_na};

fn reload_suppliers(api: Api, suppliers: RwSignal<Option<Loaded<CbamSupplier>>>) {
    spawn(async move {
        suppliers.set(Some(load_list("CBAM suppliers", api.client().list_cbam_suppliers()).await));
    });
}

fn reload_factors(api: Api, factors: RwSignal<Option<Loaded<CbamFactor>>>) {
    spawn(async move {
        factors.set(Some(load_list("CBAM factors", api.client().list_cbam_factors()).await));
    });
}

#[component]
pub fn CbamSuppliersPage() -> impl IntoView {
    let api = use_api();
    let suppliers = RwSignal::new(None::<Loaded<CbamSupplier>>);
    let form = RwSignal::new(FormState::new(SupplierDraft::default()));

    reload_suppliers(api, suppliers);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut snapshot = None;
        form.update(|f| snapshot = f.begin_submit());
        let Some(draft) = snapshot else {
            return;
        };
        spawn(async move {
            match actions::create_supplier(&api.client(), &draft).await {
                Ok(saved) => {
                    form.update(|f| {
                        f.finish_ok(Some(format!("Added {}", saved.name)));
                        f.reset(SupplierDraft::default());
                    });
                    reload_suppliers(api, suppliers);
                }
                Err(message) => form.update(|f| f.finish_err(message)),
            }
        });
    };
    let busy = move || form.with(FormState::is_busy);

    view! {
        <PageHeader
            eyebrow="CBAM"
            title="Suppliers".to_owned()
            subtitle="A supplier default factor applies when a line has no verified factor.".to_owned()
        />
        <form class="form form--inline" on:submit=on_submit>
            <TextInput
                label="Name"
                required=Signal::stored(true)
                value=Signal::derive(move || form.with(|f| f.draft.name.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.name = v)))
            />
            <TextInput
                label="Country"
                value=Signal::derive(move || form.with(|f| f.draft.country.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.country = v)))
            />
            <TextInput
                label="Default EF (tCO2e/t)"
                input_type="number"
                value=Signal::derive(move || form.with(|f| f.draft.default_emission_factor.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.default_emission_factor = v)))
            />
            <TextInput
                label="Contact"
                value=Signal::derive(move || form.with(|f| f.draft.contact.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.contact = v)))
            />
            <button class="btn btn--primary" type="submit" disabled=busy>
                {move || if busy() { "Saving..." } else { "Add supplier" }}
            </button>
        </form>
        {move || form.with(|f| f.error.clone()).map(|message| view! { <ErrorText message=message/> })}
        {move || form.with(|f| f.notice.clone()).map(|text| view! { <p class="notice notice--ok">{text}</p> })}
        {move || match suppliers.get() {
            None => view! { <p class="loading">"Loading suppliers..."</p> }.into_any(),
            Some(loaded) if loaded.is_empty() => view! { <EmptyState text="No suppliers yet."/> }.into_any(),
            Some(loaded) => view! {
                <table class="table">
                    <thead>
                        <tr><th>"Name"</th><th>"Country"</th><th>"Default EF"</th><th>"Contact"</th></tr>
                    </thead>
                    <tbody>
                        {loaded
                            .items
                            .into_iter()
                            .map(|s| view! {
                                <tr>
                                    <td>{s.name}</td>
                                    <td>{value_or_na(s.country)}</td>
                                    <td>{value_or_na(s.default_emission_factor)}</td>
                                    <td>{value_or_na(s.contact)}</td>
                                </tr>
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn CbamFactorsPage() -> impl IntoView {
    let api = use_api();
    let factors = RwSignal::new(None::<Loaded<CbamFactor>>);
    let form = RwSignal::new(FormState::new(FactorDraft::default()));

    reload_factors(api, factors);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut snapshot = None;
        form.update(|f| snapshot = f.begin_submit());
        let Some(draft) = snapshot else {
            return;
        };
        spawn(async move {
            match actions::create_factor(&api.client(), &draft).await {
                Ok(saved) => {
                    form.update(|f| {
                        f.finish_ok(Some(format!("Saved factor for {}", saved.cn_prefix)));
                        f.reset(FactorDraft::default());
                    });
                    reload_factors(api, factors);
                }
                Err(message) => form.update(|f| f.finish_err(message)),
            }
        });
    };
    let busy = move || form.with(FormState::is_busy);

    view! {
        <PageHeader
            eyebrow="CBAM"
            title="Emission factor library".to_owned()
            subtitle="Organisation factors override the built-in defaults for a CN code prefix.".to_owned()
        />
        <form class="form form--inline" on:submit=on_submit>
            <TextInput
                label="CN prefix"
                placeholder="7208"
                required=Signal::stored(true)
                value=Signal::derive(move || form.with(|f| f.draft.cn_prefix.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.cn_prefix = v)))
            />
            <TextInput
                label="Emission factor (tCO2e/t)"
                input_type="number"
                required=Signal::stored(true)
                value=Signal::derive(move || form.with(|f| f.draft.emission_factor.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.emission_factor = v)))
            />
            <TextInput
                label="Source"
                value=Signal::derive(move || form.with(|f| f.draft.source.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.source = v)))
            />
            <button class="btn btn--primary" type="submit" disabled=busy>
                {move || if busy() { "Saving..." } else { "Add factor" }}
            </button>
        </form>
        {move || form.with(|f| f.error.clone()).map(|message| view! { <ErrorText message=message/> })}
        {move || form.with(|f| f.notice.clone()).map(|text| view! { <p class="notice notice--ok">{text}</p> })}
        {move || match factors.get() {
            None => view! { <p class="loading">"Loading factors..."</p> }.into_any(),
            Some(loaded) if loaded.is_empty() => view! { <EmptyState text="No organisation factors yet."/> }.into_any(),
            Some(loaded) => view! {
                <table class="table">
                    <thead>
                        <tr><th>"CN prefix"</th><th>"Factor"</th><th>"Source"</th></tr>
                    </thead>
                    <tbody>
                        {loaded
                            .items
                            .into_iter()
                            .map(|f| view! {
                                <tr>
                                    <td>{f.cn_prefix}</td>
                                    <td>{f.emission_factor}</td>
                                    <td>{text_or(f.source.as_deref(), "Org")}</td>
                                </tr>
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_any(),
        }}
    }
}
