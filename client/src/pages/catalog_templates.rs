//! Product template catalog: list, create and edit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::ProductTemplate;

use super::not_found::NotFoundPage;
use crate::components::field::{SelectInput, TextInput, static_options};
use crate::components::layout::PageHeader;
use crate::components::notice::{EmptyState, ErrorText};
use crate::net::loaders::{find_template, load_list};
use crate::net::{Api, actions, spawn, use_api};
use crate::state::catalog_draft::TemplateDraft;
use crate::state::fields::BATTERY_CATEGORIES;
use crate::state::form::FormState;
use crate::state::listing::{Loaded, Lookup};
use crate::util::format::{value_or_na, with_unit};

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let api = use_api();
    let templates = RwSignal::new(None::<Loaded<ProductTemplate>>);

    spawn(async move {
        templates.set(Some(load_list("templates", api.client().list_templates()).await));
    });

    view! {
        <PageHeader
            eyebrow="Catalog"
            title="Product templates".to_owned()
            subtitle="Defaults applied server-side when a passport is created from a template.".to_owned()
            action=("/catalog/templates/new", "New template")
        />
        {move || match templates.get() {
            None => view! { <p class="loading">"Loading templates..."</p> }.into_any(),
            Some(loaded) if loaded.is_empty() => view! { <EmptyState text="No templates yet."/> }.into_any(),
            Some(loaded) => view! {
                <div class="card-grid">
                    {loaded.items.into_iter().map(|t| template_card(api, t)).collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        }}
    }
}

fn template_card(api: Api, template: ProductTemplate) -> impl IntoView {
    let edit_href = format!("/catalog/templates/{}", template.id);
    let dop_href = api.client().dop_pdf_url(&template.id);
    view! {
        <article class="card">
            <p class="card__eyebrow">{template.battery_category}</p>
            <h3 class="card__title">{template.name}</h3>
            <p class="card__subtitle">{template.battery_model}</p>
            <dl class="card__facts">
                <div><dt>"Manufacturer"</dt><dd>{value_or_na(template.manufacturer_name)}</dd></div>
                <div><dt>"Capacity"</dt><dd>{with_unit(template.rated_capacity_kwh, "kWh")}</dd></div>
                <div><dt>"CO2e"</dt><dd>{with_unit(template.carbon_footprint_kg_per_kwh, "kg/kWh")}</dd></div>
            </dl>
            <div class="card__actions">
                <a class="btn" href=edit_href>"Edit"</a>
                <a class="btn" href=dop_href target="_blank" rel="noopener">"DoP PDF"</a>
            </div>
        </article>
    }
}

#[component]
pub fn TemplateNewPage() -> impl IntoView {
    let form = RwSignal::new(FormState::new(TemplateDraft::default()));
    view! {
        <PageHeader eyebrow="Catalog" title="New template".to_owned()/>
        <TemplateForm form=form id=None submit_label="Create template"/>
    }
}

#[component]
pub fn TemplateEditPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let form = RwSignal::new(FormState::new(TemplateDraft::default()));
    let loaded = RwSignal::new(Lookup::<String>::Loading);

    Effect::new(move || {
        let id = params.read().get("id");
        loaded.set(Lookup::pending_for(id.as_deref()));
        let Some(id) = id else {
            return;
        };
        spawn(async move {
            match find_template(&api.client(), &id).await {
                Some(template) => {
                    form.set(FormState::new(TemplateDraft::from_template(&template)));
                    loaded.set(Lookup::Found(template.id));
                }
                None => loaded.set(Lookup::Missing),
            }
        });
    });

    move || match loaded.get() {
        Lookup::Loading => view! { <p class="loading">"Loading template..."</p> }.into_any(),
        Lookup::Missing => view! { <NotFoundPage/> }.into_any(),
        Lookup::Found(id) => view! {
            <PageHeader eyebrow="Catalog" title="Edit template".to_owned()/>
            <TemplateForm form=form id=Some(id) submit_label="Save changes"/>
        }
        .into_any(),
    }
}

type Getter = fn(&TemplateDraft) -> String;
type Setter = fn(&mut TemplateDraft, String);

const TEXT_FIELDS: [(&str, &str, bool, Getter, Setter); 11] = [
    ("Name", "text", true, |d| d.name.clone(), |d, v| d.name = v),
    ("Battery model", "text", true, |d| d.battery_model.clone(), |d, v| d.battery_model = v),
    ("Manufacturer name", "text", false, |d| d.manufacturer_name.clone(), |d, v| d.manufacturer_name = v),
    ("Manufacturer address", "text", false, |d| d.manufacturer_address.clone(), |d, v| d.manufacturer_address = v),
    ("GTIN", "text", false, |d| d.gtin.clone(), |d, v| d.gtin = v),
    ("Rated capacity (kWh)", "number", false, |d| d.rated_capacity_kwh.clone(), |d, v| d.rated_capacity_kwh = v),
    ("Weight (kg)", "number", false, |d| d.battery_weight_kg.clone(), |d, v| d.battery_weight_kg = v),
    (
        "Carbon footprint (kg CO2e/kWh)",
        "number",
        false,
        |d| d.carbon_footprint_kg_per_kwh.clone(),
        |d, v| d.carbon_footprint_kg_per_kwh = v,
    ),
    ("Carbon footprint class", "text", false, |d| d.carbon_footprint_class.clone(), |d, v| d.carbon_footprint_class = v),
    (
        "Expected lifetime (cycles)",
        "number",
        false,
        |d| d.expected_lifetime_cycles.clone(),
        |d, v| d.expected_lifetime_cycles = v,
    ),
    (
        "Expected lifetime (years)",
        "number",
        false,
        |d| d.expected_lifetime_years.clone(),
        |d, v| d.expected_lifetime_years = v,
    ),
];

#[component]
fn TemplateForm(form: RwSignal<FormState<TemplateDraft>>, id: Option<String>, submit_label: &'static str) -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let id = StoredValue::new(id);
    let done = RwSignal::new(false);

    Effect::new(move || {
        if done.get() {
            navigate("/catalog/templates", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut snapshot = None;
        form.update(|f| snapshot = f.begin_submit());
        let Some(draft) = snapshot else {
            return;
        };
        spawn(async move {
            let id = id.get_value();
            match actions::save_template(&api.client(), id.as_deref(), &draft).await {
                Ok(_) => {
                    form.update(|f| f.finish_ok(None));
                    done.set(true);
                }
                Err(message) => form.update(|f| f.finish_err(message)),
            }
        });
    };

    let busy = move || form.with(FormState::is_busy);
    let inputs = TEXT_FIELDS
        .into_iter()
        .map(|(label, input_type, required, get, set)| {
            view! {
                <TextInput
                    label=label
                    input_type=input_type
                    required=Signal::stored(required)
                    value=Signal::derive(move || form.with(|f| get(&f.draft)))
                    on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| set(d, v))))
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <form class="form" on:submit=on_submit>
            <div class="form__grid">
                <SelectInput
                    label="Battery category"
                    options=static_options(BATTERY_CATEGORIES)
                    value=Signal::derive(move || form.with(|f| f.draft.battery_category.clone()))
                    on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.battery_category = v)))
                />
                {inputs}
            </div>
            {move || form.with(|f| f.error.clone()).map(|message| view! { <ErrorText message=message/> })}
            <button class="btn btn--primary" type="submit" disabled=busy>
                {move || if busy() { "Saving..." } else { submit_label }}
            </button>
        </form>
    }
}
