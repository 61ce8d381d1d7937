//! Component catalog: list, create and edit.
//!
//! The catalog has no single-record endpoint, so the edit page loads the
//! full list and picks the record by id.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::Component;

use super::not_found::NotFoundPage;
use crate::components::field::{TextArea, TextInput};
use crate::components::layout::PageHeader;
use crate::components::notice::{EmptyState, ErrorText};
use crate::net::loaders::{find_component, load_list};
use crate::net::{actions, spawn, use_api};
use crate::state::catalog_draft::ComponentDraft;
use crate::state::form::FormState;
use crate::state::listing::{Loaded, Lookup};
use crate::util::format::{format_date, join_list, text_or};

#[component]
pub fn ComponentsPage() -> impl IntoView {
    let api = use_api();
    let components = RwSignal::new(None::<Loaded<Component>>);

    spawn(async move {
        components.set(Some(load_list("components", api.client().list_components()).await));
    });

    view! {
        <PageHeader
            eyebrow="Catalog"
            title="Components".to_owned()
            subtitle="Reusable building blocks referenced from templates and passports.".to_owned()
            action=("/catalog/components/new", "New component")
        />
        {move || match components.get() {
            None => view! { <p class="loading">"Loading components..."</p> }.into_any(),
            Some(loaded) if loaded.is_empty() => {
                view! { <EmptyState text="No components yet."/> }.into_any()
            }
            Some(loaded) => view! {
                <div class="card-grid">
                    {loaded.items.into_iter().map(component_card).collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        }}
    }
}

fn component_card(component: Component) -> impl IntoView {
    let href = format!("/catalog/components/{}", component.id);
    view! {
        <article class="card">
            <p class="card__eyebrow">{text_or(component.kind.as_deref(), "component")}</p>
            <h3 class="card__title">{component.name}</h3>
            <p class="card__subtitle">{text_or(component.description.as_deref(), "No description")}</p>
            <dl class="card__facts">
                <div><dt>"Test reports"</dt><dd>{join_list(&component.test_report_refs)}</dd></div>
                <div><dt>"Hazardous"</dt><dd>{text_or(component.hazardous_substances.as_deref(), "None listed")}</dd></div>
                <div><dt>"Updated"</dt><dd>{format_date(&component.updated_at)}</dd></div>
            </dl>
            <a class="btn" href=href>"Edit"</a>
        </article>
    }
}

#[component]
pub fn ComponentNewPage() -> impl IntoView {
    let form = RwSignal::new(FormState::new(ComponentDraft::default()));
    view! {
        <PageHeader eyebrow="Catalog" title="New component".to_owned()/>
        <ComponentForm form=form id=None submit_label="Create component"/>
    }
}

#[component]
pub fn ComponentEditPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let form = RwSignal::new(FormState::new(ComponentDraft::default()));
    let loaded = RwSignal::new(Lookup::<String>::Loading);

    Effect::new(move || {
        let id = params.read().get("id");
        loaded.set(Lookup::pending_for(id.as_deref()));
        let Some(id) = id else {
            return;
        };
        spawn(async move {
            match find_component(&api.client(), &id).await {
                Some(component) => {
                    form.set(FormState::new(ComponentDraft::from_component(&component)));
                    loaded.set(Lookup::Found(component.id));
                }
                None => loaded.set(Lookup::Missing),
            }
        });
    });

    move || match loaded.get() {
        Lookup::Loading => view! { <p class="loading">"Loading component..."</p> }.into_any(),
        Lookup::Missing => view! { <NotFoundPage/> }.into_any(),
        Lookup::Found(id) => view! {
            <PageHeader eyebrow="Catalog" title="Edit component".to_owned()/>
            <ComponentForm form=form id=Some(id) submit_label="Save changes"/>
        }
        .into_any(),
    }
}

/// Shared create/edit form; `id` selects PATCH over POST. Navigates back to
/// the list on success.
#[component]
fn ComponentForm(
    form: RwSignal<FormState<ComponentDraft>>,
    id: Option<String>,
    submit_label: &'static str,
) -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let id = StoredValue::new(id);
    let done = RwSignal::new(false);

    Effect::new(move || {
        if done.get() {
            navigate("/catalog/components", NavigateOptions::default());
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
            match actions::save_component(&api.client(), id.as_deref(), &draft).await {
                Ok(_) => {
                    form.update(|f| f.finish_ok(None));
                    done.set(true);
                }
                Err(message) => form.update(|f| f.finish_err(message)),
            }
        });
    };

    let text = |read: fn(&ComponentDraft) -> String| Signal::derive(move || form.with(|f| read(&f.draft)));
    let busy = move || form.with(FormState::is_busy);

    view! {
        <form class="form" on:submit=on_submit>
            <div class="form__grid">
                <TextInput
                    label="Name"
                    required=Signal::stored(true)
                    value=text(|d| d.name.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.name = v)))
                />
                <TextInput
                    label="Kind"
                    placeholder="cell, module, bms..."
                    value=text(|d| d.kind.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.kind = v)))
                />
                <TextInput
                    label="Carbon footprint reference"
                    value=text(|d| d.carbon_footprint_ref.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.carbon_footprint_ref = v)))
                />
                <TextInput
                    label="Hazardous substances"
                    value=text(|d| d.hazardous_substances.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.hazardous_substances = v)))
                />
            </div>
            <TextArea
                label="Description"
                value=text(|d| d.description.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.description = v)))
            />
            <TextArea
                label="Test report references"
                placeholder="One per line or comma-separated"
                value=text(|d| d.test_report_refs.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.test_report_refs = v)))
            />
            {move || form.with(|f| f.error.clone()).map(|message| view! { <ErrorText message=message/> })}
            <button class="btn btn--primary" type="submit" disabled=busy>
                {move || if busy() { "Saving..." } else { submit_label }}
            </button>
        </form>
    }
}
