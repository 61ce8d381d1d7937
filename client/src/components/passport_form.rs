//! Passport create/edit form.
//!
//! DESIGN
//! ======
//! The form edits a `FormState<PassportDraft>` owned by the page and hands a
//! snapshot to `on_submit` once `begin_submit` accepts it. The page performs
//! the request and records the outcome, so the same form serves the create
//! and edit routes.
//!
//! With a template selected, required markers are dropped and the hint
//! explains that defaults are applied by the server. The visible draft is
//! never prefilled from the template.

use leptos::prelude::*;
use records::ProductTemplate;

use super::field::{SelectInput, TextArea, TextInput, static_options};
use crate::state::fields::FieldKind;
use crate::state::form::FormState;
use crate::state::passport_draft::{PassportDraft, PassportField};

#[component]
pub fn PassportForm(
    form: RwSignal<FormState<PassportDraft>>,
    fields: Vec<PassportField>,
    on_submit: Callback<PassportDraft>,
    submit_label: &'static str,
    busy_label: &'static str,
    /// Template picker source; `None` hides the picker.
    #[prop(optional)]
    templates: Option<RwSignal<Vec<ProductTemplate>>>,
    /// Show the public and restricted note inputs.
    #[prop(optional)]
    notes: bool,
) -> impl IntoView {
    let busy = move || form.with(FormState::is_busy);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut snapshot = None;
        form.update(|f| snapshot = f.begin_submit());
        if let Some(draft) = snapshot {
            on_submit.run(draft);
        }
    };

    let template_picker = templates.map(|templates| {
        let options = Signal::derive(move || {
            templates
                .get()
                .into_iter()
                .map(|t| {
                    let text = format!("{} ({})", t.name, t.battery_model);
                    (t.id, text)
                })
                .collect::<Vec<_>>()
        });
        view! {
            <div class="form__template">
                <SelectInput
                    label="Start from template"
                    options=options
                    value=Signal::derive(move || form.with(|f| f.draft.template_id.clone()))
                    on_input=Callback::new(move |id: String| form.update(|f| f.edit(|d| d.template_id = id)))
                    placeholder="No template"
                />
                <Show when=move || form.with(|f| f.draft.uses_template())>
                    <p class="form__hint">
                        "Template defaults are applied when the passport is created. Only the fields you fill in here are sent as overrides."
                    </p>
                </Show>
            </div>
        }
    });

    let inputs = fields
        .into_iter()
        .map(|field| {
            let value = Signal::derive(move || form.with(|f| f.draft.get(field).to_owned()));
            let on_input = Callback::new(move |text: String| form.update(|f| f.edit(|d| d.set(field, text))));
            match field.kind() {
                FieldKind::Select(table) => view! {
                    <SelectInput
                        label=field.label()
                        options=static_options(table)
                        value=value
                        on_input=on_input
                        helper=field.helper()
                    />
                }
                .into_any(),
                kind => view! {
                    <TextInput
                        label=field.label()
                        input_type=kind.input_type()
                        value=value
                        on_input=on_input
                        required=Signal::derive(move || form.with(|f| f.draft.is_required(field)))
                        helper=field.helper()
                    />
                }
                .into_any(),
            }
        })
        .collect::<Vec<_>>();

    let note_inputs = notes.then(|| {
        view! {
            <div class="form__notes">
                <TextArea
                    label="Public extras"
                    placeholder="Shown on the public scan page"
                    value=Signal::derive(move || form.with(|f| f.draft.public_note.clone()))
                    on_input=Callback::new(move |text: String| form.update(|f| f.edit(|d| d.public_note = text)))
                />
                <TextArea
                    label="Additional notes"
                    placeholder="Restricted; only visible in the registry"
                    value=Signal::derive(move || form.with(|f| f.draft.restricted_note.clone()))
                    on_input=Callback::new(move |text: String| form.update(|f| f.edit(|d| d.restricted_note = text)))
                />
            </div>
        }
    });

    view! {
        <form class="form passport-form" on:submit=on_form_submit>
            {template_picker}
            <div class="form__grid">{inputs}</div>
            {note_inputs}
            <Show when=move || form.with(|f| f.error.is_some())>
                <div class="notice notice--error" role="alert">
                    {move || form.with(|f| f.error.clone().unwrap_or_default())}
                </div>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=busy>
                {move || if busy() { busy_label } else { submit_label }}
            </button>
        </form>
    }
}
