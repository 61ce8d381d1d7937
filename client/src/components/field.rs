//! Controlled form inputs.
//!
//! Every input shows `value` and reports each keystroke through
//! `on_input`; the page's draft is the only source of truth.

use leptos::prelude::*;

#[component]
pub fn TextInput(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = Signal::stored(false))] required: Signal<bool>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = None)] helper: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">
                {label}
                <Show when=move || required.get()>
                    <span class="field__required">" *"</span>
                </Show>
            </span>
            <input
                class="field__input"
                type=input_type
                step=(input_type == "number").then_some("any")
                placeholder=placeholder
                required=move || required.get()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {helper.map(|text| view! { <span class="field__helper">{text}</span> })}
        </label>
    }
}

#[component]
pub fn SelectInput(
    label: &'static str,
    options: Signal<Vec<(String, String)>>,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(default = None)] helper: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || value.get()
                on:change=move |ev| on_input.run(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(key, text)| {
                            let selected = key == current;
                            view! { <option value=key selected=selected>{text}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            {helper.map(|text| view! { <span class="field__helper">{text}</span> })}
        </label>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="field field--wide">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input"
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Static option table as select options.
pub fn static_options(table: &'static [(&'static str, &'static str)]) -> Signal<Vec<(String, String)>> {
    Signal::stored(table.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect())
}
