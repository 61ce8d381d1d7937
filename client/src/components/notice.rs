//! Small status blocks: error banner, empty state, label/value row, and
//! opaque JSON display.

use leptos::prelude::*;
use records::OpaqueValue;

use crate::util::format::NOT_AVAILABLE;

/// Red inline message box. Renders nothing while `message` is `None`.
#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="notice notice--error" role="alert">{move || message.get().unwrap_or_default()}</div>
        </Show>
    }
}

/// Static error text, for values already resolved when rendering.
#[component]
pub fn ErrorText(message: String) -> impl IntoView {
    view! { <div class="notice notice--error" role="alert">{message}</div> }
}

#[component]
pub fn EmptyState(text: &'static str) -> impl IntoView {
    view! { <div class="notice notice--empty">{text}</div> }
}

#[component]
pub fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    let value = if value.trim().is_empty() { NOT_AVAILABLE.to_owned() } else { value };
    view! {
        <div class="info-row">
            <p class="info-row__label">{label}</p>
            <p class="info-row__value">{value}</p>
        </div>
    }
}

/// Pretty-printed structured value. The contents are never interpreted.
#[component]
pub fn JsonBlock(value: Option<OpaqueValue>, empty: &'static str) -> impl IntoView {
    let text = value.filter(|v| !v.is_empty()).map_or_else(|| empty.to_owned(), |v| v.pretty());
    view! { <pre class="json-block">{text}</pre> }
}
