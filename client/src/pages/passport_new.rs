//! New passport page: plain or template-assisted create.
//!
//! Success navigates to the new record's detail page. Failure leaves the
//! draft untouched and shows the backend's message.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::ProductTemplate;

use crate::components::layout::PageHeader;
use crate::components::passport_form::PassportForm;
use crate::net::actions;
use crate::net::{spawn, use_api};
use crate::state::form::FormState;
use crate::state::passport_draft::{PassportDraft, PassportField};
use crate::util::today::today_iso;

#[component]
pub fn PassportNewPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(PassportDraft::new(&today_iso())));
    let templates = RwSignal::new(Vec::<ProductTemplate>::new());
    let created_id = RwSignal::new(None::<String>);

    spawn(async move {
        // The picker is optional; a failed fetch just leaves it empty.
        if let Ok(items) = api.client().list_templates().await {
            templates.set(items);
        }
    });

    Effect::new(move || {
        if let Some(id) = created_id.get() {
            navigate(&format!("/passports/{id}"), NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |draft: PassportDraft| {
        spawn(async move {
            match actions::create_passport(&api.client(), &draft).await {
                Ok(passport) => {
                    form.update(|f| f.finish_ok(None));
                    created_id.set(Some(passport.id));
                }
                Err(message) => form.update(|f| f.finish_err(message)),
            }
        });
    });

    let fields = PassportField::ALL.into_iter().filter(|f| f.on_create_form()).collect::<Vec<_>>();

    view! {
        <PageHeader
            eyebrow="New passport"
            title="Create a battery passport".to_owned()
            subtitle="Fields marked * are Annex XIII mandatory public data.".to_owned()
        />
        <PassportForm
            form=form
            fields=fields
            on_submit=on_submit
            submit_label="Create passport"
            busy_label="Saving..."
            templates=templates
            notes=true
        />
    }
}
