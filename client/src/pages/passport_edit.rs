//! Edit an existing passport. Only touched fields are sent.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::not_found::NotFoundPage;
use crate::components::layout::PageHeader;
use crate::components::passport_form::PassportForm;
use crate::net::actions;
use crate::net::{spawn, use_api};
use crate::state::form::FormState;
use crate::state::listing::{Lookup, find_one};
use crate::state::passport_draft::{PassportDraft, PassportField};

#[component]
pub fn PassportEditPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(PassportDraft::default()));
    let loaded = RwSignal::new(Lookup::<String>::Loading);
    let saved_id = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = params.read().get("id");
        loaded.set(Lookup::pending_for(id.as_deref()));
        let Some(id) = id else {
            return;
        };
        spawn(async move {
            match find_one(api.client().get_passport(&id)).await {
                Some(passport) => {
                    form.set(FormState::new(PassportDraft::from_passport(&passport)));
                    loaded.set(Lookup::Found(passport.id));
                }
                None => loaded.set(Lookup::Missing),
            }
        });
    });

    Effect::new(move || {
        if let Some(id) = saved_id.get() {
            navigate(&format!("/passports/{id}"), NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |draft: PassportDraft| {
        let Lookup::Found(id) = loaded.get_untracked() else {
            return;
        };
        spawn(async move {
            match actions::update_passport(&api.client(), &id, &draft).await {
                Ok(passport) => {
                    form.update(|f| f.finish_ok(None));
                    saved_id.set(Some(passport.id));
                }
                Err(message) => form.update(|f| f.finish_err(message)),
            }
        });
    });

    move || match loaded.get() {
        Lookup::Loading => view! { <p class="loading">"Loading passport..."</p> }.into_any(),
        Lookup::Missing => view! { <NotFoundPage/> }.into_any(),
        Lookup::Found(id) => view! {
            <PageHeader
                eyebrow="Edit passport"
                title=form.with_untracked(|f| f.draft.get(PassportField::BatteryModel).to_owned())
                subtitle=format!("Only changed fields are saved. Passport {id}")
            />
            <PassportForm
                form=form
                fields=PassportField::ALL.to_vec()
                on_submit=on_submit
                submit_label="Save changes"
                busy_label="Saving..."
            />
        }
        .into_any(),
    }
}
