//! Public QR-scan destination.
//!
//! Only the public projection is ever fetched here, so restricted fields are
//! unavailable to this page by construction.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::PublicPassport;

use super::not_found::NotFoundPage;
use crate::components::passport_view::PublicPassportView;
use crate::net::{spawn, use_api};
use crate::state::listing::{Lookup, find_one};

#[component]
pub fn ScanPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let passport = RwSignal::new(Lookup::<PublicPassport>::Loading);

    Effect::new(move || {
        let id = params.read().get("id");
        passport.set(Lookup::pending_for(id.as_deref()));
        let Some(id) = id else {
            return;
        };
        spawn(async move {
            passport.set(find_one(api.client().get_public_passport(&id)).await.into());
        });
    });

    move || match passport.get() {
        Lookup::Loading => view! { <p class="loading">"Loading passport..."</p> }.into_any(),
        Lookup::Missing => view! { <NotFoundPage/> }.into_any(),
        Lookup::Found(passport) => view! { <PublicPassportView passport=passport/> }.into_any(),
    }
}
