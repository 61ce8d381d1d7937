//! Restricted registry view of one passport, with its QR code.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::BatteryPassport;

use super::not_found::NotFoundPage;
use crate::components::passport_view::RestrictedPassportView;
use crate::net::{spawn, use_api};
use crate::state::listing::{Lookup, find_one};

#[component]
pub fn PassportDetailPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let passport = RwSignal::new(Lookup::<BatteryPassport>::Loading);

    Effect::new(move || {
        let id = params.read().get("id");
        passport.set(Lookup::pending_for(id.as_deref()));
        let Some(id) = id else {
            return;
        };
        spawn(async move {
            passport.set(find_one(api.client().get_passport(&id)).await.into());
        });
    });

    move || match passport.get() {
        Lookup::Loading => view! { <p class="loading">"Loading passport..."</p> }.into_any(),
        Lookup::Missing => view! { <NotFoundPage/> }.into_any(),
        Lookup::Found(passport) => {
            let config = api.config();
            let client = api.client();
            let qr_url = client.passport_qr_url(&passport.id);
            let scan_url = config.scan_url(&passport.id);
            view! { <RestrictedPassportView passport=passport qr_url=qr_url scan_url=scan_url/> }.into_any()
        }
    }
}
