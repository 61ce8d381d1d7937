//! Registry card for one passport.

use leptos::prelude::*;
use records::BatteryPassport;

use crate::util::format::{format_date, with_unit};

#[component]
pub fn PassportCard(passport: BatteryPassport) -> impl IntoView {
    let href = format!("/passports/{}", passport.id);
    let tier = format!("{} | {}", passport.battery_category, passport.battery_status);
    let footprint = with_unit(Some(passport.carbon_footprint_kg_per_kwh), "kg/kWh");

    view! {
        <article class="card passport-card">
            <div class="passport-card__head">
                <div>
                    <p class="card__eyebrow">{tier}</p>
                    <h3 class="card__title">{passport.battery_model}</h3>
                    <p class="card__subtitle">{passport.manufacturer_name}</p>
                </div>
                <span class="pill pill--ok">"QR ready"</span>
            </div>
            <dl class="passport-card__stats">
                <div><dt>"Capacity"</dt><dd>{with_unit(Some(passport.rated_capacity_kwh), "kWh")}</dd></div>
                <div><dt>"Weight"</dt><dd>{with_unit(Some(passport.battery_weight_kg), "kg")}</dd></div>
                <div><dt>"CO2e"</dt><dd>{footprint}</dd></div>
                <div><dt>"Created"</dt><dd>{format_date(&passport.created_at)}</dd></div>
            </dl>
            <a class="btn" href=href>"View passport"</a>
        </article>
    }
}
