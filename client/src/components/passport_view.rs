//! Passport detail renderings for the two visibility tiers.
//!
//! DESIGN
//! ======
//! `PublicPassportView` takes a `PublicPassport`, which has no restricted
//! fields, so the scan page cannot leak them. `RestrictedPassportView` is
//! the registry view and shows `restricted_data` verbatim as opaque JSON.

use leptos::prelude::*;
use records::{BatteryPassport, PublicPassport};

use super::notice::{InfoRow, JsonBlock};
use crate::util::format::{format_date, percent, text_or, value_or_na, with_unit};

#[component]
pub fn PublicPassportView(passport: PublicPassport) -> impl IntoView {
    let subtitle = format!("{} | {}", passport.manufacturer_name, passport.manufacturing_place);
    let cf_class = text_or(passport.carbon_footprint_class.as_deref(), "Not provided");
    let snapshot = format!("Verified public snapshot generated {}.", format_date(&passport.created_at));

    view! {
        <section class="passport-view passport-view--public">
            <header class="passport-view__header">
                <p class="page-header__eyebrow">"Public passport"</p>
                <h1 class="page-header__title">{passport.battery_model}</h1>
                <p class="page-header__subtitle">{subtitle}</p>
            </header>
            <div class="info-grid">
                <InfoRow label="GTIN" value=passport.gtin/>
                <InfoRow label="Serial" value=passport.serial_number/>
                <InfoRow label="Category" value=passport.battery_category/>
                <InfoRow label="Manufactured" value=format_date(&passport.manufacturing_date)/>
                <InfoRow label="Capacity" value=with_unit(Some(passport.rated_capacity_kwh), "kWh")/>
                <InfoRow label="Carbon footprint" value=with_unit(Some(passport.carbon_footprint_kg_per_kwh), "kg/kWh")/>
                <InfoRow label="Recycled cobalt" value=percent(passport.recycled_content_cobalt)/>
                <InfoRow label="Recycled lead" value=percent(passport.recycled_content_lead)/>
                <InfoRow label="Recycled lithium" value=percent(passport.recycled_content_lithium)/>
                <InfoRow label="Recycled nickel" value=percent(passport.recycled_content_nickel)/>
                <InfoRow label="Weight" value=with_unit(Some(passport.battery_weight_kg), "kg")/>
                <InfoRow label="Lifetime (cycles)" value=value_or_na(passport.expected_lifetime_cycles)/>
                <InfoRow label="Lifetime (years)" value=value_or_na(passport.expected_lifetime_years)/>
                <InfoRow label="Performance class" value=value_or_na(passport.performance_class)/>
                <InfoRow label="Status" value=value_or_na(passport.battery_status)/>
            </div>
            <div class="panel">
                <p class="panel__label">"Carbon footprint class"</p>
                <p class="panel__value">{cf_class}</p>
                <p class="panel__hint">
                    "This page only shows Annex XIII public fields. Dismantling and safety data is available to authorized operators through the restricted API."
                </p>
            </div>
            <div class="panel">
                <p class="panel__label">"Hazardous substances"</p>
                <p class="panel__value">{text_or(passport.hazardous_substances.as_deref(), "None listed")}</p>
            </div>
            <div class="panel">
                <p class="panel__label">"Additional information"</p>
                <JsonBlock value=passport.additional_public_data empty="No extra notes"/>
            </div>
            <div class="notice notice--ok">{snapshot}</div>
        </section>
    }
}

#[component]
pub fn RestrictedPassportView(passport: BatteryPassport, qr_url: String, scan_url: String) -> impl IntoView {
    let subtitle = format!("{} | {}", passport.manufacturer_name, passport.battery_category);
    let edit_href = format!("/passports/{}/edit", passport.id);

    view! {
        <section class="passport-view passport-view--restricted">
            <header class="page-header">
                <div>
                    <p class="page-header__eyebrow">"Passport detail"</p>
                    <h1 class="page-header__title">{passport.battery_model}</h1>
                    <p class="page-header__subtitle">{subtitle}</p>
                </div>
                <div class="page-header__actions">
                    <a class="btn" href=edit_href>"Edit"</a>
                    <a class="btn" href="/passports">"Back to registry"</a>
                </div>
            </header>
            <div class="passport-view__columns">
                <div class="passport-view__main">
                    <div class="info-grid">
                        <InfoRow label="GTIN" value=passport.gtin/>
                        <InfoRow label="Serial" value=passport.serial_number/>
                        <InfoRow label="Status" value=passport.battery_status/>
                        <InfoRow label="Manufacturer address" value=passport.manufacturer_address/>
                        <InfoRow label="Manufactured" value=format!("{} | {}", format_date(&passport.manufacturing_date), passport.manufacturing_place)/>
                        <InfoRow label="Capacity" value=with_unit(Some(passport.rated_capacity_kwh), "kWh")/>
                        <InfoRow label="Weight" value=with_unit(Some(passport.battery_weight_kg), "kg")/>
                        <InfoRow label="Carbon footprint" value=with_unit(Some(passport.carbon_footprint_kg_per_kwh), "kg/kWh")/>
                        <InfoRow label="CF class" value=value_or_na(passport.carbon_footprint_class)/>
                        <InfoRow label="Recycled cobalt" value=percent(passport.recycled_content_cobalt)/>
                        <InfoRow label="Recycled lead" value=percent(passport.recycled_content_lead)/>
                        <InfoRow label="Recycled lithium" value=percent(passport.recycled_content_lithium)/>
                        <InfoRow label="Recycled nickel" value=percent(passport.recycled_content_nickel)/>
                        <InfoRow label="Lifetime (cycles)" value=value_or_na(passport.expected_lifetime_cycles)/>
                        <InfoRow label="Lifetime (years)" value=value_or_na(passport.expected_lifetime_years)/>
                        <InfoRow label="Performance class" value=value_or_na(passport.performance_class)/>
                    </div>
                    <div class="panel">
                        <p class="panel__label">"Hazardous substances"</p>
                        <p class="panel__value">{text_or(passport.hazardous_substances.as_deref(), "None listed")}</p>
                    </div>
                    <div class="panel">
                        <p class="panel__label">"Additional public data"</p>
                        <JsonBlock value=passport.additional_public_data empty="No extra notes"/>
                    </div>
                    <div class="panel panel--restricted">
                        <p class="panel__label">"Restricted data (server-side)"</p>
                        <JsonBlock value=passport.restricted_data empty="Empty"/>
                        <p class="panel__hint">"Add conformity docs, test reports and dismantling info through the API."</p>
                    </div>
                    <div class="panel panel--restricted">
                        <p class="panel__label">"End of life"</p>
                        <JsonBlock value=passport.end_of_life empty="Not recorded"/>
                    </div>
                    <p class="passport-view__stamp">
                        {format!("Created {}", format_date(&passport.created_at))}
                        {(!passport.updated_at.is_empty()).then(|| format!(" | Updated {}", format_date(&passport.updated_at)))}
                    </p>
                </div>
                <aside class="passport-view__qr panel">
                    <p class="panel__label">"QR code"</p>
                    <img class="passport-view__qr-image" src=qr_url alt="QR code for this passport"/>
                    <a class="passport-view__scan-url" href=scan_url.clone()>{scan_url.clone()}</a>
                    <p class="panel__hint">"Public tier. The QR resolves to the scan page."</p>
                </aside>
            </div>
        </section>
    }
}
