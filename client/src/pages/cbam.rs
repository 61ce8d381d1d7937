//! CBAM declarations: list with export links and status control, and the
//! multi-line declaration form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::{CbamDeclaration, CbamSupplier};
use rest::CbamExportFormat;

use crate::components::field::{SelectInput, TextInput};
use crate::components::layout::PageHeader;
use crate::components::notice::{EmptyState, ErrorBanner, ErrorText};
use crate::net::loaders::load_list;
use crate::net::{Api, actions, spawn, use_api};
use crate::state::cbam_draft::{CbamDraft, CbamLine};
use crate::state::form::FormState;
use crate::state::listing::Loaded;
use crate::util::format::{format_date, format_eur, format_tonnes, text_or};

fn reload(api: Api, declarations: RwSignal<Option<Loaded<CbamDeclaration>>>) {
    spawn(async move {
        declarations.set(Some(load_list("CBAM declarations", api.client().list_cbam_declarations()).await));
    });
}

#[component]
pub fn CbamPage() -> impl IntoView {
    let api = use_api();
    let declarations = RwSignal::new(None::<Loaded<CbamDeclaration>>);
    let pending = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    reload(api, declarations);

    let advance = Callback::new(move |declaration: CbamDeclaration| {
        if pending.get_untracked().is_some() {
            return;
        }
        pending.set(Some(declaration.id.clone()));
        error.set(None);
        spawn(async move {
            if let Err(message) = actions::advance_declaration(&api.client(), &declaration).await {
                error.set(Some(message));
            }
            pending.set(None);
            reload(api, declarations);
        });
    });

    view! {
        <PageHeader
            eyebrow="CBAM"
            title="Declarations".to_owned()
            subtitle="Manage CBAM reports with default vs verified emission factors.".to_owned()
            action=("/cbam/new", "New declaration")
        />
        <div class="page-links">
            <a class="btn" href="/cbam/suppliers">"Manage suppliers"</a>
            <a class="btn" href="/cbam/factors">"Factor library"</a>
        </div>
        <ErrorBanner message=error/>
        {move || match declarations.get() {
            None => view! { <p class="loading">"Loading declarations..."</p> }.into_any(),
            Some(loaded) if loaded.is_empty() => view! {
                <EmptyState text="No declarations yet. Create one with CN codes, quantities, and factors."/>
            }
            .into_any(),
            Some(loaded) => view! {
                <div class="card-grid">
                    {loaded
                        .items
                        .into_iter()
                        .map(|d| declaration_card(api, d, pending, advance))
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        }}
    }
}

fn declaration_card(
    api: Api,
    declaration: CbamDeclaration,
    pending: RwSignal<Option<String>>,
    advance: Callback<CbamDeclaration>,
) -> impl IntoView {
    let client = api.client();
    let csv_href = client.cbam_export_url(&declaration.id, CbamExportFormat::Csv);
    let pdf_href = client.cbam_export_url(&declaration.id, CbamExportFormat::Pdf);
    let emissions = format!("{} tCO2e", format_tonnes(declaration.total_emissions));
    let cost = format!("Cost est.: {}", format_eur(declaration.certificate_cost_estimate));
    let lines = declaration
        .items
        .iter()
        .map(|item| {
            let label = format!(
                "{} | {} t | {}",
                item.cn_code,
                item.quantity_tonnes,
                text_or(item.supplier_name.as_deref(), "no supplier")
            );
            view! {
                <li class="declaration-card__line">
                    <span>{label}</span>
                    <span>{format!("{} tCO2e", format_tonnes(item.calculated_emissions))}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let control = declaration.next_status().map(|next| {
        let id = declaration.id.clone();
        let declaration = declaration.clone();
        view! {
            <button
                class="btn"
                type="button"
                disabled=move || pending.get().is_some()
                on:click=move |_| advance.run(declaration.clone())
            >
                {move || if pending.get().as_deref() == Some(id.as_str()) { "Updating...".to_owned() } else { format!("Mark {next}") }}
            </button>
        }
    });

    view! {
        <article class="card declaration-card">
            <div class="declaration-card__head">
                <div>
                    <p class="card__eyebrow">{declaration.period.clone()}</p>
                    <h3 class="card__title">{emissions}</h3>
                    <p class="card__subtitle">{cost}</p>
                </div>
                <span class="pill">{declaration.status.clone()}</span>
            </div>
            <ul class="declaration-card__lines">{lines}</ul>
            <p class="card__meta">{format!("Created {}", format_date(&declaration.created_at))}</p>
            <div class="card__actions">
                <a class="btn" href=csv_href target="_blank" rel="noopener">"CSV"</a>
                <a class="btn" href=pdf_href target="_blank" rel="noopener">"PDF"</a>
                {control}
            </div>
        </article>
    }
}

#[component]
pub fn CbamNewPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::new(CbamDraft::default()));
    let suppliers = RwSignal::new(Vec::<CbamSupplier>::new());
    let done = RwSignal::new(false);

    spawn(async move {
        suppliers.set(load_list("CBAM suppliers", api.client().list_cbam_suppliers()).await.items);
    });

    Effect::new(move || {
        if done.get() {
            navigate("/cbam", NavigateOptions::default());
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
            match actions::create_declaration(&api.client(), &draft).await {
                Ok(_) => {
                    form.update(|f| f.finish_ok(None));
                    done.set(true);
                }
                Err(message) => form.update(|f| f.finish_err(message)),
            }
        });
    };

    let supplier_options = Signal::derive(move || {
        suppliers
            .get()
            .into_iter()
            .map(|s| {
                let text = format!("{} ({})", s.name, text_or(s.country.as_deref(), "N/A"));
                (s.id, text)
            })
            .collect::<Vec<_>>()
    });
    let busy = move || form.with(FormState::is_busy);

    view! {
        <PageHeader
            eyebrow="CBAM"
            title="New declaration".to_owned()
            subtitle="Emissions and certificate cost are calculated when the declaration is saved.".to_owned()
        />
        <form class="form" on:submit=on_submit>
            <TextInput
                label="Period"
                placeholder="2025-Q4"
                required=Signal::stored(true)
                value=Signal::derive(move || form.with(|f| f.draft.period.clone()))
                on_input=Callback::new(move |v: String| form.update(|f| f.edit(|d| d.period = v)))
            />
            <div class="cbam-lines">
                <For
                    each=move || form.with(|f| f.draft.lines.clone())
                    key=|line: &CbamLine| line.key.clone()
                    children=move |line: CbamLine| line_editor(form, line.key, supplier_options)
                />
            </div>
            {move || form.with(|f| f.error.clone()).map(|message| view! { <ErrorText message=message/> })}
            <div class="form__actions">
                <button class="btn" type="button" on:click=move |_| form.update(|f| f.edit(CbamDraft::add_line))>
                    "Add line"
                </button>
                <button class="btn btn--primary" type="submit" disabled=busy>
                    {move || if busy() { "Saving..." } else { "Save declaration" }}
                </button>
            </div>
        </form>
    }
}

type LineGetter = fn(&CbamLine) -> String;
type LineSetter = fn(&mut CbamLine, String);

fn line_input(
    form: RwSignal<FormState<CbamDraft>>,
    key: StoredValue<String>,
    label: &'static str,
    input_type: &'static str,
    get: LineGetter,
    set: LineSetter,
) -> impl IntoView {
    let value = Signal::derive(move || {
        key.with_value(|key| form.with(|f| f.draft.lines.iter().find(|l| &l.key == key).map(get).unwrap_or_default()))
    });
    let on_input = Callback::new(move |v: String| {
        let key = key.get_value();
        form.update(|f| f.edit(|d| d.update_line(&key, |line| set(line, v))));
    });
    view! { <TextInput label=label input_type=input_type value=value on_input=on_input/> }
}

fn line_editor(
    form: RwSignal<FormState<CbamDraft>>,
    key: String,
    suppliers: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    let key = StoredValue::new(key);
    let supplier_value = Signal::derive(move || {
        key.with_value(|key| {
            form.with(|f| f.draft.lines.iter().find(|l| &l.key == key).map(|l| l.supplier_id.clone()).unwrap_or_default())
        })
    });
    let on_supplier = Callback::new(move |v: String| {
        let key = key.get_value();
        form.update(|f| f.edit(|d| d.update_line(&key, |line| line.supplier_id = v)));
    });
    let on_remove = move |_| {
        let key = key.get_value();
        form.update(|f| f.edit(|d| d.remove_line(&key)));
    };

    view! {
        <fieldset class="cbam-line">
            <div class="form__grid">
                {line_input(form, key, "CN code", "text", |l| l.cn_code.clone(), |l, v| l.cn_code = v)}
                {line_input(form, key, "Quantity (tonnes)", "number", |l| l.quantity_tonnes.clone(), |l, v| l.quantity_tonnes = v)}
                {line_input(form, key, "Verified EF (tCO2e/t)", "number", |l| l.verified_factor.clone(), |l, v| l.verified_factor = v)}
                <SelectInput
                    label="Supplier"
                    options=suppliers
                    value=supplier_value
                    on_input=on_supplier
                    placeholder="None"
                />
                {line_input(form, key, "Country of origin", "text", |l| l.country_of_origin.clone(), |l, v| l.country_of_origin = v)}
            </div>
            {line_input(form, key, "Description", "text", |l| l.description.clone(), |l, v| l.description = v)}
            <button
                class="btn btn--ghost"
                type="button"
                disabled=move || form.with(|f| f.draft.lines.len() <= 1)
                on:click=on_remove
            >
                "Remove line"
            </button>
        </fieldset>
    }
}
