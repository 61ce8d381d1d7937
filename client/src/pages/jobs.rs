//! Import and export job pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting creates the job and then runs it, one call each, and reloads
//! the list. There is no polling; a job still running after its run call is
//! only seen as finished after a manual refresh.

use leptos::prelude::*;
use records::{Job, JobKind};

use crate::components::field::{SelectInput, TextArea};
use crate::components::job_card::JobCard;
use crate::components::layout::PageHeader;
use crate::components::notice::{EmptyState, ErrorBanner};
use crate::net::loaders::load_list;
use crate::net::{Api, actions, spawn, use_api};
use crate::state::job_draft::ImportDraft;
use crate::state::listing::Loaded;

fn kind_options(kinds: &[JobKind]) -> Signal<Vec<(String, String)>> {
    Signal::stored(kinds.iter().map(|k| (k.as_str().to_owned(), k.label().to_owned())).collect())
}

#[derive(Clone, Copy)]
enum Direction {
    Import,
    Export,
}

fn reload(api: Api, direction: Direction, jobs: RwSignal<Option<Loaded<Job>>>) {
    spawn(async move {
        let client = api.client();
        let loaded = match direction {
            Direction::Import => load_list("import jobs", client.list_import_jobs()).await,
            Direction::Export => load_list("export jobs", client.list_export_jobs()).await,
        };
        jobs.set(Some(loaded));
    });
}

#[component]
fn JobList(jobs: RwSignal<Option<Loaded<Job>>>, on_refresh: Callback<()>) -> impl IntoView {
    view! {
        <div class="job-list">
            <button class="btn" type="button" on:click=move |_| on_refresh.run(())>"Refresh"</button>
            {move || match jobs.get() {
                None => view! { <p class="loading">"Loading jobs..."</p> }.into_any(),
                Some(loaded) if loaded.is_empty() => view! { <EmptyState text="No jobs yet."/> }.into_any(),
                Some(loaded) => loaded
                    .items
                    .into_iter()
                    .map(|job| view! { <JobCard job=job/> })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
pub fn ImportJobsPage() -> impl IntoView {
    let api = use_api();
    let jobs = RwSignal::new(None::<Loaded<Job>>);
    let draft = RwSignal::new(ImportDraft::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    reload(api, Direction::Import, jobs);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        let snapshot = draft.get();
        spawn(async move {
            if let Err(message) = actions::run_import(&api.client(), &snapshot).await {
                error.set(Some(message));
            }
            busy.set(false);
            reload(api, Direction::Import, jobs);
        });
    };

    view! {
        <PageHeader
            eyebrow="Bulk jobs"
            title="Imports".to_owned()
            subtitle="Paste a JSON array of records. The job is created and run once.".to_owned()
        />
        <form class="form" on:submit=on_submit>
            <SelectInput
                label="Kind"
                options=kind_options(&JobKind::ALL)
                value=Signal::derive(move || draft.with(|d| d.kind.as_str().to_owned()))
                on_input=Callback::new(move |v: String| {
                    if let Ok(kind) = v.parse::<JobKind>() {
                        draft.update(|d| d.kind = kind);
                    }
                })
            />
            <TextArea
                label="Records (JSON)"
                rows=8
                value=Signal::derive(move || draft.with(|d| d.records_json.clone()))
                on_input=Callback::new(move |v: String| draft.update(|d| d.records_json = v))
            />
            <ErrorBanner message=error/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Importing..." } else { "Run import" }}
            </button>
        </form>
        <JobList jobs=jobs on_refresh=Callback::new(move |()| reload(api, Direction::Import, jobs))/>
    }
}

#[component]
pub fn ExportJobsPage() -> impl IntoView {
    let api = use_api();
    let jobs = RwSignal::new(None::<Loaded<Job>>);
    let kind = RwSignal::new(JobKind::Passports);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    reload(api, Direction::Export, jobs);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        let kind = kind.get();
        spawn(async move {
            if let Err(message) = actions::run_export(&api.client(), kind).await {
                error.set(Some(message));
            }
            busy.set(false);
            reload(api, Direction::Export, jobs);
        });
    };

    view! {
        <PageHeader
            eyebrow="Bulk jobs"
            title="Exports".to_owned()
            subtitle="CSV and JSON results can be downloaded from the finished job.".to_owned()
        />
        <form class="form form--inline" on:submit=on_submit>
            <SelectInput
                label="Kind"
                options=kind_options(&JobKind::EXPORTABLE)
                value=Signal::derive(move || kind.get().as_str().to_owned())
                on_input=Callback::new(move |v: String| {
                    if let Ok(parsed) = v.parse::<JobKind>() {
                        kind.set(parsed);
                    }
                })
            />
            <ErrorBanner message=error/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Exporting..." } else { "Run export" }}
            </button>
        </form>
        <JobList jobs=jobs on_refresh=Callback::new(move |()| reload(api, Direction::Export, jobs))/>
    }
}
