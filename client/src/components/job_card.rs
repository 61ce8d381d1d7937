//! One import or export job with its status, result and any downloads.

use leptos::prelude::*;
use records::Job;

use super::notice::JsonBlock;
use crate::util::download::job_downloads;
use crate::util::format::format_datetime;

#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let phase = job.phase();
    let status_class = format!("pill {}", phase.css_class());
    let heading = format!("{} | {}", job.kind.label(), format_datetime(&job.created_at));
    let downloads = job_downloads(&job);

    view! {
        <article class="card job-card">
            <div class="job-card__head">
                <div>
                    <p class="card__eyebrow">{job.id.clone()}</p>
                    <h3 class="card__title">{heading}</h3>
                </div>
                <span class=status_class>{job.status.clone()}</span>
            </div>
            {job.result.clone().map(|result| view! { <JsonBlock value=Some(result) empty=""/> })}
            {job.error.clone().map(|error| view! { <p class="job-card__error">{error}</p> })}
            <div class="job-card__downloads">
                {downloads
                    .into_iter()
                    .map(|d| view! { <a class="btn" href=d.href download=d.file_name>{d.label}</a> })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}
