//! `data:` URLs for export results delivered inline in a job record.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use records::Job;

/// A file the browser can save through `<a href=... download=...>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub href: String,
    pub file_name: String,
    pub label: &'static str,
}

/// Downloads offered by a finished export job: one per `csv`/`json` member.
pub fn job_downloads(job: &Job) -> Vec<Download> {
    let stem = format!("{}-export-{}", job.kind.as_str(), short_id(&job.id));
    let mut out = Vec::new();
    if let Some(csv) = job.result_csv() {
        out.push(Download {
            href: data_url("text/csv", csv),
            file_name: format!("{stem}.csv"),
            label: "Download CSV",
        });
    }
    if let Some(json) = job.result_json() {
        out.push(Download {
            href: data_url("application/json", &json),
            file_name: format!("{stem}.json"),
            label: "Download JSON",
        });
    }
    out
}

pub fn data_url(mime: &str, content: &str) -> String {
    format!("data:{mime};charset=utf-8,{}", urlencoding::encode(content))
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
