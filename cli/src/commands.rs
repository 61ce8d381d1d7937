//! Subcommand bodies.
//!
//! Each command takes the shared [`ApiClient`] and a writer so tests can run
//! them against the in-memory backend and inspect what would be printed.
//! Lists print one tab-separated row per record; single records print as
//! pretty JSON.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;

use records::{ImportJobRequest, Job, JobKind, JobPhase};
use rest::ApiClient;
use serde::Serialize;
use serde_json::Value;

use crate::{CliError, JobDirection};

pub(crate) async fn list_passports(client: &ApiClient, out: &mut impl Write) -> Result<(), CliError> {
    for passport in client.list_passports().await? {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            passport.id, passport.serial_number, passport.battery_model, passport.battery_status
        )?;
    }
    Ok(())
}

pub(crate) async fn get_passport(
    client: &ApiClient,
    id: &str,
    public: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if public {
        print_json(out, &client.get_public_passport(id).await?)
    } else {
        print_json(out, &client.get_passport(id).await?)
    }
}

/// Create an import job from `text` and run it once.
pub(crate) async fn run_import(
    client: &ApiClient,
    kind: JobKind,
    text: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let records = parse_records(text)?;
    let count = records.len();
    let created = client.create_import_job(&ImportJobRequest::new(kind, records)).await?;
    let job = client.run_import_job(&created.id).await?;
    writeln!(out, "import {} ({kind}, {count} records): {}", job.id, job.status)?;
    ensure_not_failed(&job)?;
    if let Some(result) = &job.result {
        writeln!(out, "{}", result.pretty())?;
    }
    Ok(())
}

/// Create an export job, run it once, and write its data.
///
/// A `csv` result is written verbatim; a `json` result as pretty JSON.
pub(crate) async fn run_export(client: &ApiClient, kind: JobKind, out: &mut impl Write) -> Result<(), CliError> {
    if !kind.is_exportable() {
        return Err(CliError::NotExportable(kind));
    }
    let created = client.create_export_job(kind).await?;
    let job = client.run_export_job(&created.id).await?;
    ensure_not_failed(&job)?;

    if let Some(csv) = job.result_csv() {
        writeln!(out, "{csv}")?;
    } else if let Some(json) = job.result_json() {
        writeln!(out, "{json}")?;
    } else {
        print_json(out, &job)?;
    }
    Ok(())
}

pub(crate) async fn list_jobs(
    client: &ApiClient,
    direction: JobDirection,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let jobs = match direction {
        JobDirection::Imports => client.list_import_jobs().await?,
        JobDirection::Exports => client.list_export_jobs().await?,
    };
    for job in jobs {
        writeln!(out, "{}\t{}\t{}\t{}", job.id, job.kind, job.status, job.created_at)?;
    }
    Ok(())
}

/// Audit entries, newest first as the backend returns them.
pub(crate) async fn audit(client: &ApiClient, limit: Option<usize>, out: &mut impl Write) -> Result<(), CliError> {
    let entries = client.list_audit_logs().await?;
    for entry in entries.iter().take(limit.unwrap_or(usize::MAX)) {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            entry.created_at,
            entry.actor.as_deref().unwrap_or("-"),
            entry.action,
            entry.entity,
            entry.entity_id.as_deref().unwrap_or("-"),
        )?;
    }
    Ok(())
}

/// Parse import input: a JSON array of objects, a single object, or one
/// object per line. Blank lines are skipped.
fn parse_records(text: &str) -> Result<Vec<Value>, CliError> {
    let records = match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| if item.is_object() { Ok(item) } else { Err(CliError::NotAnObject { line: i + 1 }) })
            .collect::<Result<Vec<_>, _>>()?,
        Ok(item @ Value::Object(_)) => vec![item],
        Ok(_) => return Err(CliError::NotAnObject { line: 1 }),
        Err(_) => parse_lines(text)?,
    };
    if records.is_empty() {
        return Err(CliError::NoRecords);
    }
    Ok(records)
}

fn parse_lines(text: &str) -> Result<Vec<Value>, CliError> {
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = serde_json::from_str::<Value>(trimmed)?;
        if !value.is_object() {
            return Err(CliError::NotAnObject { line: i + 1 });
        }
        records.push(value);
    }
    Ok(records)
}

fn ensure_not_failed(job: &Job) -> Result<(), CliError> {
    if job.phase() == JobPhase::Failed {
        return Err(CliError::JobFailed {
            id: job.id.clone(),
            status: job.status.clone(),
            message: job.error.clone().unwrap_or_default(),
        });
    }
    Ok(())
}

fn print_json(out: &mut impl Write, value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
