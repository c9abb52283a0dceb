//! ID resolver module
//!
//! Lets users refer to a job by a short, unambiguous prefix of its UUID
//! instead of the full identifier.

use anyhow::{anyhow, Context, Result};
use jobtrack_core::JobRecord;
use uuid::Uuid;

use crate::api::ApiClient;

/// Resolve a job ID or prefix to a full UUID
///
/// A full UUID is returned as-is without contacting the API; the server
/// reports unknown ids itself.
pub async fn resolve_job_id(client: &ApiClient, id_or_prefix: &str) -> Result<Uuid> {
    if let Ok(uuid) = Uuid::parse_str(id_or_prefix.trim()) {
        return Ok(uuid);
    }

    let jobs = client
        .list_jobs()
        .await
        .context("Failed to fetch jobs for ID resolution")?;

    Ok(find_job(&jobs, id_or_prefix)?.id)
}

/// Find the single job whose id equals or starts with `id_or_prefix`
/// (case-insensitive).
///
/// # Errors
/// Returns an error if no job matches or the prefix matches several jobs.
pub fn find_job<'a>(jobs: &'a [JobRecord], id_or_prefix: &str) -> Result<&'a JobRecord> {
    let prefix = id_or_prefix.trim().to_lowercase();
    if prefix.is_empty() {
        return Err(anyhow!("Job ID must not be empty"));
    }

    let matches: Vec<&JobRecord> = jobs
        .iter()
        .filter(|j| j.id.to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [] => Err(anyhow!("No job found with ID starting with '{}'", prefix)),
        [job] => Ok(*job),
        _ => {
            let ids: Vec<String> = matches.iter().map(|j| j.id.to_string()).collect();
            Err(anyhow!(
                "Ambiguous prefix '{}' matches multiple jobs: {}",
                prefix,
                ids.join(", ")
            ))
        }
    }
}
