//! Job command handlers
//!
//! Listing, viewing, adding, editing and deleting tracked applications.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::*;
use jobtrack_core::{CreateJob, JobRecord, JobStatus, UpdateJob};

use crate::api::ApiClient;
use crate::config::Config;
use crate::id_resolver::{find_job, resolve_job_id};

/// Shortest company or role accepted by `jobs add` and `jobs edit`.
const MIN_FIELD_CHARS: usize = 2;

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// List jobs, newest first
    List {
        /// Only jobs whose company or role contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only jobs with this status
        #[arg(long, value_parser = parse_status)]
        status: Option<JobStatus>,
    },
    /// Show a single job
    Show {
        /// Job ID or unambiguous prefix
        id: String,
    },
    /// Track a new application
    Add {
        #[arg(long)]
        company: String,

        #[arg(long)]
        role: String,

        #[arg(long, value_parser = parse_status)]
        status: Option<JobStatus>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Change fields of an existing job
    Edit {
        /// Job ID or unambiguous prefix
        id: String,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long, value_parser = parse_status)]
        status: Option<JobStatus>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a job
    Delete {
        /// Job ID or unambiguous prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = ApiClient::new(&config.api_url);

    match command {
        JobCommands::List { search, status } => {
            list_jobs(&client, search.as_deref(), status).await
        }
        JobCommands::Show { id } => show_job(&client, &id).await,
        JobCommands::Add {
            company,
            role,
            status,
            notes,
        } => add_job(&client, company, role, status, notes).await,
        JobCommands::Edit {
            id,
            company,
            role,
            status,
            notes,
        } => {
            let patch = UpdateJob {
                company_name: company,
                role,
                status,
                notes,
            };
            edit_job(&client, &id, patch).await
        }
        JobCommands::Delete { id, yes } => delete_job(&client, &id, yes).await,
    }
}

/// Case-insensitive status name, e.g. `offer` or `Offer`.
pub fn parse_status(input: &str) -> Result<JobStatus, String> {
    JobStatus::ALL
        .into_iter()
        .find(|s| s.as_str().eq_ignore_ascii_case(input.trim()))
        .ok_or_else(|| {
            format!(
                "unknown status '{}' (expected Applied, Interview, Offer or Rejected)",
                input
            )
        })
}

/// Client-side filter over the full list: `search` is a case-insensitive
/// substring of company or role, `status` must match exactly.
pub fn filter_jobs<'a>(
    jobs: &'a [JobRecord],
    search: Option<&str>,
    status: Option<JobStatus>,
) -> Vec<&'a JobRecord> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    jobs.iter()
        .filter(|job| status.map_or(true, |s| job.status == s))
        .filter(|job| match &needle {
            Some(needle) => {
                job.company_name.to_lowercase().contains(needle)
                    || job.role.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect()
}

async fn list_jobs(client: &ApiClient, search: Option<&str>, status: Option<JobStatus>) -> Result<()> {
    let jobs = client.list_jobs().await?;
    let shown = filter_jobs(&jobs, search, status);

    if shown.is_empty() {
        println!("{}", "No jobs found.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Showing {} of {} job(s):", shown.len(), jobs.len()).bold()
    );
    println!();
    for job in shown {
        print_job_summary(job);
    }

    Ok(())
}

async fn show_job(client: &ApiClient, id: &str) -> Result<()> {
    let jobs = client.list_jobs().await?;
    let job = find_job(&jobs, id)?;
    print_job_details(job);
    Ok(())
}

async fn add_job(
    client: &ApiClient,
    company: String,
    role: String,
    status: Option<JobStatus>,
    notes: Option<String>,
) -> Result<()> {
    let job = client
        .create_job(&CreateJob {
            company_name: Some(required_field("Company", &company)?),
            role: Some(required_field("Role", &role)?),
            status,
            notes,
        })
        .await?;

    println!("{} Job added", "✓".green());
    print_job_details(&job);
    Ok(())
}

async fn edit_job(client: &ApiClient, id: &str, patch: UpdateJob) -> Result<()> {
    let patch = validate_patch(patch)?;

    let uuid = resolve_job_id(client, id).await?;
    let job = client.update_job(uuid, &patch).await?;

    println!("{} Job updated", "✓".green());
    print_job_details(&job);
    Ok(())
}

async fn delete_job(client: &ApiClient, id: &str, yes: bool) -> Result<()> {
    let uuid = resolve_job_id(client, id).await?;

    if !yes && !confirm(&format!("Delete job {uuid}?"))? {
        println!("{}", "Cancelled.".yellow());
        return Ok(());
    }

    client.delete_job(uuid).await?;
    println!("{} Deleted job {}", "✓".green(), uuid.to_string().dimmed());
    Ok(())
}

/// Trimmed company or role, at least `MIN_FIELD_CHARS` long.
fn required_field(label: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.chars().count() < MIN_FIELD_CHARS {
        bail!("{label} must be at least {MIN_FIELD_CHARS} characters");
    }
    Ok(value.to_string())
}

/// Rejects empty patches and applies the `jobs add` rules to any company or
/// role being changed.
fn validate_patch(patch: UpdateJob) -> Result<UpdateJob> {
    if patch.is_empty() {
        bail!("Nothing to change: pass at least one of --company, --role, --status or --notes");
    }

    Ok(UpdateJob {
        company_name: patch
            .company_name
            .as_deref()
            .map(|c| required_field("Company", c))
            .transpose()?,
        role: patch
            .role
            .as_deref()
            .map(|r| required_field("Role", r))
            .transpose()?,
        ..patch
    })
}

/// Asks a y/N question on stdin. Anything but an explicit yes declines.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub(crate) fn colorize_status(status: JobStatus) -> ColoredString {
    let label = format!("[{}]", status);
    match status {
        JobStatus::Applied => label.blue(),
        JobStatus::Interview => label.yellow(),
        JobStatus::Offer => label.green().bold(),
        JobStatus::Rejected => label.red(),
    }
}

fn print_job_summary(job: &JobRecord) {
    println!(
        "  {} {} {} {}",
        "▸".cyan(),
        job.company_name.bold(),
        job.role,
        colorize_status(job.status)
    );
    println!(
        "    {}  added {}",
        job.id.to_string().dimmed(),
        job.created_at.format("%Y-%m-%d").to_string().dimmed()
    );
}

fn print_job_details(job: &JobRecord) {
    println!("{}", "Job Details:".bold());
    println!("  ID:       {}", job.id.to_string().cyan());
    println!("  Company:  {}", job.company_name);
    println!("  Role:     {}", job.role);
    println!("  Status:   {}", colorize_status(job.status));
    println!("  Created:  {}", job.created_at.format("%Y-%m-%d %H:%M:%S"));
    println!("  Updated:  {}", job.updated_at.format("%Y-%m-%d %H:%M:%S"));

    if !job.notes.is_empty() {
        println!("\n{}", "Notes:".bold());
        for line in job.notes.lines() {
            println!("  {}", line);
        }
    }
}
