//! AI helper command handlers
//!
//! Extract a job from an email (with an offline fallback), draft a follow-up
//! email and generate interview practice questions.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::*;
use jobtrack_core::assistant::{FollowUpEmailRequest, InterviewQuestionsRequest, MIN_EMAIL_CHARS};
use jobtrack_core::{CreateJob, ExtractedJobInfo, JobRecord, UpdateJob};
use tracing::debug;
use uuid::Uuid;

use crate::api::{ApiClient, ClientError};
use crate::commands::jobs::colorize_status;
use crate::config::Config;
use crate::heuristic;

const NOTES_SEPARATOR: &str = "\n\n---\n\n";

/// Status the API answers with when the upstream model is unreachable.
const LLM_UNAVAILABLE_STATUS: u16 = 502;

/// AI helper subcommands
#[derive(Subcommand)]
pub enum AiCommands {
    /// Extract company, role and status from an email
    Extract {
        /// Read the email from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Skip the AI helper and use local pattern matching
        #[arg(long)]
        offline: bool,

        /// Save the result as a job (updates a matching job if one exists)
        #[arg(long)]
        save: bool,
    },
    /// Draft a follow-up email after an interview
    Followup {
        #[arg(long)]
        company: String,

        #[arg(long)]
        role: String,

        /// Date of the last interview, e.g. 2024-05-01
        #[arg(long)]
        date: String,
    },
    /// Generate interview practice questions
    Questions {
        #[arg(long)]
        role: String,

        /// Comma-separated technologies, e.g. "Rust, Postgres"
        #[arg(long)]
        tech_stack: String,
    },
}

pub async fn handle_ai_command(command: AiCommands, config: &Config) -> Result<()> {
    let client = ApiClient::new(&config.api_url);

    match command {
        AiCommands::Extract {
            file,
            offline,
            save,
        } => extract(&client, file, offline, save).await,
        AiCommands::Followup {
            company,
            role,
            date,
        } => follow_up(&client, company, role, date).await,
        AiCommands::Questions { role, tech_stack } => questions(&client, role, tech_stack).await,
    }
}

/// How an extracted job lands in the tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum SavePlan {
    Update { id: Uuid, patch: UpdateJob },
    Create(CreateJob),
}

/// Matches `info` against existing jobs by company and role (trimmed,
/// case-insensitive). A match gets the new status and the new notes appended;
/// otherwise a fresh job is created.
pub fn plan_save(existing: &[JobRecord], info: &ExtractedJobInfo) -> SavePlan {
    let key = |company: &str, role: &str| (company.trim().to_lowercase(), role.trim().to_lowercase());
    let wanted = key(&info.company_name, &info.role);

    match existing
        .iter()
        .find(|job| key(&job.company_name, &job.role) == wanted)
    {
        Some(job) => SavePlan::Update {
            id: job.id,
            patch: UpdateJob {
                status: Some(info.status),
                notes: Some(
                    format!("{}{}{}", job.notes, NOTES_SEPARATOR, info.notes)
                        .trim()
                        .to_string(),
                ),
                ..UpdateJob::default()
            },
        },
        None => SavePlan::Create(CreateJob {
            company_name: Some(info.company_name.clone()),
            role: Some(info.role.clone()),
            status: Some(info.status),
            notes: Some(info.notes.clone()),
        }),
    }
}

async fn extract(client: &ApiClient, file: Option<PathBuf>, offline: bool, save: bool) -> Result<()> {
    let email = read_email(file)?;
    if email.trim().chars().count() < MIN_EMAIL_CHARS {
        bail!("Paste a longer email (at least {MIN_EMAIL_CHARS} characters)");
    }

    let info = extract_info(client, &email, offline).await?;

    print_extracted(&info);

    if save {
        save_extracted(client, &info).await?;
    }

    Ok(())
}

/// Asks the API unless `offline` is set. Falls back to the local heuristic
/// when either the API or the model behind it cannot be reached; any other
/// API error is returned.
pub async fn extract_info(
    client: &ApiClient,
    email: &str,
    offline: bool,
) -> Result<ExtractedJobInfo> {
    if offline {
        return Ok(heuristic::extract(email));
    }

    match client.extract_job(email).await {
        Ok(info) => Ok(info),
        Err(err) => match fallback_reason(&err) {
            Some(reason) => {
                debug!("Extraction request failed: {err}");
                eprintln!("{} {}", "⚠".yellow(), reason.yellow());
                eprintln!("{}", "  Falling back to offline extraction.".dimmed());
                Ok(heuristic::extract(email))
            }
            None => Err(err.into()),
        },
    }
}

/// Warning to show before falling back to offline extraction, or `None` when
/// the error must be reported as-is.
fn fallback_reason(err: &ClientError) -> Option<String> {
    match err {
        ClientError::Unreachable { cause, .. } => Some(cause.user_message().to_string()),
        ClientError::Api {
            status: LLM_UNAVAILABLE_STATUS,
            message,
        } => Some(message.clone()),
        _ => None,
    }
}

async fn save_extracted(client: &ApiClient, info: &ExtractedJobInfo) -> Result<()> {
    let existing = client.list_jobs().await?;

    let job = match plan_save(&existing, info) {
        SavePlan::Update { id, patch } => {
            let job = client.update_job(id, &patch).await?;
            print!("{} Job updated!", "✓".green());
            job
        }
        SavePlan::Create(req) => {
            let job = client.create_job(&req).await?;
            print!("{} Job saved!", "✓".green());
            job
        }
    };
    println!(" Status: {}", colorize_status(job.status));

    Ok(())
}

async fn follow_up(client: &ApiClient, company: String, role: String, date: String) -> Result<()> {
    let response = client
        .generate_follow_up_email(&FollowUpEmailRequest {
            company_name: Some(company),
            role: Some(role),
            last_interview_date: Some(date),
        })
        .await?;

    println!("{}", response.email);
    Ok(())
}

async fn questions(client: &ApiClient, role: String, tech_stack: String) -> Result<()> {
    let response = client
        .generate_interview_questions(&InterviewQuestionsRequest {
            role: Some(role),
            tech_stack: Some(tech_stack),
        })
        .await?;

    if response.questions.is_empty() {
        println!("{}", "No questions were generated. Try again.".yellow());
        return Ok(());
    }

    for (i, question) in response.questions.iter().enumerate() {
        println!("{} {}", format!("{:>2}.", i + 1).cyan(), question);
    }
    Ok(())
}

fn read_email(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut email = String::new();
            std::io::stdin()
                .read_to_string(&mut email)
                .context("Failed to read email from stdin")?;
            Ok(email)
        }
    }
}

fn print_extracted(info: &ExtractedJobInfo) {
    println!("{}", "Extracted:".bold());
    println!("  Company:  {}", info.company_name);
    println!("  Role:     {}", info.role);
    println!("  Status:   {}", colorize_status(info.status));
    if !info.notes.is_empty() {
        println!("\n{}", "Notes:".bold());
        for line in info.notes.lines() {
            println!("  {}", line);
        }
    }
}
