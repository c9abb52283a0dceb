// AI helper: job extraction from emails, follow-up emails, interview prep.
// All model calls go through llm_client.

pub mod extract;
pub mod generate;
pub mod handlers;
pub mod prompts;
