// All LLM prompt templates for the AI helper.
// System prompts come from llm_client::prompts.

/// Extraction is fully deterministic.
pub const EXTRACT_TEMPERATURE: f32 = 0.0;
pub const FOLLOW_UP_TEMPERATURE: f32 = 0.4;
pub const QUESTIONS_TEMPERATURE: f32 = 0.3;

/// Job extraction prompt template. Replace `{email_text}` before sending.
pub const EXTRACT_JOB_PROMPT_TEMPLATE: &str = r#"Extract job application info from the email text.

Return ONLY valid JSON (no markdown, no explanation) with exactly these keys:
{
  "companyName": string,
  "role": string,
  "status": "Applied" | "Interview" | "Offer" | "Rejected",
  "notes": string
}

Rules:
- companyName must be the company (NOT 'Talent Acquisition', NOT 'Recruiting Department')
- role must be the job title if present, otherwise "Unknown"
- status should be:
  - Rejected if email contains rejection intent
  - Interview if email mentions scheduling/call/next round
  - Offer if email contains offer intent
  - otherwise Applied
- notes should be a short 1-2 line summary of the email.

EMAIL TEXT:
"""
{email_text}
""""#;

/// Follow-up email prompt template.
/// Replace: {company_name}, {role}, {last_interview_date}
pub const FOLLOW_UP_PROMPT_TEMPLATE: &str = r#"Write a short follow-up email from a job candidate to the hiring team.

Company: {company_name}
Role: {role}
Last interview date: {last_interview_date}

Requirements:
- Start with a line of the form "Subject: ..."
- Thank them for the interview on the given date and restate interest in the role
- Politely ask about next steps
- Polite, professional tone, under 150 words
- Plain text only: no markdown, no bullet points
- Sign off with "[Your Name]""#;

/// Interview questions prompt template. Replace: {role}, {tech_stack}
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str = r#"Write 7 interview questions a candidate for the role below should prepare for.

Role: {role}
Tech stack: {tech_stack}

Mix technical depth on the tech stack with one or two behavioural questions.

Return ONLY a JSON array of 7 strings, for example:
["Question one?", "Question two?"]"#;
