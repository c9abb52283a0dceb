//! Offline job extraction
//!
//! Best-effort, regex-driven guess at company, role and status from a raw
//! email. Used when the AI helper cannot be reached. Every rule table below is
//! evaluated in order and the first hit wins.

use jobtrack_core::assistant::{strip_department_phrases, UNKNOWN_COMPANY};
use jobtrack_core::{ExtractedJobInfo, JobStatus};
use once_cell::sync::Lazy;
use regex::Regex;

pub const UNKNOWN_ROLE: &str = "Unknown Role";

const NOTES_PREVIEW_CHARS: usize = 250;

/// Keyword lists per status, in priority order.
pub const STATUS_RULES: &[(JobStatus, &[&str])] = &[
    (
        JobStatus::Rejected,
        &[
            "unfortunately",
            "we regret",
            "not selected",
            "not been selected",
            "not moving forward",
            "will not be moving forward",
            "we have decided not to proceed",
            "position has been filled",
        ],
    ),
    (
        JobStatus::Offer,
        &[
            "we are pleased to offer",
            "offer letter",
            "congratulations",
            "we would like to offer you",
        ],
    ),
    (
        JobStatus::Interview,
        &[
            "interview",
            "schedule a call",
            "next round",
            "technical round",
            "hr round",
            "we would like to speak with you",
        ],
    ),
];

/// A named regex whose `value` group holds the extracted text.
pub struct FieldPattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl FieldPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("valid field pattern"),
        }
    }

    /// Trimmed `value` capture, if the pattern matches with non-blank text.
    fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.name("value"))
            .map(|m| m.as_str().trim())
            .filter(|v| !v.is_empty())
    }
}

/// Role patterns, tried against the single-line text.
pub static ROLE_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            "role_of",
            r"(?i)role of\s+(?P<value>.+?)(?:\.|,| we | we are| we will| thank you)",
        ),
        FieldPattern::new(
            "application_for",
            r"(?i)application for (?:the )?(?P<value>.+?) role",
        ),
        FieldPattern::new(
            "received_application_for",
            r"(?i)received your application for (?:the )?(?P<value>.+?) role",
        ),
        FieldPattern::new(
            "applying_for",
            r"(?i)applying for (?:the )?(?P<value>.+?) role",
        ),
        FieldPattern::new(
            "position_label",
            r"(?i)position[:\-]\s*(?P<value>.+?)(?:\.|,|$)",
        ),
        FieldPattern::new("role_label", r"(?i)role[:\-]\s*(?P<value>.+?)(?:\.|,|$)"),
    ]
});

/// Company patterns, each tried against the original text and then the
/// single-line text.
pub static COMPANY_PATTERNS: Lazy<Vec<FieldPattern>> = Lazy::new(|| {
    vec![
        FieldPattern::new(
            "applying_to",
            r"(?i)applying to\s+(?P<value>.+?)(?:!|\.|,|\n)",
        ),
        FieldPattern::new(
            "applying_to_name",
            r"(?i)applying to\s+(?P<value>[A-Za-z0-9&.\- ]{2,50})",
        ),
        FieldPattern::new(
            "applying_at_with",
            r"(?i)applying (?:at|with)\s+(?P<value>.+?)(?:!|\.|,|\n)",
        ),
        FieldPattern::new(
            "thank_you_for_applying",
            r"(?i)thank you for applying to\s+(?P<value>.+?)(?:!|\.|,|\n)",
        ),
        FieldPattern::new(
            "kind_regards_department",
            r"(?i)kind regards,\s*(?P<value>.+?)\s*recruiting department",
        ),
        FieldPattern::new(
            "sign_off",
            r"(?i)(?:regards|thank you),\s*\n?\s*(?P<value>.+)$",
        ),
        FieldPattern::new(
            "signature",
            r"(?i)\n\s*(?P<value>[A-Z][A-Za-z0-9&.\- ]{2,40})\s*(?:Team|Careers|Recruiting|Join|HR)\b",
        ),
    ]
});

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*-\s*").expect("valid regex"));
static COMPANY_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!.,"']"#).expect("valid regex"));

/// Extract job details from an email without calling the AI helper.
pub fn extract(email_text: &str) -> ExtractedJobInfo {
    let clean_text = email_text.replace('\r', "");
    let clean_text = clean_text.trim();
    let single_line = WHITESPACE.replace_all(clean_text, " ");
    let single_line = single_line.trim();

    ExtractedJobInfo {
        company_name: detect_company(clean_text, single_line),
        role: detect_role(single_line),
        status: detect_status(&single_line.to_lowercase()),
        notes: preview_notes(email_text),
    }
}

fn detect_status(lower: &str) -> JobStatus {
    STATUS_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(status, _)| *status)
        .unwrap_or(JobStatus::Applied)
}

fn detect_role(single_line: &str) -> String {
    let role = ROLE_PATTERNS
        .iter()
        .find_map(|p| p.capture(single_line))
        .unwrap_or(UNKNOWN_ROLE);

    let role = WHITESPACE.replace_all(role, " ");
    HYPHEN.replace_all(&role, " - ").trim().to_string()
}

fn detect_company(clean_text: &str, single_line: &str) -> String {
    let company = COMPANY_PATTERNS
        .iter()
        .find_map(|p| p.capture(clean_text).or_else(|| p.capture(single_line)))
        .unwrap_or(UNKNOWN_COMPANY);

    let company = strip_department_phrases(&COMPANY_PUNCTUATION.replace_all(company, ""));
    if company.is_empty() {
        UNKNOWN_COMPANY.to_string()
    } else {
        company
    }
}

fn preview_notes(email_text: &str) -> String {
    let preview: String = email_text.chars().take(NOTES_PREVIEW_CHARS).collect();
    let ellipsis = if email_text.chars().count() > NOTES_PREVIEW_CHARS {
        "..."
    } else {
        ""
    };
    format!("Extracted from email:\n{preview}{ellipsis}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_beats_offer() {
        let info = extract(
            "Congratulations on reaching the final stage. Unfortunately we will not be moving forward.",
        );
        assert_eq!(info.status, JobStatus::Rejected);
    }

    #[test]
    fn test_offer_beats_interview() {
        let info = extract(
            "After your interview last week, we are pleased to offer you the position. The offer letter is attached.",
        );
        assert_eq!(info.status, JobStatus::Offer);
    }

    #[test]
    fn test_plain_acknowledgement_is_applied() {
        let info = extract("We have received your resume and will be in touch.");
        assert_eq!(info.status, JobStatus::Applied);
        assert_eq!(info.role, UNKNOWN_ROLE);
        assert_eq!(info.company_name, UNKNOWN_COMPANY);
    }

    #[test]
    fn test_role_of_takes_the_role_not_the_terminator() {
        let info = extract(
            "Hello,\nThanks for your interest in the role of Senior Software Engineer. We will review it soon.",
        );
        assert_eq!(info.role, "Senior Software Engineer");
    }

    #[test]
    fn test_application_for_the_role() {
        let info =
            extract("We received your application for the Full Stack Developer (Angular) role.");
        assert_eq!(info.role, "Full Stack Developer (Angular)");
    }

    #[test]
    fn test_role_hyphen_spacing_is_normalized() {
        let info = extract("Position: Backend-Engineer   II. We will reach out.");
        assert_eq!(info.role, "Backend - Engineer II");
    }

    #[test]
    fn test_earlier_role_pattern_wins() {
        let info = extract(
            "Thank you for your application for the Data Analyst role. Position: Intern, Analytics.",
        );
        assert_eq!(info.role, "Data Analyst");
    }

    #[test]
    fn test_company_from_applying_to() {
        let info = extract("Hi Sam,\nThank you for applying to Acme Corp! We will be in touch.");
        assert_eq!(info.company_name, "Acme Corp");
    }

    #[test]
    fn test_company_quotes_are_stripped() {
        let info = extract("Thank you for applying to \"Hooli\"! Your application is in review.");
        assert_eq!(info.company_name, "Hooli");
    }

    #[test]
    fn test_company_from_kind_regards_department() {
        let info = extract("We will review your profile shortly.\n\nKind regards,\nGlobex Recruiting Department");
        assert_eq!(info.company_name, "Globex");
    }

    #[test]
    fn test_company_sign_off_drops_talent_acquisition() {
        let info = extract("We will review your profile shortly.\n\nBest regards,\nStark Industries Talent Acquisition");
        assert_eq!(info.company_name, "Stark Industries");
    }

    #[test]
    fn test_company_from_signature_line() {
        let info = extract("Hi Jane,\nWe would like to schedule a call.\nInitech Careers");
        assert_eq!(info.company_name, "Initech");
        assert_eq!(info.status, JobStatus::Interview);
    }

    #[test]
    fn test_notes_are_truncated_with_ellipsis() {
        let email = "a".repeat(300);
        let info = extract(&email);
        assert_eq!(
            info.notes,
            format!("Extracted from email:\n{}...", "a".repeat(250))
        );
    }

    #[test]
    fn test_short_notes_are_not_truncated() {
        let info = extract("Thanks for applying, we will be in touch soon.");
        assert_eq!(
            info.notes,
            "Extracted from email:\nThanks for applying, we will be in touch soon."
        );
    }

    #[test]
    fn test_rule_tables_keep_their_order() {
        let statuses: Vec<JobStatus> = STATUS_RULES.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            statuses,
            vec![JobStatus::Rejected, JobStatus::Offer, JobStatus::Interview]
        );

        let roles: Vec<&str> = ROLE_PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(roles.first(), Some(&"role_of"));
        assert_eq!(roles.last(), Some(&"role_label"));

        let companies: Vec<&str> = COMPANY_PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(companies.first(), Some(&"applying_to"));
        assert_eq!(companies.last(), Some(&"signature"));
    }
}
