// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs next to it and reuses these.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You extract structured data. Output JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for free-text writing tasks.
pub const PLAIN_TEXT_SYSTEM: &str = "You are a concise, professional career assistant. \
    Respond with plain text only. Do NOT use markdown.";

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("valid regex"));

/// Fills `{name}` placeholders in a prompt template in a single pass, so text
/// inside a substituted value is never treated as a placeholder. Unknown
/// names are left as they are.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            vars.iter()
                .find(|(name, _)| *name == &caps[1])
                .map_or_else(|| caps[0].to_string(), |(_, value)| value.to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_placeholder() {
        let out = render("{role} at {company}, {role}", &[("role", "SRE"), ("company", "Acme")]);
        assert_eq!(out, "SRE at Acme, SRE");
    }

    #[test]
    fn test_render_does_not_expand_placeholders_inside_values() {
        let out = render(
            "Company: {company_name}\nRole: {role}",
            &[("company_name", "Acme {role} Labs"), ("role", "SRE")],
        );
        assert_eq!(out, "Company: Acme {role} Labs\nRole: SRE");
    }

    #[test]
    fn test_render_keeps_unknown_and_json_braces() {
        let out = render(r#"{"role": string} {missing}"#, &[("role", "SRE")]);
        assert_eq!(out, r#"{"role": string} {missing}"#);
    }
}
