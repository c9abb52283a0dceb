//! Classification of transport failures into user-facing messages.
//!
//! The split between "blocked by a content blocker" and "unreachable" is a
//! substring match on the error text. It only picks the wording shown to the
//! user and must never drive control flow.

use std::error::Error as StdError;

/// Lowercased fragments seen in errors raised when a request is blocked
/// client-side (ad blockers, privacy extensions, fetch wrappers).
const BLOCKED_SIGNATURES: &[&str] = &[
    "failed to fetch",
    "fetch failed",
    "err_blocked_by_client",
    "blocked by client",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnreachableCause {
    ContentBlocker,
    Network,
}

impl UnreachableCause {
    pub fn user_message(&self) -> &'static str {
        match self {
            UnreachableCause::ContentBlocker => {
                "The AI request was blocked, most likely by a content blocker. \
                 Allow requests to the AI service and try again."
            }
            UnreachableCause::Network => {
                "The AI service is unreachable. Check your connection and try again."
            }
        }
    }
}

pub fn classify_transport_failure(detail: &str) -> UnreachableCause {
    let detail = detail.to_lowercase();
    if BLOCKED_SIGNATURES.iter().any(|sig| detail.contains(sig)) {
        UnreachableCause::ContentBlocker
    } else {
        UnreachableCause::Network
    }
}

/// Flattens an error and its `source()` chain into one line.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_is_content_blocker() {
        assert_eq!(
            classify_transport_failure("TypeError: Failed to fetch"),
            UnreachableCause::ContentBlocker
        );
        assert_eq!(
            classify_transport_failure("net::ERR_BLOCKED_BY_CLIENT"),
            UnreachableCause::ContentBlocker
        );
    }

    #[test]
    fn test_connection_refused_is_network() {
        assert_eq!(
            classify_transport_failure(
                "error sending request for url (http://127.0.0.1:1/): connection refused"
            ),
            UnreachableCause::Network
        );
    }

    #[test]
    fn test_messages_differ() {
        assert_ne!(
            UnreachableCause::ContentBlocker.user_message(),
            UnreachableCause::Network.user_message()
        );
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::Other, "fetch failed");
        let outer = std::io::Error::new(std::io::ErrorKind::Other, inner);
        let chain = error_chain(&outer);
        assert!(chain.contains("fetch failed"));
    }
}
