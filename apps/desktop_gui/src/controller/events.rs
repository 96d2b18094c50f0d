//! Backend-to-UI events and failure presentation for the dashboard.

use client_core::{FetchError, FetchTicket};
use shared::domain::User;

pub enum UiEvent {
    Info(String),
    FetchFinished {
        ticket: FetchTicket,
        outcome: Result<Vec<User>, FetchError>,
    },
}

/// Maps a fetch failure onto an operator hint rendered under the verbatim
/// error message. Returns `None` when the message speaks for itself.
pub fn classify_fetch_failure(message: &str) -> Option<&'static str> {
    let lower = message.to_ascii_lowercase();
    if lower.contains("failed to connect")
        || lower.contains("connection refused")
        || lower.contains("dns")
        || lower.contains("timed out")
        || lower.contains("error sending request")
    {
        Some("Server unreachable; check the endpoint URL and your network, then try again.")
    } else if lower.contains("unexpected response body") {
        Some("The endpoint answered, but not with a JSON user list; verify the endpoint path.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failures_get_a_reachability_hint() {
        let hint = classify_fetch_failure("error sending request for url (http://x/users)");
        assert!(hint.is_some_and(|h| h.contains("unreachable")));
    }

    #[test]
    fn decode_failures_get_an_endpoint_hint() {
        let hint = classify_fetch_failure("unexpected response body: expected value at line 1");
        assert!(hint.is_some_and(|h| h.contains("JSON user list")));
    }

    #[test]
    fn http_status_failures_need_no_hint() {
        assert!(classify_fetch_failure("Failed to fetch users").is_none());
    }
}
