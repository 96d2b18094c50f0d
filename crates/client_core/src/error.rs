use thiserror::Error;

/// Failure taxonomy for a users fetch.
///
/// `Aborted` is the distinguished "deliberately cancelled" case: callers
/// swallow it instead of surfacing it, so a superseded request can never
/// paint an error over the state that replaced it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status. Every non-2xx code
    /// is reported with the same user-facing message.
    #[error("Failed to fetch users")]
    Status { status: u16 },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("request aborted")]
    Aborted,
}

impl FetchError {
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}
