//! Cancellable HTTP transport for the users collection.

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::User;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::FetchError;

/// Public demo collection used when no endpoint is configured.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Anything that can produce the remote user list. The GUI backend bridge and
/// the controller only depend on this seam, so tests can script outcomes
/// without a live server.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn fetch_users(&self, cancel: &CancellationToken) -> Result<Vec<User>, FetchError>;
}

/// HTTP GET client for a fixed users endpoint.
pub struct FetchClient {
    http: Client,
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the user list, racing the request against `cancel`.
    ///
    /// Cancellation wins with `FetchError::Aborted` at any point before the
    /// body has been fully read and decoded. A non-2xx status is reported
    /// uniformly as `FetchError::Status`, regardless of code or body.
    pub async fn fetch_users(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<User>, FetchError> {
        if cancel.is_cancelled() {
            return Err(FetchError::Aborted);
        }

        let request = async {
            let response = self.http.get(&self.endpoint).send().await?;
            let status = response.status();
            if !status.is_success() {
                debug!(status = status.as_u16(), "users endpoint returned failure");
                return Err(FetchError::Status {
                    status: status.as_u16(),
                });
            }
            let body = response.text().await?;
            serde_json::from_str::<Vec<User>>(&body).map_err(FetchError::Decode)
        };

        tokio::select! {
            () = cancel.cancelled() => Err(FetchError::Aborted),
            outcome = request => outcome,
        }
    }
}

#[async_trait]
impl UserDirectory for FetchClient {
    async fn fetch_users(&self, cancel: &CancellationToken) -> Result<Vec<User>, FetchError> {
        FetchClient::fetch_users(self, cancel).await
    }
}
