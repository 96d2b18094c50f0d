//! View-state machine for the users dashboard.
//!
//! The controller owns every piece of dashboard state and is only ever
//! touched from the thread that renders it; the transport races on its own
//! runtime and reports back through [`DashboardController::commit_load`].
//! A load issues a [`FetchTicket`]; committing an outcome whose ticket has
//! been superseded is a no-op, which is what keeps rapid successive loads
//! from clobbering each other.

use chrono::{DateTime, Local};
use shared::domain::User;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::FetchError;
use crate::fetch::UserDirectory;

/// Shown when a network failure renders an empty message.
pub const GENERIC_FETCH_FAILURE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl DashboardStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Handle for one in-flight load.
///
/// The token must travel with the request so a later load (or a clear, or
/// teardown) can abandon it; the generation lets the controller recognize a
/// stale outcome even if the transport never observed the cancellation.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    token: CancellationToken,
}

impl FetchTicket {
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

pub struct DashboardController {
    status: DashboardStatus,
    users: Vec<User>,
    search_text: String,
    error_message: Option<String>,
    last_fetched_at: Option<DateTime<Local>>,
    generation: u64,
    live_fetch: Option<CancellationToken>,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardController {
    pub fn new() -> Self {
        Self {
            status: DashboardStatus::Idle,
            users: Vec::new(),
            search_text: String::new(),
            error_message: None,
            last_fetched_at: None,
            generation: 0,
            live_fetch: None,
        }
    }

    pub fn status(&self) -> DashboardStatus {
        self.status
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn search_text_mut(&mut self) -> &mut String {
        &mut self.search_text
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn last_fetched_at(&self) -> Option<DateTime<Local>> {
        self.last_fetched_at
    }

    /// Starts a new load: cancels the previously outstanding request, enters
    /// `Loading`, and hands out the ticket the transport must carry.
    pub fn begin_load(&mut self) -> FetchTicket {
        if let Some(previous) = self.live_fetch.take() {
            previous.cancel();
        }
        self.generation += 1;
        let token = CancellationToken::new();
        self.live_fetch = Some(token.clone());
        self.status = DashboardStatus::Loading;
        self.error_message = None;

        FetchTicket {
            generation: self.generation,
            token,
        }
    }

    /// Commits a finished fetch.
    ///
    /// Outcomes from superseded tickets are discarded, and an `Aborted`
    /// failure never transitions state: abort only happens when a newer load
    /// or a clear already owns the view.
    pub fn commit_load(&mut self, ticket: &FetchTicket, outcome: Result<Vec<User>, FetchError>) {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded fetch outcome"
            );
            return;
        }

        match outcome {
            Err(FetchError::Aborted) => {}
            Ok(users) => {
                self.live_fetch = None;
                self.status = DashboardStatus::Success;
                self.users = users;
                self.last_fetched_at = Some(Local::now());
            }
            Err(err) => {
                self.live_fetch = None;
                self.status = DashboardStatus::Error;
                let message = err.to_string();
                self.error_message = Some(if message.is_empty() {
                    GENERIC_FETCH_FAILURE.to_string()
                } else {
                    message
                });
            }
        }
    }

    /// Begin + fetch + commit in one call, for callers that can simply await
    /// the transport (the CLI, tests).
    pub async fn run_load(&mut self, directory: &dyn UserDirectory) {
        let ticket = self.begin_load();
        let outcome = directory.fetch_users(ticket.token()).await;
        self.commit_load(&ticket, outcome);
    }

    /// Resets every state field back to the initial idle view and abandons
    /// any outstanding request so a late response cannot repopulate the
    /// table after the operator cleared it.
    pub fn clear_all(&mut self) {
        if let Some(previous) = self.live_fetch.take() {
            previous.cancel();
        }
        self.generation += 1;
        self.status = DashboardStatus::Idle;
        self.users.clear();
        self.search_text.clear();
        self.error_message = None;
        self.last_fetched_at = None;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// The displayed subsequence of `users` for the current query. Never
    /// stored, always recomputed.
    pub fn filtered_users(&self) -> Vec<&User> {
        filter_users(&self.users, &self.search_text)
    }

    // UI-level guards for the dashboard controls. These gate buttons, they
    // are not controller invariants.

    pub fn can_load(&self) -> bool {
        self.status != DashboardStatus::Loading
    }

    pub fn can_refresh(&self) -> bool {
        !self.users.is_empty() && self.status != DashboardStatus::Loading
    }

    pub fn search_enabled(&self) -> bool {
        !self.users.is_empty()
    }
}

impl Drop for DashboardController {
    fn drop(&mut self) {
        if let Some(live) = self.live_fetch.take() {
            live.cancel();
        }
    }
}

/// Case-insensitive substring filter over name, username, and email.
///
/// An empty (or all-whitespace) query returns the full set. City and company
/// never participate in matching.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return users.iter().collect();
    }

    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&query)
                || user.username.to_lowercase().contains(&query)
                || user.email.to_lowercase().contains(&query)
        })
        .collect()
}
