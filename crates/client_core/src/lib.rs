//! Client-side core for the users dashboard: a cancellable fetch client and
//! the view-state controller shared by the CLI and GUI front ends.

pub mod controller;
pub mod error;
pub mod fetch;

pub use controller::{
    filter_users, DashboardController, DashboardStatus, FetchTicket, GENERIC_FETCH_FAILURE,
};
pub use error::FetchError;
pub use fetch::{FetchClient, UserDirectory, DEFAULT_USERS_ENDPOINT};

#[cfg(test)]
mod tests;
