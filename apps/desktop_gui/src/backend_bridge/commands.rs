//! Backend commands queued from UI to the fetch worker.

use client_core::FetchTicket;

pub enum BackendCommand {
    FetchUsers { ticket: FetchTicket },
}
