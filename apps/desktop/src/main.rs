use anyhow::{bail, Result};
use clap::Parser;
use client_core::{
    DashboardController, DashboardStatus, FetchClient, DEFAULT_USERS_ENDPOINT,
    GENERIC_FETCH_FAILURE,
};
use shared::domain::User;

/// One-shot command-line front end for the users dashboard: fetch the list,
/// optionally filter it, print a table.
#[derive(Parser, Debug)]
struct Args {
    /// Users collection endpoint.
    #[arg(long, default_value = DEFAULT_USERS_ENDPOINT)]
    endpoint: String,
    /// Filter by name, username, or email (case-insensitive substring).
    #[arg(long)]
    search: Option<String>,
    /// Print raw JSON records instead of a table.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let client = FetchClient::new(args.endpoint);
    let mut controller = DashboardController::new();
    if let Some(query) = args.search {
        controller.set_search_text(query);
    }

    controller.run_load(&client).await;

    if controller.status() == DashboardStatus::Error {
        bail!(
            "{}",
            controller.error_message().unwrap_or(GENERIC_FETCH_FAILURE)
        );
    }

    let shown = controller.filtered_users();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    print_table(&shown);
    println!(
        "Total: {}  Showing: {}  Status: {}",
        controller.users().len(),
        shown.len(),
        controller.status().label()
    );
    if let Some(fetched_at) = controller.last_fetched_at() {
        println!("Last fetched: {}", fetched_at.format("%Y-%m-%d %H:%M:%S"));
    }

    Ok(())
}

fn print_table(users: &[&User]) {
    if users.is_empty() {
        println!("No results found.");
        return;
    }

    println!(
        "{:<4} {:<24} {:<16} {:<28} {:<16} {}",
        "#", "Name", "Username", "Email", "City", "Company"
    );
    for (index, user) in users.iter().enumerate() {
        println!(
            "{:<4} {:<24} {:<16} {:<28} {:<16} {}",
            index + 1,
            user.name,
            user.username,
            user.email,
            user.address.city,
            user.company.name
        );
    }
}
