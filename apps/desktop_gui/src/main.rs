mod backend_bridge;
mod config;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;

#[derive(Parser, Debug)]
struct Args {
    /// Override the configured users endpoint.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings.endpoint.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Userdeck")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([760.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Userdeck",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::DashboardApp::new(settings, cmd_tx, ui_rx)))),
    )
}
