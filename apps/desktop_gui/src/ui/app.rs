//! egui application shell for the users dashboard.
//!
//! The UI thread owns the [`DashboardController`]; every state transition
//! happens here, in response to a button click, a keystroke in the search
//! box, or a `FetchFinished` event drained from the backend bridge.

use std::time::Duration;

use client_core::{DashboardController, DashboardStatus, GENERIC_FETCH_FAILURE};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{classify_fetch_failure, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

pub struct DashboardApp {
    controller: DashboardController,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    endpoint: String,
    status_line: String,
}

impl DashboardApp {
    pub fn new(
        settings: Settings,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            controller: DashboardController::new(),
            cmd_tx,
            ui_rx,
            endpoint: settings.endpoint,
            status_line: String::new(),
        }
    }

    /// Load and Refresh share this path; the controller cancels whatever was
    /// in flight before the new ticket goes out.
    fn request_load(&mut self) {
        let ticket = self.controller.begin_load();
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchUsers { ticket },
            &mut self.status_line,
        );
    }

    fn drain_backend_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => self.status_line = message,
                UiEvent::FetchFinished { ticket, outcome } => {
                    self.controller.commit_load(&ticket, outcome);
                }
            }
        }
    }

    fn header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Users Dashboard");
                ui.weak("Load, search, and refresh the remote user list.");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear").clicked() {
                    self.controller.clear_all();
                }
                if ui
                    .add_enabled(self.controller.can_refresh(), egui::Button::new("Refresh"))
                    .clicked()
                {
                    self.request_load();
                }
                let loading = self.controller.status() == DashboardStatus::Loading;
                let load_label = if loading { "Loading..." } else { "Load Users" };
                if ui
                    .add_enabled(self.controller.can_load(), egui::Button::new(load_label))
                    .clicked()
                {
                    self.request_load();
                }
            });
        });
        ui.add_space(6.0);
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        let total = self.controller.users().len();
        let shown = self.controller.filtered_users().len();
        let status_label = self.controller.status().label();
        let search_enabled = self.controller.search_enabled();

        ui.horizontal(|ui| {
            ui.add_enabled(
                search_enabled,
                egui::TextEdit::singleline(self.controller.search_text_mut())
                    .hint_text("Search by name, username, or email...")
                    .desired_width(320.0),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("Status: {status_label}"));
                ui.separator();
                ui.label(format!("Showing: {shown}"));
                ui.separator();
                ui.label(format!("Total: {total}"));
            });
        });

        if let Some(fetched_at) = self.controller.last_fetched_at() {
            ui.weak(format!(
                "Last fetched: {}",
                fetched_at.format("%Y-%m-%d %H:%M:%S")
            ));
        }
        ui.add_space(6.0);
    }

    fn body(&mut self, ui: &mut egui::Ui) {
        match self.controller.status() {
            DashboardStatus::Idle => {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.heading("No data loaded yet");
                    ui.label("Click Load Users to fetch from the API.");
                });
            }
            DashboardStatus::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.spinner();
                    ui.label("Fetching users from API...");
                });
            }
            DashboardStatus::Error => self.error_state(ui),
            DashboardStatus::Success => self.users_table(ui),
        }
    }

    fn error_state(&mut self, ui: &mut egui::Ui) {
        let message = self
            .controller
            .error_message()
            .unwrap_or(GENERIC_FETCH_FAILURE)
            .to_string();

        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.colored_label(ui.visuals().error_fg_color, "Error");
            ui.label(message.as_str());
            if let Some(hint) = classify_fetch_failure(&message) {
                ui.weak(hint);
            }
            ui.add_space(8.0);
            if ui.button("Try Again").clicked() {
                self.request_load();
            }
        });
    }

    fn users_table(&self, ui: &mut egui::Ui) {
        let filtered = self.controller.filtered_users();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("users_table")
                    .striped(true)
                    .num_columns(6)
                    .spacing([18.0, 6.0])
                    .show(ui, |ui| {
                        ui.strong("#");
                        ui.strong("Name");
                        ui.strong("Username");
                        ui.strong("Email");
                        ui.strong("City");
                        ui.strong("Company");
                        ui.end_row();

                        for (index, user) in filtered.iter().enumerate() {
                            ui.label((index + 1).to_string());
                            ui.strong(user.name.as_str());
                            ui.label(user.username.as_str());
                            ui.label(user.email.as_str());
                            ui.label(user.address.city.as_str());
                            ui.label(user.company.name.as_str());
                            ui.end_row();
                        }
                    });

                if filtered.is_empty() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.heading("No results found");
                        ui.label("Try a different search keyword.");
                    });
                }
            });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_backend_events();
        if self.controller.status() == DashboardStatus::Loading {
            // Keep repainting so the completion event is picked up promptly.
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.header(ui);
            ui.separator();
            self.toolbar(ui);
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(self.endpoint.as_str());
                if !self.status_line.is_empty() {
                    ui.separator();
                    ui.weak(self.status_line.as_str());
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| self.body(ui));
    }
}
