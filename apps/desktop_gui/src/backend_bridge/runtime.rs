//! Runtime bridge between the UI command queue and the fetch transport.
//!
//! The worker thread hosts its own tokio runtime. Each fetch runs as its own
//! task so a hung request never blocks the command loop; the controller's
//! cancellation token is what ends a superseded request.

use std::{sync::Arc, thread};

use client_core::FetchClient;
use crossbeam_channel::{Receiver, Sender};
use tracing::{error, info};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(endpoint: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Backend worker startup failure: {err}"
                )));
                error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let client = Arc::new(FetchClient::new(endpoint));
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchUsers { ticket } => {
                        info!("backend: fetch_users");
                        let client = client.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let outcome = client.fetch_users(ticket.token()).await;
                            match &outcome {
                                Err(err) if !err.is_abort() => {
                                    error!("backend: fetch_users failed: {err}");
                                }
                                _ => {}
                            }
                            let _ = ui_tx.try_send(UiEvent::FetchFinished { ticket, outcome });
                        });
                    }
                }
            }
        });
    });
}
