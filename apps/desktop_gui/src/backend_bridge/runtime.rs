//! Worker thread that owns the async runtime and performs forwarding.

use std::thread;

use anyhow::Context;
use crossbeam_channel::{Receiver, Sender};
use policy_core::ContactFormHandler;
use tracing::{debug, warn};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    handler: ContactFormHandler,
) -> anyhow::Result<thread::JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build backend runtime")?;

    thread::Builder::new()
        .name("policy-center-backend".into())
        .spawn(move || {
            while let Ok(cmd) = cmd_rx.recv() {
                debug!(command = cmd.name(), "backend command received");
                let event = match cmd {
                    BackendCommand::ForwardContact { submission } => {
                        UiEvent::ContactForwarded(runtime.block_on(handler.deliver(submission)))
                    }
                };
                if ui_tx.send(event).is_err() {
                    warn!("ui event queue closed; stopping backend worker");
                    break;
                }
            }
        })
        .context("failed to spawn backend worker thread")
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use async_trait::async_trait;
    use crossbeam_channel::bounded;
    use policy_core::{FormEffect, SubmissionSink};
    use shared::{error::ForwardingError, protocol::ContactSubmission};

    use super::*;

    struct FlakySink {
        fail: bool,
    }

    #[async_trait]
    impl SubmissionSink for FlakySink {
        async fn forward(&self, _submission: &ContactSubmission) -> Result<(), ForwardingError> {
            if self.fail {
                Err(ForwardingError::new("relay down"))
            } else {
                Ok(())
            }
        }
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "A".into(),
            email: "a@b.com".into(),
            phone: String::new(),
            message: "hi".into(),
        }
    }

    fn roundtrip(fail: bool) -> UiEvent {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(4);
        let handler = ContactFormHandler::new(Arc::new(FlakySink { fail }));
        let worker = launch(cmd_rx, ui_tx, handler).expect("launch");

        cmd_tx
            .send(BackendCommand::ForwardContact {
                submission: submission(),
            })
            .expect("queue");
        let event = ui_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("ui event");
        drop(cmd_tx);
        worker.join().expect("worker exits");
        event
    }

    #[test]
    fn worker_reports_delivered_effects() {
        match roundtrip(false) {
            UiEvent::ContactForwarded(Ok(effects)) => {
                assert_eq!(effects.last(), Some(&FormEffect::ClearFields));
            }
            _ => panic!("expected successful forward"),
        }
    }

    #[test]
    fn worker_reports_forwarding_failure() {
        match roundtrip(true) {
            UiEvent::ContactForwarded(Err(error)) => assert_eq!(error.reason, "relay down"),
            _ => panic!("expected failed forward"),
        }
    }
}
