use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_info, engine_warn};
use thiserror::Error;

use crate::client::Shortener;
use crate::{CreateError, EngineEvent, FailureKind, RequestId};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

enum EngineCommand {
    Create { request_id: RequestId, url: String },
}

/// Sending half of the engine: queues create requests on the background runtime.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving half of the engine: one [`EngineEvent`] per queued request.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Starts the engine thread with its own tokio runtime.
    ///
    /// The thread exits once every [`EngineHandle`] clone has been dropped.
    pub fn spawn(shortener: Arc<dyn Shortener>) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("shortener-engine".to_string())
            .spawn(move || {
                let mut in_flight = Vec::new();
                while let Ok(command) = cmd_rx.recv() {
                    in_flight.retain(|task: &tokio::task::JoinHandle<()>| !task.is_finished());
                    let shortener = shortener.clone();
                    let event_tx = event_tx.clone();
                    in_flight.push(runtime.spawn(handle_command(shortener, command, event_tx)));
                }
                // A started request always runs to completion.
                engine_info!(
                    "Engine command channel closed; draining {} request(s)",
                    in_flight.len()
                );
                runtime.block_on(async {
                    for task in in_flight {
                        let _ = task.await;
                    }
                });
            })?;

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    /// Queues a create request. Returns false when the engine has stopped, in
    /// which case no completion event will follow.
    pub fn create(&self, request_id: RequestId, url: impl Into<String>) -> bool {
        let sent = self.cmd_tx.send(EngineCommand::Create {
            request_id,
            url: url.into(),
        });
        if sent.is_err() {
            engine_warn!("Engine stopped; dropping request_id={}", request_id);
        }
        sent.is_ok()
    }
}

impl EngineEvents {
    /// Blocks until the next event. Returns `None` once the engine has stopped.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    shortener: Arc<dyn Shortener>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Create { request_id, url } => {
            // Run the call in its own task so a panic still yields a completion.
            let call = tokio::spawn(async move { shortener.create(&url).await });
            let result = call.await.unwrap_or_else(|err| {
                Err(CreateError::new(
                    FailureKind::Aborted,
                    format!("request task failed: {err}"),
                ))
            });
            match &result {
                Ok(short_url) => {
                    engine_info!("Create request_id={} short_url={}", request_id, short_url)
                }
                Err(err) => engine_warn!("Create request_id={} failed: {}", request_id, err),
            }
            let _ = event_tx.send(EngineEvent::CreateCompleted { request_id, result });
        }
    }
}
