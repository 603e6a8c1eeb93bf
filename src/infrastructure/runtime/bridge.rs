//! Runtime bridge - connects sync TUI thread with async Tokio runtime
//!
//! The TUI thread never awaits. It sends commands over a channel and drains
//! events on every loop iteration; the worker thread owns a Tokio runtime
//! and performs the HTTP fetches.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::runtime::Builder;

use crate::domain::FeedbackEntry;
use crate::infrastructure::feedback::FeedbackSource;
use crate::infrastructure::runtime::worker::run_async_worker;

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum RuntimeCommand {
    /// Fetch the full feedback list, tagged with the app's request id
    Fetch { request_id: u64 },
    /// Shutdown the worker
    Shutdown,
}

/// Events sent from the async worker to the TUI
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// Feedback list fetched and decoded
    FeedbackLoaded {
        request_id: u64,
        entries: Vec<FeedbackEntry>,
        elapsed: Duration,
    },
    /// The fetch failed as a whole
    FetchFailed { request_id: u64, message: String },
    /// Worker-level error, not tied to a request
    Error { message: String },
}

/// Bridge between sync TUI thread and async Tokio runtime
pub struct RuntimeBridge {
    cmd_tx: Sender<RuntimeCommand>,
    evt_rx: Receiver<RuntimeEvent>,
}

impl RuntimeBridge {
    /// Create a new runtime bridge fetching from `source`
    pub fn new(source: Arc<dyn FeedbackSource>) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<RuntimeCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<RuntimeEvent>();

        // Spawn the worker thread with its own Tokio runtime
        thread::Builder::new()
            .name("review-stats-worker".to_string())
            .spawn(move || {
                let rt = match Builder::new_multi_thread().enable_all().build() {
                    Ok(rt) => rt,
                    Err(err) => {
                        log::error!("failed to create Tokio runtime: {err}");
                        let _ = evt_tx.send(RuntimeEvent::Error {
                            message: format!("Failed to create Tokio runtime: {err}"),
                        });
                        return;
                    }
                };
                rt.block_on(async {
                    if let Err(err) = run_async_worker(source, cmd_rx, evt_tx.clone()).await {
                        let _ = evt_tx.send(RuntimeEvent::Error {
                            message: format!("Worker exited: {:#}", err),
                        });
                    }
                });
            })?;

        Ok(Self { cmd_tx, evt_rx })
    }

    /// Send a command to the async worker
    pub fn send(&self, cmd: RuntimeCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Worker channel closed"))
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<RuntimeEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }

    /// Block until the next event arrives or `timeout` passes
    pub fn recv_timeout(&self, timeout: Duration) -> Option<RuntimeEvent> {
        self.evt_rx.recv_timeout(timeout).ok()
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        // Try to send shutdown command
        let _ = self.cmd_tx.send(RuntimeCommand::Shutdown);
    }
}
