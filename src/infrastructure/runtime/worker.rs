//! Async worker - runs in Tokio runtime and performs feedback fetches

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::time::interval;

use crate::infrastructure::feedback::FeedbackSource;
use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};

/// Run the async worker loop until shutdown or the TUI side hangs up
pub async fn run_async_worker(
    source: Arc<dyn FeedbackSource>,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) -> Result<()> {
    let mut poll_interval = interval(Duration::from_millis(25));
    log::debug!("worker started for {}", source.endpoint_name());

    loop {
        poll_interval.tick().await;

        // Process commands (non-blocking)
        loop {
            let cmd = match cmd_rx.try_recv() {
                Ok(cmd) => cmd,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            };
            match cmd {
                RuntimeCommand::Shutdown => return Ok(()),
                RuntimeCommand::Fetch { request_id } => {
                    // Fetches run as their own tasks so the command loop
                    // keeps draining while a request is in flight.
                    let source = Arc::clone(&source);
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        let event = fetch_feedback(source.as_ref(), request_id).await;
                        let _ = evt_tx.send(event);
                    });
                }
            }
        }
    }
}

/// Perform one fetch and turn its outcome into an event
pub async fn fetch_feedback(source: &dyn FeedbackSource, request_id: u64) -> RuntimeEvent {
    let started = Instant::now();
    match source.fetch_all().await {
        Ok(entries) => {
            let elapsed = started.elapsed();
            log::info!(
                "fetched {} feedback entries from {} in {}ms (request {})",
                entries.len(),
                source.endpoint_name(),
                elapsed.as_millis(),
                request_id
            );
            RuntimeEvent::FeedbackLoaded {
                request_id,
                entries,
                elapsed,
            }
        }
        Err(err) => {
            log::error!(
                "Error fetching feedback data from {}: {err}",
                source.endpoint_name()
            );
            RuntimeEvent::FetchFailed {
                request_id,
                message: err.to_string(),
            }
        }
    }
}
