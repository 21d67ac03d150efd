//! Queued notification dispatch with retries.
//!
//! Profile confirmations must never block or fail the dashboard action that
//! produced them. Adds enqueue onto a bounded channel and move on; a single
//! background worker drains the queue, retrying each delivery a configured
//! number of times before logging the loss and carrying on.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use super::{Notification, Notifier, NotifyError, Result};

/// Capacity of the pending notification queue.
const QUEUE_CAPACITY: usize = 32;

/// Retry policy for the dispatch worker.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Delivery attempts per notification before giving up.
    pub max_attempts: u32,

    /// Pause between attempts for the same notification.
    pub retry_delay: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// A handle for enqueueing notifications onto a running dispatcher.
///
/// Cloneable; the worker shuts down once every handle has been dropped and
/// the remaining queue has been drained.
#[derive(Debug, Clone)]
pub struct DispatchHandle {
    tx: mpsc::Sender<Notification>,
}

impl DispatchHandle {
    /// Queue a notification without waiting for delivery.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::QueueFull`] if the queue is at capacity, or
    /// [`NotifyError::QueueClosed`] if the worker has shut down. The caller
    /// decides whether that is worth more than a log line.
    pub fn enqueue(&self, notification: Notification) -> Result<()> {
        self.tx.try_send(notification).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => NotifyError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => NotifyError::QueueClosed,
        })
    }
}

/// Spawn the dispatch worker for the given delivery backend.
///
/// Returns the enqueue handle and the worker's join handle. The join handle
/// resolves to the number of successfully delivered notifications once the
/// queue closes and drains.
#[must_use]
pub fn spawn(
    notifier: Arc<dyn Notifier>,
    config: DispatchConfig,
) -> (DispatchHandle, JoinHandle<u64>) {
    let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
    let worker = tokio::spawn(run_worker(notifier, config, rx));
    (DispatchHandle { tx }, worker)
}

/// Drain the queue until every sender is gone, delivering each notification.
async fn run_worker(
    notifier: Arc<dyn Notifier>,
    config: DispatchConfig,
    mut rx: mpsc::Receiver<Notification>,
) -> u64 {
    debug!(
        backend = notifier.name(),
        max_attempts = config.max_attempts,
        "Dispatch worker started"
    );

    let mut delivered = 0u64;
    while let Some(notification) = rx.recv().await {
        if deliver_with_retry(notifier.as_ref(), &config, &notification).await {
            delivered += 1;
        }
    }

    debug!(delivered, "Notification queue closed, dispatch worker stopping");
    delivered
}

/// Attempt one delivery, retrying up to the configured limit.
///
/// Returns `true` if the notification was delivered.
async fn deliver_with_retry(
    notifier: &dyn Notifier,
    config: &DispatchConfig,
    notification: &Notification,
) -> bool {
    for attempt in 1..=config.max_attempts {
        match notifier.send(notification).await {
            Ok(()) => {
                debug!(
                    backend = notifier.name(),
                    recipient = %notification.recipient,
                    attempt,
                    "Notification delivered"
                );
                return true;
            }
            Err(e) => {
                warn!(
                    backend = notifier.name(),
                    attempt,
                    max_attempts = config.max_attempts,
                    error = %e,
                    "Notification delivery failed"
                );
                if attempt < config.max_attempts {
                    tokio::time::sleep(config.retry_delay).await;
                }
            }
        }
    }

    error!(
        recipient = %notification.recipient,
        subject = %notification.subject,
        "Giving up on notification after {} attempts",
        config.max_attempts
    );
    false
}
