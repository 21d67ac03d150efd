//! File-based notification delivery.
//!
//! The outbox notifier writes each notification as a JSON file into a
//! directory, where an external mailer (or a curious developer) can pick
//! them up. It stands in for the hosted email service in local setups.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::debug;

use super::{Notification, Notifier, NotifyError, Result};

/// A notifier that drops each notification as a JSON file in a directory.
#[derive(Debug)]
pub struct OutboxNotifier {
    dir: PathBuf,
    seq: AtomicU64,
}

impl OutboxNotifier {
    /// Create a notifier writing into the given directory.
    ///
    /// The directory is created on first delivery, not here.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            seq: AtomicU64::new(0),
        }
    }

    /// The directory notifications are written into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of notification files currently sitting in the outbox.
    ///
    /// A missing directory counts as empty.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return 0;
        };

        entries
            .filter_map(std::result::Result::ok)
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == "json")
            })
            .count()
    }

    /// Build a unique file path for a notification.
    fn entry_path(&self, notification: &Notification) -> PathBuf {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        let stamp = notification.created_at.format("%Y%m%dT%H%M%S");
        self.dir.join(format!("{stamp}-{seq:04}.json"))
    }
}

#[async_trait]
impl Notifier for OutboxNotifier {
    fn name(&self) -> &'static str {
        "outbox"
    }

    async fn send(&self, notification: &Notification) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| NotifyError::Delivery(format!("create {}: {e}", self.dir.display())))?;

        let path = self.entry_path(notification);
        let json = serde_json::to_vec_pretty(notification)
            .map_err(|e| NotifyError::Delivery(format!("encode notification: {e}")))?;

        tokio::fs::write(&path, json)
            .await
            .map_err(|e| NotifyError::Delivery(format!("write {}: {e}", path.display())))?;

        debug!("Notification written to {}", path.display());
        Ok(())
    }
}
