//! Outbound notifications for toppdawg.
//!
//! This module defines the notification record sent when a profile is added,
//! the [`Notifier`] trait that delivery backends implement, and the queued
//! dispatcher that retries failed deliveries in the background.

pub mod dispatch;
pub mod outbox;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::profile::PetProfile;

/// Subject line for profile-added notifications.
pub const PROFILE_ADDED_SUBJECT: &str = "Dog Profile Added";

/// Errors that can occur while queueing or delivering notifications.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The delivery backend rejected or failed the send.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// The dispatch queue is full.
    #[error("notification queue is full")]
    QueueFull,

    /// The dispatch worker has shut down.
    #[error("notification queue is closed")]
    QueueClosed,
}

/// Result type for notification operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

/// A single outbound notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Email address of the recipient.
    pub recipient: String,

    /// Subject line.
    pub subject: String,

    /// Message body.
    pub body: String,

    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new notification addressed to the given recipient.
    #[must_use]
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }

    /// Build the confirmation sent after a dog profile is added.
    #[must_use]
    pub fn profile_added(recipient: &str, profile: &PetProfile) -> Self {
        Self::new(
            recipient,
            PROFILE_ADDED_SUBJECT,
            format!(
                "Your dog's profile has been added successfully! \
                 Recommended daily food: {} lbs.",
                profile.recommended_food
            ),
        )
    }
}

/// A delivery backend for notifications.
///
/// Implementors perform one delivery attempt per call; retries are the
/// dispatcher's job, not the backend's.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// The name of this backend (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Deliver a single notification.
    ///
    /// # Errors
    ///
    /// Returns an error if this delivery attempt failed.
    async fn send(&self, notification: &Notification) -> Result<()>;
}

/// A notifier that only records deliveries in the log.
///
/// This is the default backend when no outbox directory is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, notification: &Notification) -> Result<()> {
        info!(
            recipient = %notification.recipient,
            subject = %notification.subject,
            "Notification delivered to log"
        );
        Ok(())
    }
}
