//! `toppdawg` - Subscriber dashboard for the ToppDawg raw dog food service
//!
//! This library provides the core functionality behind the `tdawg` dashboard:
//! the per-run session of dog profiles and loyalty points, the feeding
//! recommendation rules, the persisted theme preference, and the queued
//! notification pipeline that confirms each added profile.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod account;
pub mod billing;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod diet;
pub mod error;
pub mod logging;
pub mod notify;
pub mod prefs;
pub mod profile;
pub mod session;

pub use account::AccountSession;
pub use billing::BillingClient;
pub use config::Config;
pub use dashboard::{Dashboard, DashboardSummary};
pub use diet::{FeedingPlan, LifeStage};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use prefs::PrefStore;
pub use profile::{PetProfile, ProfileDraft};
pub use session::Session;
