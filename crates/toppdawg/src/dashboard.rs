//! Dashboard controller.
//!
//! This module wires the pieces of a dashboard run together: the in-memory
//! [`Session`], the persistent [`PrefStore`], the signed-in account (if any),
//! and the notification dispatcher. Commands from the CLI and the interactive
//! prompt both funnel through [`Dashboard`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::account::AccountSession;
use crate::error::{Error, Result};
use crate::notify::dispatch::DispatchHandle;
use crate::notify::Notification;
use crate::prefs::PrefStore;
use crate::profile::{PetProfile, ProfileDraft};
use crate::session::Session;

/// A snapshot of what the dashboard shows at a glance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    /// Number of dogs added this session.
    pub dogs: usize,
    /// Loyalty points earned this session.
    pub loyalty_points: u32,
    /// Whether dark mode is on.
    pub dark_mode: bool,
    /// Email of the signed-in subscriber, if any.
    pub account_email: Option<String>,
}

/// The dashboard controller.
///
/// Owns the session state for one run. The persisted theme flag is read
/// once at startup; afterwards the store is only written, on toggles.
#[derive(Debug)]
pub struct Dashboard {
    session: Session,
    prefs: PrefStore,
    account: Option<AccountSession>,
    dispatch: Option<DispatchHandle>,
}

impl Dashboard {
    /// Create a dashboard over the given preference store and collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted theme flag cannot be read.
    pub fn new(
        prefs: PrefStore,
        account: Option<AccountSession>,
        dispatch: Option<DispatchHandle>,
    ) -> Result<Self> {
        let dark_mode = prefs.dark_mode()?;
        debug!(
            dark_mode,
            signed_in = account.is_some(),
            "Dashboard starting"
        );

        Ok(Self {
            session: Session::with_dark_mode(dark_mode),
            prefs,
            account,
            dispatch,
        })
    }

    /// The current session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The underlying preference store.
    #[must_use]
    pub fn prefs(&self) -> &PrefStore {
        &self.prefs
    }

    /// The signed-in account, if any.
    #[must_use]
    pub fn account(&self) -> Option<&AccountSession> {
        self.account.as_ref()
    }

    /// Add a dog profile and queue the confirmation notification.
    ///
    /// The add itself never waits on, or fails because of, notification
    /// delivery.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft fails validation. The session is left
    /// unchanged and nothing is queued in that case.
    pub fn add_profile(&mut self, draft: ProfileDraft) -> Result<PetProfile> {
        let profile = self.session.add_profile(draft)?;
        self.notify_profile_added(&profile);
        Ok(profile)
    }

    /// Queue the profile-added confirmation, if there is anyone to tell.
    fn notify_profile_added(&self, profile: &PetProfile) {
        let Some(dispatch) = &self.dispatch else {
            debug!("Notifications disabled, skipping confirmation");
            return;
        };
        let Some(account) = &self.account else {
            debug!("No signed-in account, skipping confirmation");
            return;
        };

        let notification = Notification::profile_added(&account.email, profile);
        if let Err(e) = dispatch.enqueue(notification) {
            warn!(error = %e, "Could not queue profile confirmation");
        }
    }

    /// Flip the theme and persist the new flag.
    ///
    /// Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted. The in-memory flag
    /// is rolled back so it never disagrees with the store.
    pub fn toggle_dark_mode(&mut self) -> Result<bool> {
        let on = self.session.toggle_dark_mode();
        if let Err(e) = self.prefs.set_dark_mode(on) {
            self.session.toggle_dark_mode();
            return Err(e);
        }
        Ok(on)
    }

    /// Snapshot the dashboard state for display.
    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            dogs: self.session.dog_count(),
            loyalty_points: self.session.loyalty_points(),
            dark_mode: self.session.dark_mode(),
            account_email: self.account.as_ref().map(|a| a.email.clone()),
        }
    }
}

/// A command entered at the interactive session prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Add a dog profile.
    Add(ProfileDraft),
    /// List the dogs added this session.
    Dogs,
    /// Show the loyalty point balance.
    Points,
    /// Toggle the theme.
    Theme,
    /// Show the dashboard summary.
    Status,
    /// Show available commands.
    Help,
    /// Leave the session.
    Quit,
}

impl SessionCommand {
    /// Parse one line of session input.
    ///
    /// Returns `Ok(None)` for blank lines.
    ///
    /// # Errors
    ///
    /// Returns an error for an unrecognized command word or malformed
    /// `add` arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(None);
        };

        let command = match word {
            "add" => Self::parse_add(&parts.collect::<Vec<_>>())?,
            "dogs" | "list" => Self::Dogs,
            "points" => Self::Points,
            "theme" | "toggle" => Self::Theme,
            "status" | "summary" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(Error::unknown_command(other)),
        };

        Ok(Some(command))
    }

    /// Parse the arguments of an `add` line.
    ///
    /// Expected shape: `add <name> <breed> <age> <weight> [dietary needs...]`.
    /// Everything after the weight is joined into the dietary needs field.
    fn parse_add(args: &[&str]) -> Result<Self> {
        if args.len() < 4 {
            return Err(Error::invalid_input(
                "add",
                "expected: add <name> <breed> <age> <weight> [dietary needs]",
            ));
        }

        let age_years: f64 = args[2]
            .parse()
            .map_err(|_| Error::invalid_input("age", format!("'{}' is not a number", args[2])))?;
        let weight_lbs: f64 = args[3].parse().map_err(|_| {
            Error::invalid_input("weight", format!("'{}' is not a number", args[3]))
        })?;

        Ok(Self::Add(ProfileDraft {
            name: args[0].to_string(),
            breed: args[1].to_string(),
            age_years,
            weight_lbs,
            dietary_needs: args[4..].join(" "),
        }))
    }
}
