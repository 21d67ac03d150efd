//! In-memory dashboard session state.
//!
//! A [`Session`] holds everything a single run of the dashboard accumulates:
//! the dogs added so far, the loyalty points earned for adding them, and the
//! current theme flag. It is discarded when the run ends; only the theme
//! flag survives via the preference store.

use crate::error::Result;
use crate::profile::{PetProfile, ProfileDraft};

/// Loyalty points awarded for each profile added.
pub const LOYALTY_AWARD_POINTS: u32 = 10;

/// Per-run dashboard state.
///
/// The dog list is append-only: profiles are never edited or removed once
/// added, and earlier entries keep their positions.
#[derive(Debug, Default)]
pub struct Session {
    dogs: Vec<PetProfile>,
    loyalty_points: u32,
    dark_mode: bool,
}

impl Session {
    /// Create an empty session with the default (light) theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session seeded with a persisted theme flag.
    #[must_use]
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    /// Add a dog profile from a form draft.
    ///
    /// Completes the draft, appends the profile to the dog list, and then
    /// awards [`LOYALTY_AWARD_POINTS`]. Returns the completed profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft fails validation. The session is left
    /// unchanged in that case: no profile is appended and no points are
    /// awarded.
    pub fn add_profile(&mut self, draft: ProfileDraft) -> Result<PetProfile> {
        let profile = PetProfile::from_draft(draft)?;

        self.dogs.push(profile.clone());
        self.loyalty_points += LOYALTY_AWARD_POINTS;

        Ok(profile)
    }

    /// All dogs added this session, in the order they were added.
    #[must_use]
    pub fn dogs(&self) -> &[PetProfile] {
        &self.dogs
    }

    /// Number of dogs added this session.
    #[must_use]
    pub fn dog_count(&self) -> usize {
        self.dogs.len()
    }

    /// Loyalty points earned this session.
    #[must_use]
    pub fn loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    /// Whether dark mode is currently on.
    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip the theme flag and return the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}
