//! Pet profile types for toppdawg.
//!
//! This module defines the dog profile as entered on the dashboard form and
//! the completed record that carries its derived feeding recommendation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::diet::{self, LifeStage};
use crate::error::Result;

/// A pet profile as collected from the dashboard form, before completion.
///
/// Drafts are consumed when a profile is added, which is what clears the
/// form for the next entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    /// The dog's name. May be empty.
    pub name: String,

    /// The dog's breed. May be empty.
    pub breed: String,

    /// The dog's age in years.
    pub age_years: f64,

    /// The dog's body weight in pounds.
    pub weight_lbs: f64,

    /// Free-form dietary needs. May be empty.
    pub dietary_needs: String,
}

impl ProfileDraft {
    /// Validate the numeric fields of this draft.
    ///
    /// Name, breed, and dietary needs are deliberately permissive and are
    /// never rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the weight or age is not a usable number.
    pub fn validate(&self) -> Result<()> {
        diet::validate_inputs(self.weight_lbs, self.age_years)
    }
}

/// A completed pet profile with its derived feeding recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    /// The dog's name.
    pub name: String,

    /// The dog's breed.
    pub breed: String,

    /// The dog's age in years.
    pub age_years: f64,

    /// The dog's body weight in pounds.
    pub weight_lbs: f64,

    /// Free-form dietary needs.
    pub dietary_needs: String,

    /// Recommended daily food in pounds, fixed at two decimal places.
    pub recommended_food: String,

    /// When the profile was added.
    pub added_at: DateTime<Utc>,
}

impl PetProfile {
    /// Complete a draft by computing its feeding recommendation.
    ///
    /// Consumes the draft. The recommendation is computed once here and
    /// stored on the profile, so later rate changes never rewrite history.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft's weight or age is not a usable number.
    /// No profile is produced in that case.
    pub fn from_draft(draft: ProfileDraft) -> Result<Self> {
        let recommended_food = diet::daily_food_lbs(draft.weight_lbs, draft.age_years)?;

        Ok(Self {
            name: draft.name,
            breed: draft.breed,
            age_years: draft.age_years,
            weight_lbs: draft.weight_lbs,
            dietary_needs: draft.dietary_needs,
            recommended_food,
            added_at: Utc::now(),
        })
    }

    /// The life stage this profile's recommendation was computed at.
    #[must_use]
    pub fn life_stage(&self) -> LifeStage {
        LifeStage::for_age(self.age_years)
    }

    /// The dog's name, or a placeholder when none was given.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "(unnamed)"
        } else {
            &self.name
        }
    }
}
