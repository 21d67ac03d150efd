//! Feeding recommendation rules for toppdawg.
//!
//! This module computes the recommended daily ration of raw food for a dog
//! from its body weight and age. Puppies are fed at double the adult rate.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Age in years below which a dog is fed at the puppy rate.
pub const PUPPY_AGE_CUTOFF_YEARS: f64 = 1.0;

/// Pounds of food per pound of body weight per day for puppies.
pub const PUPPY_MULTIPLIER: f64 = 0.05;

/// Pounds of food per pound of body weight per day for adult dogs.
pub const ADULT_MULTIPLIER: f64 = 0.025;

/// The life stage a feeding rate is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// Under one year old.
    Puppy,
    /// One year old or older.
    Adult,
}

impl LifeStage {
    /// Determine the life stage for a dog of the given age.
    #[must_use]
    pub fn for_age(age_years: f64) -> Self {
        if age_years < PUPPY_AGE_CUTOFF_YEARS {
            Self::Puppy
        } else {
            Self::Adult
        }
    }

    /// The daily feeding multiplier for this life stage.
    #[must_use]
    pub fn daily_multiplier(self) -> f64 {
        match self {
            Self::Puppy => PUPPY_MULTIPLIER,
            Self::Adult => ADULT_MULTIPLIER,
        }
    }
}

impl std::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Puppy => write!(f, "puppy"),
            Self::Adult => write!(f, "adult"),
        }
    }
}

/// A computed feeding recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingPlan {
    /// Body weight the plan was computed for, in pounds.
    pub weight_lbs: f64,
    /// Age the plan was computed for, in years.
    pub age_years: f64,
    /// Life stage the feeding rate was taken from.
    pub life_stage: LifeStage,
    /// Recommended daily amount in pounds, fixed at two decimal places.
    pub daily_food_lbs: String,
}

impl FeedingPlan {
    /// Compute a feeding plan for the given weight and age.
    ///
    /// # Errors
    ///
    /// Returns an error if the weight or age is not a usable number.
    pub fn compute(weight_lbs: f64, age_years: f64) -> Result<Self> {
        validate_inputs(weight_lbs, age_years)?;

        let life_stage = LifeStage::for_age(age_years);
        let amount = weight_lbs * life_stage.daily_multiplier();

        Ok(Self {
            weight_lbs,
            age_years,
            life_stage,
            daily_food_lbs: format!("{amount:.2}"),
        })
    }
}

/// Validate feeding inputs before any computation or state change.
///
/// Weight must be a finite number greater than zero. Age must be a finite
/// number of at least zero.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] naming the offending field.
pub fn validate_inputs(weight_lbs: f64, age_years: f64) -> Result<()> {
    if !weight_lbs.is_finite() {
        return Err(Error::invalid_input("weight", "must be a number"));
    }
    if weight_lbs <= 0.0 {
        return Err(Error::invalid_input("weight", "must be greater than 0"));
    }
    if !age_years.is_finite() {
        return Err(Error::invalid_input("age", "must be a number"));
    }
    if age_years < 0.0 {
        return Err(Error::invalid_input("age", "must not be negative"));
    }
    Ok(())
}

/// Compute the recommended daily food amount in pounds.
///
/// Returns the amount as a decimal string fixed at two decimal places,
/// matching how it is shown on the dashboard and in notifications.
///
/// # Errors
///
/// Returns an error if the weight or age is not a usable number.
pub fn daily_food_lbs(weight_lbs: f64, age_years: f64) -> Result<String> {
    FeedingPlan::compute(weight_lbs, age_years).map(|plan| plan.daily_food_lbs)
}
