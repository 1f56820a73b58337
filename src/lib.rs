//! Pet age domain model.
//!
//! Converts a pet's birth date and species/breed into a calendar age and a
//! human-equivalent age using a two-phase nonlinear growth curve,
//! parameterized per species and per breed by average-lifespan data.
//!
//! Everything is pure, synchronous computation over immutable tables; calls
//! are safe to make concurrently without coordination. Callers that need
//! deterministic results inject an explicit reference date instead of
//! relying on the wall clock.

mod age;
mod breed;
mod consts;
mod convert;
mod pet;
mod prelude;
mod species;

pub use age::{AgeParts, DetailLevel, days_in_month, format_age, is_leap_year};
pub use breed::{BreedProfile, CatBreed, DogBreed, DogSize, Popularity};
pub use consts::HUMAN_LIFESPAN;
pub use convert::{ConfigError, human_age_with_lifespan, human_age_years};
pub use pet::Pet;
pub use species::{GrowthProfile, Species};

use chrono::NaiveDate;

/// Computed age in all granularities; derived fresh per query, never
/// persisted or cached across reference dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub human_age_years: u32,
}

impl AgeResult {
    /// The calendar portion of the result, for formatting
    pub const fn parts(self) -> AgeParts {
        AgeParts {
            years: self.years,
            months: self.months,
            days: self.days,
        }
    }

    /// Formats the calendar portion at the given detail level
    pub fn format(self, level: DetailLevel) -> String {
        format_age(self.parts(), level)
    }
}

/// Computes a pet's calendar age and human-equivalent age as of `reference`
/// (today when `None`).
///
/// # Errors
/// Returns `ConfigError` only on malformed profile data; unknown breed
/// codes and future birth dates degrade to defined answers.
pub fn compute_age(pet: &Pet, reference: Option<NaiveDate>) -> Result<AgeResult, ConfigError> {
    let parts = pet.age_parts(reference);
    let human = human_age_years(pet.species, pet.breed_code.as_deref(), parts.years)?;
    Ok(AgeResult {
        years: parts.years,
        months: parts.months,
        days: parts.days,
        human_age_years: human,
    })
}

/// Human-equivalent age of a pet as of `reference` (today when `None`).
///
/// # Errors
/// Returns `ConfigError` only on malformed profile data.
pub fn human_age(pet: &Pet, reference: Option<NaiveDate>) -> Result<u32, ConfigError> {
    pet.human_age(reference)
}
