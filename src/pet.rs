use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::age::{AgeParts, DetailLevel, format_age};
use crate::convert::{ConfigError, human_age_years};
use crate::species::Species;

/// The pet record shape consumed from the storage layer.
///
/// Field names follow the persisted camelCase form (`birthDate`,
/// `breedCode`) so stored records round-trip unchanged. `breed_code` stays a
/// raw string: it is resolved against the breed table of `species` on every
/// query and simply falls back to the species default when it doesn't match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Uuid,
    pub name: String,
    pub birth_date: NaiveDate,
    pub species: Species,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed_code: Option<String>,
}

impl Pet {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, species: Species) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            birth_date,
            species,
            breed_code: None,
        }
    }

    #[must_use]
    pub fn with_breed(mut self, code: impl Into<String>) -> Self {
        self.breed_code = Some(code.into());
        self
    }

    /// Calendar age as of `reference`, or today when `None`.
    ///
    /// Results are computed fresh on every call; they depend on the
    /// reference date and must never be cached across it.
    pub fn age_parts(&self, reference: Option<NaiveDate>) -> AgeParts {
        AgeParts::between(self.birth_date, resolve_reference(reference))
    }

    /// Whole elapsed years, the truncated real-age input of the growth model
    pub fn age_in_years(&self, reference: Option<NaiveDate>) -> u32 {
        self.age_parts(reference).years
    }

    /// Human-equivalent age in whole years.
    ///
    /// # Errors
    /// Returns `ConfigError` only on malformed profile data.
    pub fn human_age(&self, reference: Option<NaiveDate>) -> Result<u32, ConfigError> {
        human_age_years(
            self.species,
            self.breed_code.as_deref(),
            self.age_in_years(reference),
        )
    }

    /// Formatted calendar age at the given detail level
    pub fn age_string(&self, reference: Option<NaiveDate>, level: DetailLevel) -> String {
        format_age(self.age_parts(reference), level)
    }
}

pub(crate) fn resolve_reference(reference: Option<NaiveDate>) -> NaiveDate {
    reference.unwrap_or_else(|| Local::now().date_naive())
}
