use std::fmt;

use serde::{Deserialize, Serialize};

use crate::breed::{BreedProfile, CatBreed, DogBreed};
use crate::consts::HUMAN_LIFESPAN;
use crate::convert::ConfigError;

/// Coarse animal-type classification driving which growth profile applies.
///
/// Serialized as the stable code strings the storage layer persists
/// (`"dog"`, `"smallAnimal"`, ...), so records written by the app round-trip
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Species {
    Dog,
    Cat,
    Fish,
    SmallAnimal,
    Turtle,
    Bird,
    Insect,
    Other,
}

/// Two-phase growth curve parameters for one species.
///
/// `early_growth_ratio` is the fraction of the lifespan spent in the rapid
/// growth phase; `early_growth_target` is the human-equivalent age reached at
/// the end of that phase. `default_lifespan` applies when no breed override
/// resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthProfile {
    pub early_growth_ratio: f64,
    pub early_growth_target: f64,
    pub default_lifespan: f64,
}

impl GrowthProfile {
    /// Checks the profile invariants the conversion model relies on.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the ratio is outside (0, 1], the target is
    /// outside (0, `HUMAN_LIFESPAN`), or the lifespan is not positive. The
    /// built-in table always passes; this guards hypothetical custom profiles.
    pub fn validate(self, species: Species) -> Result<(), ConfigError> {
        if !(self.early_growth_ratio > 0.0 && self.early_growth_ratio <= 1.0) {
            return Err(ConfigError::InvalidGrowthRatio {
                species,
                ratio: self.early_growth_ratio,
            });
        }
        if !(self.early_growth_target > 0.0 && self.early_growth_target < HUMAN_LIFESPAN) {
            return Err(ConfigError::InvalidGrowthTarget {
                species,
                target: self.early_growth_target,
            });
        }
        if self.default_lifespan <= 0.0 {
            return Err(ConfigError::InvalidLifespan {
                species,
                lifespan: self.default_lifespan,
            });
        }
        Ok(())
    }
}

impl Species {
    /// Every species, in persisted-enumeration order
    pub const ALL: [Self; 8] = [
        Self::Dog,
        Self::Cat,
        Self::Fish,
        Self::SmallAnimal,
        Self::Turtle,
        Self::Bird,
        Self::Insect,
        Self::Other,
    ];

    /// Stable identifier persisted by the storage layer
    pub const fn code(self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Fish => "fish",
            Self::SmallAnimal => "smallAnimal",
            Self::Turtle => "turtle",
            Self::Bird => "bird",
            Self::Insect => "insect",
            Self::Other => "other",
        }
    }

    /// Resolves a persisted species code; `None` if the code is unknown
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Fish => "Fish",
            Self::SmallAnimal => "Small animal",
            Self::Turtle => "Turtle",
            Self::Bird => "Bird",
            Self::Insect => "Insect",
            Self::Other => "Other",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dog => "🐶",
            Self::Cat => "🐱",
            Self::Fish => "🐟",
            Self::SmallAnimal => "🐹",
            Self::Turtle => "🐢",
            Self::Bird => "🐦",
            Self::Insect => "🐛",
            Self::Other => "🐾",
        }
    }

    /// Growth curve parameters for this species.
    ///
    /// Total over the enum; the values are fixed empirical data, so every
    /// variant has an entry and lookups cannot fail at runtime.
    pub const fn growth_profile(self) -> GrowthProfile {
        match self {
            Self::Dog => GrowthProfile {
                early_growth_ratio: 0.167,
                early_growth_target: 24.0,
                default_lifespan: 12.0,
            },
            Self::Cat => GrowthProfile {
                early_growth_ratio: 0.133,
                early_growth_target: 24.0,
                default_lifespan: 15.0,
            },
            Self::Fish => GrowthProfile {
                early_growth_ratio: 0.2,
                early_growth_target: 24.0,
                default_lifespan: 5.0,
            },
            Self::SmallAnimal => GrowthProfile {
                early_growth_ratio: 0.25,
                early_growth_target: 30.0,
                default_lifespan: 4.0,
            },
            Self::Turtle => GrowthProfile {
                early_growth_ratio: 0.1,
                early_growth_target: 20.0,
                default_lifespan: 30.0,
            },
            Self::Bird => GrowthProfile {
                early_growth_ratio: 0.2,
                early_growth_target: 28.0,
                default_lifespan: 10.0,
            },
            Self::Insect => GrowthProfile {
                early_growth_ratio: 0.3,
                early_growth_target: 35.0,
                default_lifespan: 1.0,
            },
            Self::Other => GrowthProfile {
                early_growth_ratio: 0.2,
                early_growth_target: 25.0,
                default_lifespan: 10.0,
            },
        }
    }

    /// Whether this species has a breed table to refine lifespans with
    pub const fn supports_breeds(self) -> bool {
        matches!(self, Self::Dog | Self::Cat)
    }

    /// Looks up a breed code within this species' own table.
    ///
    /// Returns `None` when the code doesn't match an entry for this species
    /// or the species has no breed table. Codes are never resolved across
    /// species: a cat breed code can't set a dog's lifespan.
    pub fn breed_profile(self, code: &str) -> Option<BreedProfile> {
        match self {
            Self::Dog => DogBreed::from_code(code).map(BreedProfile::from),
            Self::Cat => CatBreed::from_code(code).map(BreedProfile::from),
            _ => None,
        }
    }

    /// Average lifespan in years: the breed override if `breed_code` resolves
    /// within this species, otherwise the species default.
    pub fn effective_lifespan(self, breed_code: Option<&str>) -> f64 {
        breed_code
            .and_then(|code| self.breed_profile(code))
            .map_or(self.growth_profile().default_lifespan, |b| b.average_lifespan)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
