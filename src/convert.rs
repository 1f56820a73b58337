//! Human-equivalent age conversion.
//!
//! A pet's life is mapped onto a human lifespan of `HUMAN_LIFESPAN` years in
//! two linear phases: a rapid growth phase covering `early_growth_ratio` of
//! the lifespan and reaching `early_growth_target` human years, then a slower
//! phase covering the rest. Pets that outlive the average lifespan keep
//! extrapolating on the second phase, past 85.
//!
//! The real-age input is whole elapsed years. Human age is therefore a step
//! function that only moves on birthdays; the flat region between birthdays
//! matches the original behavior.

use crate::consts::HUMAN_LIFESPAN;
use crate::species::Species;

/// Malformed growth profile or lifespan data.
///
/// This is a programmer/deployment error: the built-in tables never trigger
/// it, and it should abort early and loudly rather than be shown to users.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Early growth ratio must be a fraction of the lifespan.
    #[error("invalid growth profile for {species}: early growth ratio {ratio} is outside (0, 1]")]
    InvalidGrowthRatio { species: Species, ratio: f64 },

    /// Growth target at or past the human lifespan would flatten or invert
    /// the second phase.
    #[error("invalid growth profile for {species}: growth target {target} is outside (0, {})", HUMAN_LIFESPAN)]
    InvalidGrowthTarget { species: Species, target: f64 },

    /// Lifespans must be positive.
    #[error("invalid lifespan {lifespan} for {species}: must be positive")]
    InvalidLifespan { species: Species, lifespan: f64 },

    /// The early growth phase consumed the entire lifespan, leaving the
    /// second phase with nothing to divide by.
    #[error(
        "invalid growth profile for {species}: early phase ({early_years} years) consumes the whole lifespan ({lifespan} years)"
    )]
    DegenerateGrowthPhase {
        species: Species,
        early_years: f64,
        lifespan: f64,
    },
}

/// Converts whole elapsed years into a human-equivalent age using the
/// species profile and an explicit lifespan (the original's custom-lifespan
/// override path).
///
/// # Errors
/// Returns `ConfigError` only for malformed profile data or a non-positive
/// lifespan; never for valid species values or old pets.
pub fn human_age_with_lifespan(
    species: Species,
    lifespan: f64,
    whole_years: u32,
) -> Result<u32, ConfigError> {
    let profile = species.growth_profile();
    profile.validate(species)?;
    if lifespan <= 0.0 {
        return Err(ConfigError::InvalidLifespan { species, lifespan });
    }

    let early_years = lifespan * profile.early_growth_ratio;
    if early_years <= 0.0 {
        return Err(ConfigError::DegenerateGrowthPhase {
            species,
            early_years,
            lifespan,
        });
    }

    let real_age = f64::from(whole_years);
    let human_age = if real_age <= early_years {
        (real_age / early_years) * profile.early_growth_target
    } else {
        let remaining_years = lifespan - early_years;
        if remaining_years <= 0.0 {
            return Err(ConfigError::DegenerateGrowthPhase {
                species,
                early_years,
                lifespan,
            });
        }
        let remaining_human_span = HUMAN_LIFESPAN - profile.early_growth_target;
        profile.early_growth_target
            + ((real_age - early_years) / remaining_years) * remaining_human_span
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let floored = human_age.max(0.0).floor() as u32;
    Ok(floored)
}

/// Converts whole elapsed years into a human-equivalent age, resolving the
/// lifespan from the breed table (or the species default on a miss).
///
/// # Errors
/// Returns `ConfigError` only for malformed profile data. Unknown breed
/// codes are not errors; they fall back to the species default.
pub fn human_age_years(
    species: Species,
    breed_code: Option<&str>,
    whole_years: u32,
) -> Result<u32, ConfigError> {
    human_age_with_lifespan(species, species.effective_lifespan(breed_code), whole_years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_one_year() {
        // early phase: 12 * 0.167 = 2.004 years; (1 / 2.004) * 24 = 11.976
        assert_eq!(human_age_years(Species::Dog, None, 1).unwrap(), 11);
    }

    #[test]
    fn test_dog_five_years() {
        // second phase: 24 + ((5 - 2.004) / 9.996) * 61 = 42.28
        assert_eq!(human_age_years(Species::Dog, None, 5).unwrap(), 42);
    }

    #[test]
    fn test_sphynx_outlives_breed_lifespan() {
        // sphynx lifespan 7.0 overrides the cat default 15; at 8 real years
        // the pet has outlived the average and extrapolates past 85
        assert_eq!(human_age_years(Species::Cat, Some("sphynx"), 8).unwrap(), 95);
    }

    #[test]
    fn test_unknown_breed_falls_back_to_species_default() {
        let with_unknown = human_age_years(Species::Dog, Some("notADog"), 5).unwrap();
        let without = human_age_years(Species::Dog, None, 5).unwrap();
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_zero_age_is_zero() {
        for species in Species::ALL {
            assert_eq!(human_age_years(species, None, 0).unwrap(), 0);
        }
    }

    #[test]
    fn test_monotonic_in_real_age() {
        for species in Species::ALL {
            let mut last = 0;
            for years in 0..=40 {
                let age = human_age_years(species, None, years).unwrap();
                assert!(
                    age >= last,
                    "{species}: human age decreased at {years} real years"
                );
                last = age;
            }
        }
    }

    #[test]
    fn test_phase_boundary_continuity() {
        // smallAnimal: lifespan 4 * ratio 0.25 = exactly 1.0 early years, so
        // one whole year lands exactly on the phase boundary
        let at_boundary = human_age_with_lifespan(Species::SmallAnimal, 4.0, 1).unwrap();
        assert_eq!(at_boundary, 30);

        // both branches agree at the boundary: floor(target + 0) == floor(target)
        let target = Species::SmallAnimal.growth_profile().early_growth_target;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let floored = target.floor() as u32;
        assert_eq!(at_boundary, floored);
    }

    #[test]
    fn test_breed_override_only_changes_lifespan() {
        // the growth ratio and target stay species-level; a breed override
        // shifts the curve through the lifespan input alone
        let profile = Species::Cat.growth_profile();
        let direct = human_age_with_lifespan(Species::Cat, 7.0, 3).unwrap();
        let via_breed = human_age_years(Species::Cat, Some("sphynx"), 3).unwrap();
        assert_eq!(direct, via_breed);
        assert_eq!(profile.early_growth_target, 24.0);
        assert_eq!(profile.early_growth_ratio, 0.133);
    }

    #[test]
    fn test_custom_lifespan_takes_precedence() {
        let custom = human_age_with_lifespan(Species::Dog, 20.0, 10).unwrap();
        let default = human_age_years(Species::Dog, None, 10).unwrap();
        assert_ne!(custom, default);
    }

    #[test]
    fn test_non_positive_lifespan_is_config_error() {
        assert!(matches!(
            human_age_with_lifespan(Species::Dog, 0.0, 3),
            Err(ConfigError::InvalidLifespan { .. })
        ));
        assert!(matches!(
            human_age_with_lifespan(Species::Dog, -1.0, 3),
            Err(ConfigError::InvalidLifespan { .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_species() {
        let err = human_age_with_lifespan(Species::Cat, -2.0, 1).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("cat"), "{msg}");
        assert!(msg.contains("-2"), "{msg}");
    }
}
