//! Calendar age decomposition and formatting.
//!
//! Chrono does not provide a built-in year/month/day diff, so the
//! calendar-aware borrowing rules are implemented manually: subtract the
//! year/month/day fields and borrow from the next unit up whenever a lower
//! unit goes negative. This handles month underflow, day underflow against
//! varying month lengths, and leap years.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_MONTH, MONTHS_PER_YEAR,
};

/// Elapsed time between two dates broken into whole calendar units.
///
/// A month is not complete until the day-of-month is reached, and a year is
/// not complete until the birthday, matching standard calendar subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AgeParts {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// How much of the calendar decomposition a formatted age string includes.
///
/// Only the unit-selection logic lives here; rendering the words themselves
/// is a presentation concern for the caller to localize if needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    /// Years only; months shown only before the first birthday
    YearsOnly,
    /// Years and months, dropping whichever is zero
    #[default]
    YearsAndMonths,
    /// Years, months and days with grammatical zero-suppression
    Full,
}

impl AgeParts {
    /// Calendar-field subtraction from `birth` to `reference`.
    ///
    /// A birth date in the future clamps to zero age rather than failing.
    pub fn between(birth: NaiveDate, reference: NaiveDate) -> Self {
        if birth > reference {
            return Self::default();
        }

        let mut years = reference.year() - birth.year();
        let mut months = i64::from(reference.month()) - i64::from(birth.month());
        let mut days = i64::from(reference.day()) - i64::from(birth.day());

        // Borrow days from the month preceding the reference date
        if days < 0 {
            months -= 1;
            let (prev_year, prev_month) = if reference.month() == JANUARY {
                (reference.year() - 1, DECEMBER)
            } else {
                (reference.year(), reference.month() - 1)
            };
            days += i64::from(days_in_month(prev_year, prev_month));
        }

        // Borrow months from years
        if months < 0 {
            years -= 1;
            months += i64::from(MONTHS_PER_YEAR);
        }

        // birth <= reference guarantees the borrows leave everything >= 0
        Self {
            years: u32::try_from(years).unwrap_or(0),
            months: u32::try_from(months).unwrap_or(0),
            days: u32::try_from(days).unwrap_or(0),
        }
    }

    /// True when no whole day has elapsed
    pub const fn is_zero(self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

/// Default rendering (`YearsAndMonths`)
impl fmt::Display for AgeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_age(*self, DetailLevel::YearsAndMonths))
    }
}

/// Renders an age with the unit-selection rules for the given detail level.
///
/// - `YearsOnly`: months before the first birthday, then years alone.
/// - `YearsAndMonths`: both units, dropping whichever is zero.
/// - `Full`: years if nonzero; months if nonzero or years shown (so
///   "3 years 0 months" stays grammatical); days if nonzero or everything
///   else is zero. The all-zero age renders "0 days", never an empty string.
pub fn format_age(parts: AgeParts, level: DetailLevel) -> String {
    let AgeParts {
        years,
        months,
        days,
    } = parts;
    match level {
        DetailLevel::YearsOnly => {
            if years == 0 {
                unit(months, "month")
            } else {
                unit(years, "year")
            }
        },
        DetailLevel::YearsAndMonths => {
            if years == 0 {
                unit(months, "month")
            } else if months == 0 {
                unit(years, "year")
            } else {
                format!("{} {}", unit(years, "year"), unit(months, "month"))
            }
        },
        DetailLevel::Full => {
            let mut pieces = Vec::with_capacity(3);
            if years > 0 {
                pieces.push(unit(years, "year"));
            }
            if months > 0 || years > 0 {
                pieces.push(unit(months, "month"));
            }
            if days > 0 || (years == 0 && months == 0) {
                pieces.push(unit(days, "day"));
            }
            pieces.join(" ")
        },
    }
}

fn unit(n: u32, singular: &str) -> String {
    if n == 1 {
        format!("1 {singular}")
    } else {
        format!("{n} {singular}s")
    }
}

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_between_simple() {
        let parts = AgeParts::between(date(2020, 3, 10), date(2025, 3, 10));
        assert_eq!(parts, AgeParts {
            years: 5,
            months: 0,
            days: 0
        });
    }

    #[test]
    fn test_between_day_borrow() {
        // day-of-month 15 -> 10 hasn't completed the month, borrow from
        // February 2025 (28 days)
        let parts = AgeParts::between(date(2022, 1, 15), date(2025, 3, 10));
        assert_eq!(parts, AgeParts {
            years: 3,
            months: 1,
            days: 23
        });
    }

    #[test]
    fn test_between_month_borrow() {
        let parts = AgeParts::between(date(2024, 11, 5), date(2025, 2, 5));
        assert_eq!(parts, AgeParts {
            years: 0,
            months: 3,
            days: 0
        });
    }

    #[test]
    fn test_between_borrow_across_january() {
        // previous month relative to a January reference is December
        let parts = AgeParts::between(date(2024, 12, 20), date(2025, 1, 10));
        assert_eq!(parts, AgeParts {
            years: 0,
            months: 0,
            days: 21
        });
    }

    #[test]
    fn test_between_leap_year_borrow() {
        // borrow from February 2024, a leap year: 29 days
        let parts = AgeParts::between(date(2024, 2, 20), date(2024, 3, 10));
        assert_eq!(parts, AgeParts {
            years: 0,
            months: 0,
            days: 19
        });

        // same dates a year later borrow from a 28-day February
        let parts = AgeParts::between(date(2025, 2, 20), date(2025, 3, 10));
        assert_eq!(parts, AgeParts {
            years: 0,
            months: 0,
            days: 18
        });
    }

    #[test]
    fn test_between_same_date_is_zero() {
        let parts = AgeParts::between(date(2025, 6, 1), date(2025, 6, 1));
        assert!(parts.is_zero());
    }

    #[test]
    fn test_between_future_birth_clamps_to_zero() {
        let parts = AgeParts::between(date(2026, 1, 1), date(2025, 6, 1));
        assert!(parts.is_zero());
    }

    #[test]
    fn test_between_day_before_birthday() {
        // one day short of the third birthday
        let parts = AgeParts::between(date(2022, 6, 15), date(2025, 6, 14));
        assert_eq!(parts, AgeParts {
            years: 2,
            months: 11,
            days: 30
        });
    }

    #[test]
    fn test_format_years_only() {
        let cases = [
            (
                AgeParts {
                    years: 0,
                    months: 7,
                    days: 3,
                },
                "7 months",
            ),
            (
                AgeParts {
                    years: 3,
                    months: 5,
                    days: 0,
                },
                "3 years",
            ),
            (
                AgeParts {
                    years: 1,
                    months: 0,
                    days: 0,
                },
                "1 year",
            ),
            (
                AgeParts {
                    years: 0,
                    months: 0,
                    days: 0,
                },
                "0 months",
            ),
        ];
        for (parts, expected) in cases {
            assert_eq!(format_age(parts, DetailLevel::YearsOnly), expected);
        }
    }

    #[test]
    fn test_format_years_and_months() {
        let cases = [
            (
                AgeParts {
                    years: 0,
                    months: 7,
                    days: 3,
                },
                "7 months",
            ),
            (
                AgeParts {
                    years: 3,
                    months: 0,
                    days: 12,
                },
                "3 years",
            ),
            (
                AgeParts {
                    years: 3,
                    months: 5,
                    days: 0,
                },
                "3 years 5 months",
            ),
            (
                AgeParts {
                    years: 1,
                    months: 1,
                    days: 0,
                },
                "1 year 1 month",
            ),
        ];
        for (parts, expected) in cases {
            assert_eq!(format_age(parts, DetailLevel::YearsAndMonths), expected);
        }
    }

    #[test]
    fn test_format_full() {
        let cases = [
            (
                AgeParts {
                    years: 3,
                    months: 0,
                    days: 0,
                },
                "3 years 0 months",
            ),
            (
                AgeParts {
                    years: 3,
                    months: 1,
                    days: 23,
                },
                "3 years 1 month 23 days",
            ),
            (
                AgeParts {
                    years: 0,
                    months: 2,
                    days: 0,
                },
                "2 months",
            ),
            (
                AgeParts {
                    years: 0,
                    months: 0,
                    days: 5,
                },
                "5 days",
            ),
        ];
        for (parts, expected) in cases {
            assert_eq!(format_age(parts, DetailLevel::Full), expected);
        }
    }

    #[test]
    fn test_format_full_all_zero_is_not_empty() {
        let rendered = format_age(AgeParts::default(), DetailLevel::Full);
        assert_eq!(rendered, "0 days");
    }

    #[test]
    fn test_display_uses_default_level() {
        let parts = AgeParts {
            years: 2,
            months: 3,
            days: 9,
        };
        assert_eq!(parts.to_string(), "2 years 3 months");
        assert_eq!(DetailLevel::default(), DetailLevel::YearsAndMonths);
    }

    #[test]
    fn test_is_leap_year_cases() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 1), 31);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
