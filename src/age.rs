//! age.rs
//!
//! Computes an `AgeReport` from a birth date and a reference date:
//!     "X years, Y months, Z days" plus totals, next birthday and zodiac sign.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from previous month)
//!   • leap years
//!   • varying month lengths
//!
//! Dates carry no time of day, so every subtraction here is between
//! midnight-aligned days and daylight-saving shifts cannot leak in.

use crate::error::AgeError;
use crate::zodiac::ZodiacSign;
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What a Feb 29 birthday becomes in a year without Feb 29.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LeapDayPolicy {
    /// Celebrate on Feb 28.
    #[default]
    Feb28,
    /// Celebrate on Mar 1.
    Mar1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeReport {
    pub birth_date: NaiveDate,
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: u64,
    pub total_hours: u64,
    pub total_minutes: u64,
    pub next_anniversary: NaiveDate,
    pub days_until_anniversary: u32,
    pub zodiac_sign: ZodiacSign,
}

impl AgeReport {
    /// Returns a human age as a string
    pub fn age_string(&self) -> String {
        format!(
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

/// Stateless age calculator. The only knob is the leap-day policy; the
/// reference date is always passed in by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeEngine {
    leap_day: LeapDayPolicy,
}

impl AgeEngine {
    pub fn new(leap_day: LeapDayPolicy) -> Self {
        Self { leap_day }
    }

    pub fn compute(&self, birth: NaiveDate, reference: NaiveDate) -> Result<AgeReport, AgeError> {
        if birth > reference {
            return Err(AgeError::FutureDate { birth, reference });
        }

        let (years, months, days) = calendar_breakdown(birth, reference);

        let total_days = (reference - birth).num_days() as u64;
        let total_hours = total_days * 24;
        let total_minutes = total_hours * 60;

        let mut next_anniversary = self.anniversary_in(birth, reference.year())?;
        if next_anniversary <= reference {
            next_anniversary = self.anniversary_in(birth, reference.year() + 1)?;
        }
        let days_until_anniversary = (next_anniversary - reference).num_days() as u32;

        Ok(AgeReport {
            birth_date: birth,
            years,
            months,
            days,
            total_days,
            total_hours,
            total_minutes,
            next_anniversary,
            days_until_anniversary,
            zodiac_sign: ZodiacSign::for_date(birth),
        })
    }

    /// The birth month/day in `year`, applying the leap-day policy when
    /// the birthday does not exist that year.
    fn anniversary_in(&self, birth: NaiveDate, year: i32) -> Result<NaiveDate, AgeError> {
        let date = NaiveDate::from_ymd_opt(year, birth.month(), birth.day()).or_else(|| {
            match self.leap_day {
                LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
                LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
            }
        });

        date.ok_or_else(|| {
            AgeError::InvalidInput(format!("Year {year} is outside the supported date range"))
        })
    }
}

/// Years, months and days such that adding them to `birth` (months clamped
/// to the end of shorter months) lands exactly on `reference`.
fn calendar_breakdown(birth: NaiveDate, reference: NaiveDate) -> (u32, u32, u32) {
    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Determine the previous month relative to `reference`.
        let (prev_year, prev_month) = if reference.month() == 1 {
            (reference.year() - 1, 12)
        } else {
            (reference.year(), reference.month() - 1)
        };

        // Add days from the previous month (28–31 depending on month & leap year)
        let days_in_prev_month = days_in_month(prev_year, prev_month);
        if birth.day() > days_in_prev_month {
            // Birth day does not exist in the borrowed month, so the month
            // step lands on its last day and the rest is reference.day().
            days = reference.day() as i32;
        } else {
            days += days_in_prev_month as i32;
        }
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years as u32, months as u32, days as u32)
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
