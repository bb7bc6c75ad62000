//! Calendar periods and the per-instant facts needed to measure them
//!
//! A progression is reported for six nested periods. Each one is measured in
//! whole seconds; the only period lengths that vary are the year and the
//! month, which is what [`PeriodContext`] captures.

use chrono::{Datelike, NaiveDate};
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const SECONDS_IN_MINUTE: u32 = 60;
pub const SECONDS_IN_HOUR: u32 = 60 * SECONDS_IN_MINUTE;
pub const SECONDS_IN_DAY: u32 = 24 * SECONDS_IN_HOUR;
pub const HOURS_IN_WEEK: u32 = 24 * 7;

/// Gregorian month lengths for a common year, January first
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A period whose elapsed fraction is reported
///
/// The declaration order is the order in which periods appear in every
/// result, so `Ord` doubles as the output ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[display("year")]
    Year,
    #[display("month")]
    Month,
    #[display("week")]
    Week,
    #[display("day")]
    Day,
    #[display("hour")]
    Hour,
    #[display("minute")]
    Minute,
}

impl Period {
    /// All periods, outermost first
    pub const ALL: [Period; 6] = [
        Period::Year,
        Period::Month,
        Period::Week,
        Period::Day,
        Period::Hour,
        Period::Minute,
    ];
}

/// Returns true for Gregorian leap years
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Facts about the calendar around an instant that the formulas depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodContext {
    leap_year: bool,
    days_in_year: u32,
    days_in_month: u32,
}

impl PeriodContext {
    /// Derive the context for the calendar date an instant falls on
    pub fn for_date(date: NaiveDate) -> Self {
        let leap_year = is_leap_year(date.year());
        let days_in_year = if leap_year { 366 } else { 365 };
        let month_index = date.month0() as usize;
        let days_in_month = if month_index == 1 && leap_year {
            29
        } else {
            DAYS_IN_MONTH[month_index]
        };

        Self {
            leap_year,
            days_in_year,
            days_in_month,
        }
    }

    pub fn is_leap_year(&self) -> bool {
        self.leap_year
    }

    pub fn days_in_year(&self) -> u32 {
        self.days_in_year
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Length of a period in seconds
    pub fn total_seconds(&self, period: Period) -> u32 {
        match period {
            Period::Year => self.days_in_year * SECONDS_IN_DAY,
            Period::Month => self.days_in_month * SECONDS_IN_DAY,
            Period::Week => HOURS_IN_WEEK * SECONDS_IN_HOUR,
            Period::Day => SECONDS_IN_DAY,
            Period::Hour => SECONDS_IN_HOUR,
            Period::Minute => SECONDS_IN_MINUTE,
        }
    }
}
