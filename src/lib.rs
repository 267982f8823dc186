mod consts;
mod gregorian;
mod julian;
mod month;
mod prelude;
mod types;

pub use consts::*;
pub use gregorian::{GregorianDate, gregorian_days_in_month, is_gregorian_leap};
pub use julian::JulianDay;
pub use month::{MonthGrid, WeekStart};
pub use types::{Day, Month, Year, days_in_month, days_in_year, days_so_far, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A civil (tabular) Hijri calendar date.
///
/// The tabular calendar is a fixed 30-year-cycle arithmetic approximation
/// of the lunar calendar; it can differ from observation-based Hijri dates
/// by a day in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct HijriDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for date validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside the supported range.
    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(i64),

    /// Month outside the calendar range.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Day outside the calendar bounds.
    #[error("Invalid day: {0}")]
    InvalidDay(u8),

    /// Malformed date string.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,
}

impl HijriDate {
    /// Creates a new date, validating year, then month, then day.
    ///
    /// The day bound is the loose calendar-wide cap of 30: day 30 of a
    /// 29-day month is accepted here. Callers wanting the strict per-month
    /// bound must compare against [`days_in_month`] themselves.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` outside `1..=MAX_YEAR`,
    /// `DateError::InvalidMonth` outside `1..=12`, `DateError::InvalidDay`
    /// outside `1..=30`.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day)?,
        })
    }

    /// Assembles a date from already-validated components
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the year component (as u16 for convenience)
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (as u8 for convenience)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day component (as u8 for convenience)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the English name of the month
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// Converts to the Julian Day Number of this date's midnight
    pub fn to_julian(&self) -> JulianDay {
        JulianDay::new(julian::hijri_to_jd(
            i64::from(self.year.get()),
            i64::from(self.month.get()),
            i64::from(self.day.get()),
        ))
    }

    /// Recovers the tabular Hijri date containing the given JDN.
    ///
    /// Exact inverse of [`HijriDate::to_julian`] for every strictly valid
    /// tabular date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for JDNs outside years `1..=MAX_YEAR`.
    pub fn from_julian(jd: JulianDay) -> Result<Self, DateError> {
        let (year, month, day) = julian::jd_to_hijri(jd.value());
        let year = u16::try_from(year).map_err(|_| DateError::InvalidYear(year))?;
        // With the year in range, month and day are within u8 by construction.
        Self::new(year, month as u8, day as u8)
    }

    /// Converts to the Gregorian date covering the same civil day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when the result falls outside
    /// Gregorian years `1..=MAX_YEAR` (late Hijri years map past 9999 CE).
    pub fn to_gregorian(&self) -> Result<GregorianDate, DateError> {
        GregorianDate::from_julian(self.to_julian())
    }

    /// Converts a Gregorian date to the tabular Hijri date covering the
    /// same civil day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for dates before the Hijri epoch
    /// (16 July 622 Julian).
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, DateError> {
        Self::from_julian(date.to_julian())
    }

    /// Returns the weekday index, 0 = Sunday through 6 = Saturday
    pub fn weekday(&self) -> u8 {
        self.to_julian().weekday()
    }

    /// Returns the English weekday name
    pub fn weekday_name(&self) -> &'static str {
        self.to_julian().weekday_name()
    }

    /// The following calendar day.
    ///
    /// The day rolls into the next month only when it exceeds the month's
    /// true length, so day 29 of a 30-day month stays put, and a loosely
    /// validated day 30 of a 29-day month rolls. Returns `None` past
    /// `MAX_YEAR`.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = (self.year.get(), self.month.get(), self.day.get());
        if day < days_in_month(year, month) {
            let day = Day::new(day + 1).ok()?;
            Some(Self { day, ..*self })
        } else if month < MAX_MONTH {
            let month = Month::new(month + 1).ok()?;
            let day = Day::new(MIN_DAY).ok()?;
            Some(Self { month, day, ..*self })
        } else if year < MAX_YEAR {
            Self::new(year + 1, MUHARRAM, MIN_DAY).ok()
        } else {
            None
        }
    }

    /// Advances by `days` single-day steps; the rollover policy applies at
    /// every step. Returns `None` if any step passes `MAX_YEAR`.
    pub fn add_days(&self, days: u32) -> Option<Self> {
        let mut date = *self;
        for _ in 0..days {
            date = date.succ()?;
        }
        Some(date)
    }
}

impl FromStr for HijriDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

        Self::new(year, month, day)
    }
}

impl serde::Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
