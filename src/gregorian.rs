use std::str::FromStr;

use crate::consts::{
    DATE_SEPARATOR, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_DAYS_IN_MONTH, MAX_MONTH, MAX_YEAR,
};
use crate::julian::{gregorian_to_jd, jd_to_gregorian};
use crate::prelude::*;
use crate::{DateError, JulianDay};

/// Standard proleptic Gregorian leap rule.
pub const fn is_gregorian_leap(year: i64) -> bool {
    year % 4 == 0 && !(year % 100 == 0 && year % 400 != 0)
}

/// Length of a Gregorian month, with the February leap adjustment.
pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap(year as i64) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// A proleptic Gregorian calendar date.
///
/// Unlike [`HijriDate`](crate::HijriDate), construction applies the strict
/// per-month day bound.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display,
)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month", "day")]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new date, validating year, then month, then day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` outside `1..=MAX_YEAR`,
    /// `DateError::InvalidMonth` outside `1..=12`, `DateError::InvalidDay`
    /// outside the month's actual length.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(1..=i32::from(MAX_YEAR)).contains(&year) {
            return Err(DateError::InvalidYear(i64::from(year)));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day == 0 || day > gregorian_days_in_month(year, month) {
            return Err(DateError::InvalidDay(day));
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year component
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day component
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Converts to the Julian Day Number of this date's midnight
    pub fn to_julian(&self) -> JulianDay {
        JulianDay::new(gregorian_to_jd(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        ))
    }

    /// Recovers the Gregorian date containing the given JDN.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for JDNs outside years `1..=MAX_YEAR`.
    pub fn from_julian(jd: JulianDay) -> Result<Self, DateError> {
        let (year, month, day) = jd_to_gregorian(jd.value());
        let year = i32::try_from(year)
            .ok()
            .filter(|y| (1..=i32::from(MAX_YEAR)).contains(y))
            .ok_or(DateError::InvalidYear(year))?;
        // With the year in range, month and day are within u8 by construction.
        Self::new(year, month as u8, day as u8)
    }

    /// Returns the weekday index, 0 = Sunday through 6 = Saturday
    pub fn weekday(&self) -> u8 {
        self.to_julian().weekday()
    }

    /// Returns the English weekday name
    pub fn weekday_name(&self) -> &'static str {
        self.to_julian().weekday_name()
    }
}

impl FromStr for GregorianDate {
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
            .parse::<i32>()
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

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        assert!(GregorianDate::new(2011, 6, 29).is_ok());
        assert!(GregorianDate::new(1, 1, 1).is_ok());
        assert!(GregorianDate::new(9999, 12, 31).is_ok());
    }

    #[test]
    fn test_new_invalid_year() {
        assert!(matches!(
            GregorianDate::new(0, 1, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            GregorianDate::new(-622, 1, 1),
            Err(DateError::InvalidYear(-622))
        ));
        assert!(matches!(
            GregorianDate::new(10000, 1, 1),
            Err(DateError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_new_invalid_month() {
        assert!(matches!(
            GregorianDate::new(2011, 0, 1),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            GregorianDate::new(2011, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_new_strict_day_bound() {
        assert!(matches!(
            GregorianDate::new(2011, 6, 31),
            Err(DateError::InvalidDay(31))
        ));
        assert!(matches!(
            GregorianDate::new(2011, 2, 29),
            Err(DateError::InvalidDay(29))
        ));
        // leap February
        assert!(GregorianDate::new(2012, 2, 29).is_ok());
    }

    #[test]
    fn test_is_gregorian_leap_cases() {
        struct TestCase {
            year: i64,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2012,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2011,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 1600,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_gregorian_leap(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(gregorian_days_in_month(2011, 1), 31);
        assert_eq!(gregorian_days_in_month(2011, 4), 30);
        assert_eq!(gregorian_days_in_month(2011, 2), 28);
        assert_eq!(gregorian_days_in_month(2012, 2), 29);
        assert_eq!(gregorian_days_in_month(1900, 2), 28);
        assert_eq!(gregorian_days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_julian_roundtrip_samples() {
        let samples = [
            (1, 1, 1),
            (4, 2, 29),
            (100, 2, 28),
            (400, 2, 29),
            (622, 7, 19),
            (1582, 10, 15),
            (1970, 1, 1),
            (2000, 2, 29),
            (2011, 6, 29),
            (9999, 12, 31),
        ];
        for (y, m, d) in samples {
            let date = GregorianDate::new(y, m, d).unwrap();
            let back = GregorianDate::from_julian(date.to_julian()).unwrap();
            assert_eq!(date, back, "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_julian_roundtrip_year_sweep() {
        for year in (1..=9999).step_by(7) {
            for month in 1..=12 {
                let last = gregorian_days_in_month(year, month);
                for day in [1, 15, last] {
                    let date = GregorianDate::new(year, month, day).unwrap();
                    let back = GregorianDate::from_julian(date.to_julian()).unwrap();
                    assert_eq!(date, back, "{year:04}-{month:02}-{day:02}");
                }
            }
        }
    }

    #[test]
    fn test_from_julian_before_epoch() {
        let result = GregorianDate::from_julian(JulianDay::new(1_721_000.5));
        assert!(matches!(result, Err(DateError::InvalidYear(_))));
    }

    #[test]
    fn test_weekday() {
        let date = GregorianDate::new(2000, 1, 1).unwrap();
        assert_eq!(date.weekday(), 6);
        assert_eq!(date.weekday_name(), "Saturday");

        let date = GregorianDate::new(2011, 3, 22).unwrap();
        assert_eq!(date.weekday(), 2);
        assert_eq!(date.weekday_name(), "Tuesday");
    }

    #[test]
    fn test_display() {
        let date = GregorianDate::new(622, 7, 19).unwrap();
        assert_eq!(date.to_string(), "0622-07-19");
    }

    #[test]
    fn test_from_str() {
        let date = "2011-06-29".parse::<GregorianDate>().unwrap();
        assert_eq!(date, GregorianDate::new(2011, 6, 29).unwrap());

        let date = " 2011-06-29 ".parse::<GregorianDate>().unwrap();
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn test_from_str_errors() {
        assert!(matches!(
            "".parse::<GregorianDate>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "2011-06".parse::<GregorianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2011-XX-29".parse::<GregorianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2011-13-01".parse::<GregorianDate>(),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            "2011-02-29".parse::<GregorianDate>(),
            Err(DateError::InvalidDay(29))
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let date = GregorianDate::new(2011, 6, 29).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2011-06-29""#);

        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_ordering() {
        let earlier = GregorianDate::new(2011, 3, 22).unwrap();
        let later = GregorianDate::new(2011, 6, 29).unwrap();
        assert!(earlier < later);
    }
}
