use crate::consts::{GREGORIAN_EPOCH, ISLAMIC_EPOCH, WEEKDAY_NAMES};
use crate::gregorian::is_gregorian_leap;
use crate::prelude::*;

/// A continuous Julian Day Number.
///
/// A value of `N.5` marks the instant of local midnight opening the
/// following calendar day, so every civil date maps to an `x.5` value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into)]
#[display(fmt = "{}", "_0")]
pub struct JulianDay(f64);

impl JulianDay {
    /// Wraps a raw Julian Day Number
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw Julian Day Number as f64
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the weekday index of the day this JDN falls in, with
    /// 0 = Sunday through 6 = Saturday.
    pub fn weekday(self) -> u8 {
        // 1.5 shifts the epoch so Sunday lands on 0.
        let index = ((self.0 + 1.5).floor() as i64).rem_euclid(7);
        index as u8
    }

    /// Returns the English name of the weekday this JDN falls in
    pub fn weekday_name(self) -> &'static str {
        WEEKDAY_NAMES[usize::from(self.weekday())]
    }
}

/// Tabular Hijri date to Julian Day Number.
///
/// Total over its numeric domain: out-of-range components produce a
/// nonsensical JDN rather than an error. The typed constructors validate
/// before calling in here.
pub(crate) fn hijri_to_jd(year: i64, month: i64, day: i64) -> f64 {
    day as f64
        + (29.5 * (month - 1) as f64).ceil()
        + ((year - 1) * 354) as f64
        + (3 + 11 * year).div_euclid(30) as f64
        + ISLAMIC_EPOCH
        - 1.0
}

/// Julian Day Number to tabular Hijri `(year, month, day)`.
///
/// Recovers exactly the date fed to `hijri_to_jd` for any valid tabular
/// date. The clamp to month 12 absorbs ceiling rounding on the last days
/// of a leap year and is deliberate policy, not a bug.
pub(crate) fn jd_to_hijri(jd: f64) -> (i64, i64, i64) {
    let jd = jd.floor() + 0.5;
    let year = ((30.0 * (jd - ISLAMIC_EPOCH) + 10646.0) / 10631.0).floor() as i64;
    let month = (((jd - (29.0 + hijri_to_jd(year, 1, 1))) / 29.5).ceil() as i64 + 1).min(12);
    let day = (jd - hijri_to_jd(year, month, 1)) as i64 + 1;
    (year, month, day)
}

/// Proleptic Gregorian date to Julian Day Number. Total, like `hijri_to_jd`.
pub(crate) fn gregorian_to_jd(year: i64, month: i64, day: i64) -> f64 {
    let leap_adjust = if month <= 2 {
        0
    } else if is_gregorian_leap(year) {
        -1
    } else {
        -2
    };
    GREGORIAN_EPOCH - 1.0
        + (365 * (year - 1)) as f64
        + (year - 1).div_euclid(4) as f64
        - (year - 1).div_euclid(100) as f64
        + (year - 1).div_euclid(400) as f64
        + ((367 * month - 362).div_euclid(12) + leap_adjust + day) as f64
}

/// Julian Day Number to proleptic Gregorian `(year, month, day)`.
///
/// Exact inverse of `gregorian_to_jd` for every valid Gregorian date:
/// decomposes the day count into 400-year, century, 4-year and single-year
/// buckets, then locates the month with the mirrored leap adjustment.
pub(crate) fn jd_to_gregorian(jd: f64) -> (i64, i64, i64) {
    let wjd = (jd - 0.5).floor() + 0.5;
    let depoch = wjd - GREGORIAN_EPOCH;

    let quadricent = (depoch / 146_097.0).floor() as i64;
    let dqc = depoch.rem_euclid(146_097.0);
    let cent = (dqc / 36_524.0).floor() as i64;
    let dcent = dqc.rem_euclid(36_524.0);
    let quad = (dcent / 1_461.0).floor() as i64;
    let dquad = dcent.rem_euclid(1_461.0);
    let yindex = (dquad / 365.0).floor() as i64;

    let mut year = quadricent * 400 + cent * 100 + quad * 4 + yindex;
    // The last day of a century or of a 4-year quad lands on index 4 and
    // already belongs to the counted year.
    if !(cent == 4 || yindex == 4) {
        year += 1;
    }

    let yearday = wjd - gregorian_to_jd(year, 1, 1);
    let leap_adjust = if wjd < gregorian_to_jd(year, 3, 1) {
        0.0
    } else if is_gregorian_leap(year) {
        1.0
    } else {
        2.0
    };
    let month = (((yearday + leap_adjust) * 12.0 + 373.0) / 367.0).floor() as i64;
    let day = (wjd - gregorian_to_jd(year, month, 1)) as i64 + 1;
    (year, month, day)
}
