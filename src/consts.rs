/// Julian Day Number of 1 Muharram 1 AH (civil epoch, Friday 16 July 622
/// Julian). The `.5` marks local midnight.
pub const ISLAMIC_EPOCH: f64 = 1_948_439.5;

/// Julian Day Number of 1 January 1 CE in the proleptic Gregorian calendar.
pub const GREGORIAN_EPOCH: f64 = 1_721_425.5;

/// Maximum valid year (inclusive), for both calendars
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Dhu al-Hijjah / December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Loose day cap: the longest Hijri month has 30 days
pub const MAX_DAY: u8 = 30;

/// Month number for Muharram
pub const MUHARRAM: u8 = 1;
/// Month number for Dhu al-Hijjah
pub const DHU_AL_HIJJAH: u8 = 12;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in Dhu al-Hijjah for Hijri leap years
pub const DHU_AL_HIJJAH_DAYS_LEAP: u8 = 30;

/// Days in February for Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Hijri month (index 0 is unused, months are 1-indexed).
/// Odd months have 30 days, even months 29; Dhu al-Hijjah shows 29 days
/// (common-year default, adjusted by the `is_leap_year` check).
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    30, // Muharram
    29, // Safar
    30, // Rabi' al-Awwal
    29, // Rabi' al-Thani
    30, // Jumada al-Awwal
    29, // Jumada al-Thani
    30, // Rajab
    29, // Sha'ban
    30, // Ramadan
    29, // Shawwal
    30, // Dhu al-Qi'dah
    29, // Dhu al-Hijjah (common, adjusted by is_leap_year check)
];

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed).
/// February shows 28 days (non-leap default, adjusted by `is_gregorian_leap`).
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] =
    [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days in a common Hijri year
pub const DAYS_IN_COMMON_YEAR: u16 = 354;
/// Days in a leap Hijri year
pub const DAYS_IN_LEAP_YEAR: u16 = 355;

/// Length of the tabular leap cycle in years
pub const LEAP_CYCLE_YEARS: u16 = 30;

/// Year residues mod 30 that receive the leap day (11 per cycle)
pub const LEAP_YEAR_RESIDUES: [u16; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Hijri month names (index 0 = Muharram = month 1)
pub const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Weekday names, anchored at index 0 = Sunday (the JDN weekday anchor)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Three-letter weekday labels, same anchor as `WEEKDAY_NAMES`
pub const WEEKDAY_ABBREVS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Date component separator (ISO 8601 style)
pub const DATE_SEPARATOR: char = '-';
