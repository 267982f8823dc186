use std::fmt;

use crate::consts::{MIN_DAY, MUHARRAM, WEEKDAY_ABBREVS};
use crate::types::{Month, Year, days_in_month, days_so_far};
use crate::{DateError, HijriDate};

/// Which day heads the rendered week.
///
/// The two conventions the crate supports are presentation-only adapters
/// over the same raw 0 = Sunday weekday offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekStart {
    /// Week columns run Sunday through Saturday
    #[default]
    Sunday,
    /// Week columns run Saturday through Friday
    Saturday,
}

impl WeekStart {
    /// Index of the leading column in the 0 = Sunday weekday table
    const fn anchor(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Saturday => 6,
        }
    }
}

/// Layout of one Hijri month as a 7-column calendar grid.
///
/// Holds only core data (start weekday and month length); the week-start
/// conventions remap it at presentation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    year: Year,
    month: Month,
    first_weekday: u8,
    days: u8,
}

impl MonthGrid {
    /// Lays out `month` of Hijri year `year`.
    ///
    /// The start weekday comes from the Gregorian rendering of 1 Muharram,
    /// advanced by the days covered by the preceding months, wrapping mod 7.
    ///
    /// # Errors
    /// Returns the matching `DateError` kind for an out-of-range year or
    /// month, and `DateError::InvalidYear` for the handful of late years
    /// whose Gregorian anchor falls past year 9999.
    pub fn new(year: u16, month: u8) -> Result<Self, DateError> {
        let year_checked = Year::new(year)?;
        let month_checked = Month::new(month)?;

        let opening = HijriDate::new(year, MUHARRAM, MIN_DAY)?;
        let anchor = opening.to_gregorian()?.to_julian();
        let first_weekday =
            ((u16::from(anchor.weekday()) + days_so_far(year, month - 1)) % 7) as u8;

        Ok(Self {
            year: year_checked,
            month: month_checked,
            first_weekday,
            days: days_in_month(year, month),
        })
    }

    /// Weekday of the 1st of the month, 0 = Sunday through 6 = Saturday
    #[inline]
    pub const fn first_weekday(&self) -> u8 {
        self.first_weekday
    }

    /// Number of days in the month
    #[inline]
    pub const fn days(&self) -> u8 {
        self.days
    }

    /// Returns the English name of the month
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// The grid rows: day numbers in 7 columns, with blanks before day 1
    /// and after the last day.
    pub fn weeks(&self, start: WeekStart) -> Vec<[Option<u8>; 7]> {
        let offset = (self.first_weekday + 7 - start.anchor()) % 7;

        let mut weeks = Vec::with_capacity(6);
        let mut week = [None; 7];
        let mut column = usize::from(offset);
        for day in 1..=self.days {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }
        weeks
    }

    /// Renders the month as plain text: a centered title, the weekday
    /// header in the adapter's order, and right-aligned day cells.
    pub fn render(&self, start: WeekStart) -> String {
        let title = format!("{} {} AH", self.month_name(), self.year);
        let mut out = format!("{title:^27}").trim_end().to_owned();
        out.push('\n');

        let header = (0..7)
            .map(|column| {
                let label = WEEKDAY_ABBREVS[usize::from((column + start.anchor()) % 7)];
                format!("{label:>3}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&header);
        out.push('\n');

        for week in self.weeks(start) {
            let row = week
                .iter()
                .map(|cell| match cell {
                    Some(day) => format!("{day:>3}"),
                    None => "   ".to_owned(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(WeekStart::default()))
    }
}
