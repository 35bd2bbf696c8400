//! Intercalary festival days.
//!
//! Two tables exist. [`FESTIVALS`] is the canonical calendar used for festival
//! lookup and `week_of_year`. [`TENDAY_FESTIVALS`] is the table the week
//! comparison report was built against: Midwinter closes Hammer instead of
//! opening Alturiak, Greengrass and Midsummer close their months, and there is
//! no Shieldmeet. `tenday_of_year` counts against it.

use serde::Serialize;

use crate::types::{CalendarDate, is_leap_year};

/// A festival pinned to a Gregorian `(month, day)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Festival {
    pub name: &'static str,
    pub day: u8,
    pub month: u8,
    /// Only observed when `is_leap_year` holds
    pub leap_year_only: bool,
}

impl Festival {
    const fn new(name: &'static str, month: u8, day: u8) -> Self {
        Self {
            name,
            day,
            month,
            leap_year_only: false,
        }
    }

    const fn leap(name: &'static str, month: u8, day: u8) -> Self {
        Self {
            name,
            day,
            month,
            leap_year_only: true,
        }
    }

    /// Whether the festival takes place at all in `year`
    #[inline]
    pub const fn observed_in(&self, year: i32) -> bool {
        !self.leap_year_only || is_leap_year(year)
    }

    /// The festival's date as a `(month, day)` key
    #[inline]
    pub const fn month_day(&self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// True when `date` is this festival's day in a year that observes it
    pub fn falls_on(&self, date: &CalendarDate) -> bool {
        self.month_day() == date.month_day() && self.observed_in(date.year())
    }

    /// True when the festival is observed and lies strictly before `date`
    pub fn precedes(&self, date: &CalendarDate) -> bool {
        self.month_day() < date.month_day() && self.observed_in(date.year())
    }

    /// True when the festival is observed and lies on or before `date`
    pub fn reached_by(&self, date: &CalendarDate) -> bool {
        self.month_day() <= date.month_day() && self.observed_in(date.year())
    }
}

/// Canonical festival calendar
pub static FESTIVALS: [Festival; 6] = [
    Festival::new("Midwinter", 2, 1),
    Festival::new("Greengrass", 4, 1),
    Festival::new("Midsummer", 7, 1),
    Festival::new("Highharvestide", 9, 27),
    Festival::new("Feast of the Moon", 11, 1),
    Festival::leap("Shieldmeet", 7, 2),
];

/// Festival calendar used by the tenday count
pub static TENDAY_FESTIVALS: [Festival; 5] = [
    Festival::new("Midwinter", 1, 31),
    Festival::new("Greengrass", 4, 30),
    Festival::new("Midsummer", 7, 30),
    Festival::new("Highharvestide", 9, 27),
    Festival::new("Feast of the Moon", 11, 1),
];

/// First festival in `table` falling on `date`
pub fn festival_on<'a>(table: &'a [Festival], date: &CalendarDate) -> Option<&'a Festival> {
    table.iter().find(|festival| festival.falls_on(date))
}

/// Number of festivals in `table` strictly before `date`
pub fn festivals_before(table: &[Festival], date: &CalendarDate) -> u16 {
    count(table, |festival| festival.precedes(date))
}

/// Number of festivals in `table` on or before `date`
pub fn festivals_reached(table: &[Festival], date: &CalendarDate) -> u16 {
    count(table, |festival| festival.reached_by(date))
}

fn count(table: &[Festival], pred: impl Fn(&Festival) -> bool) -> u16 {
    table
        .iter()
        .filter(|festival| pred(festival))
        .fold(0, |acc, _| acc + 1)
}
