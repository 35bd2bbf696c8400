//! Convert Gregorian dates into the Faerûn calendar of the Forgotten Realms.

mod clock;
mod consts;
mod festival;
mod prelude;
pub mod report;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use festival::{
    FESTIVALS, Festival, TENDAY_FESTIVALS, festival_on, festivals_before, festivals_reached,
};
pub use report::{ConfigError, WeekCorrespondence, WeekReport};
pub use types::{CalendarDate, DrYear, is_leap_year, month_name, season_of_month};

use crate::prelude::*;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Plain ISO calendar date, tried first when parsing
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamps without an offset; only the date part is kept
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Other human-written date layouts
const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%a %b %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
];

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date {input:?}: {reason}")]
    InvalidDate {
        input: String,
        reason: chrono::ParseError,
    },
    #[display(fmt = "Invalid year: {_0} (outside the supported range)")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MONTHS_PER_YEAR)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Construction options for [`FaerunDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterOptions {
    /// Dale Reckoning year shown in full renderings
    pub custom_year: Option<i32>,
}

impl ConverterOptions {
    pub const fn with_custom_year(mut self, year: i32) -> Self {
        self.custom_year = Some(year);
        self
    }
}

/// A Gregorian date viewed through the Faerûn calendar.
///
/// Every derived value is a pure function of the date and the optional
/// Dale Reckoning label, so a `FaerunDate` can be freely copied and shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaerunDate {
    date: CalendarDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_year: Option<DrYear>,
}

impl FaerunDate {
    /// Converts any `chrono` date
    pub fn new<D: Datelike>(date: &D, options: ConverterOptions) -> Self {
        Self::from_calendar_date(CalendarDate::from_date(date), options)
    }

    /// Converts an already decomposed date
    pub fn from_calendar_date(date: CalendarDate, options: ConverterOptions) -> Self {
        Self {
            date,
            custom_year: options.custom_year.map(DrYear::from),
        }
    }

    /// Converts `date`, or today's local date when absent
    pub fn create(date: Option<NaiveDate>, options: ConverterOptions) -> Self {
        Self::create_with_clock(date, options, &SystemClock)
    }

    /// Converts `date`, or `clock`'s today when absent
    pub fn create_with_clock<C: Clock>(
        date: Option<NaiveDate>,
        options: ConverterOptions,
        clock: &C,
    ) -> Self {
        let date = date.unwrap_or_else(|| clock.today());
        Self::new(&date, options)
    }

    /// Converts today's local date
    pub fn today(options: ConverterOptions) -> Self {
        Self::today_with(&SystemClock, options)
    }

    pub fn today_with<C: Clock>(clock: &C, options: ConverterOptions) -> Self {
        Self::new(&clock.today(), options)
    }

    /// Parses a date string and converts it.
    ///
    /// Accepts ISO dates (`2024-07-02`), RFC 3339 and RFC 2822 timestamps,
    /// ISO timestamps without an offset, `2024/07/02`, `07/02/2024`,
    /// `Tue Jul 02 2024`, `July 2, 2024` and `2 July 2024`. Timestamps keep the
    /// date as written, without converting between offsets.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyInput` for a blank string and
    /// `ParseError::InvalidDate` when no layout matches.
    pub fn parse(input: &str, options: ConverterOptions) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let date = parse_naive_date(trimmed).map_err(|reason| ParseError::InvalidDate {
            input: trimmed.to_owned(),
            reason,
        })?;
        Ok(Self::new(&date, options))
    }

    /// Returns the underlying Gregorian date
    #[inline]
    pub const fn calendar_date(&self) -> CalendarDate {
        self.date
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.date.month()
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the configured Dale Reckoning year, if any
    pub fn custom_year(&self) -> Option<i32> {
        self.custom_year.map(DrYear::get)
    }

    /// Quadrennial leap rule applied to the Gregorian year
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.date.year())
    }

    /// Faerûn name of the month
    pub fn month_name(&self) -> &'static str {
        month_name(self.date.month()).unwrap_or_default()
    }

    /// Name of the festival falling on this date, if any
    pub fn festival(&self) -> Option<&'static str> {
        self.festival_record().map(|festival| festival.name)
    }

    pub fn festival_record(&self) -> Option<&'static Festival> {
        festival_on(&FESTIVALS, &self.date)
    }

    /// Season containing the month, or `UNKNOWN_SEASON`
    pub fn season(&self) -> &'static str {
        season_of_month(self.date.month()).unwrap_or(UNKNOWN_SEASON)
    }

    /// Day of the year with every month treated as thirty days
    pub const fn simple_day_of_year(&self) -> u16 {
        (self.date.month() as u16 - 1) * DAYS_PER_MONTH + self.date.day() as u16
    }

    /// Cyclic weekday name. Festivals do not interrupt the cycle.
    pub fn weekday(&self) -> &'static str {
        WEEKDAYS[usize::from(self.simple_day_of_year() % WEEKDAY_CYCLE)]
    }

    /// Day of the year counting each canonical festival strictly before this date
    pub fn day_of_year(&self) -> u16 {
        self.simple_day_of_year() + festivals_before(&FESTIVALS, &self.date)
    }

    /// 1-based seven-day week index
    pub fn week_of_year(&self) -> u16 {
        (self.day_of_year() - 1) / DAYS_PER_WEEK + 1
    }

    /// Day of the year counting each tenday-table festival on or before this date
    pub fn tenday_day_of_year(&self) -> u16 {
        self.simple_day_of_year() + festivals_reached(&TENDAY_FESTIVALS, &self.date)
    }

    /// 1-based tenday index
    pub fn tenday_of_year(&self) -> u16 {
        (self.tenday_day_of_year() - 1) / DAYS_PER_TENDAY + 1
    }

    /// `[Festival] <name>` on festivals, `<dd> <Month>` otherwise
    pub fn format_short(&self) -> String {
        match self.festival() {
            Some(festival) => format!("[Festival] {festival}"),
            None => format!("{:02} {}", self.day(), self.month_name()),
        }
    }

    /// Full rendering, e.g. `Zor, 15 Kythorn 1492 DR – Season: Summer – Week 24`
    pub fn format(&self) -> String {
        let token = self.festival().unwrap_or_else(|| self.weekday());
        format!(
            "{token}, {}{PART_SEPARATOR}Season: {}{PART_SEPARATOR}Week {:02}",
            self.day_month_year(),
            self.season(),
            self.week_of_year()
        )
    }

    /// Rendering without the week number. Festivals replace the whole date part.
    pub fn format_compact(&self) -> String {
        match self.festival() {
            Some(festival) => format!("{festival}{PART_SEPARATOR}Season: {}", self.season()),
            None => format!(
                "{}, {}{PART_SEPARATOR}Season: {}",
                self.weekday(),
                self.day_month_year(),
                self.season()
            ),
        }
    }

    /// Snapshot of every derived value
    pub fn summary(&self) -> FaerunSummary {
        FaerunSummary {
            date: self.date,
            month_name: self.month_name(),
            festival: self.festival(),
            season: self.season(),
            weekday: self.weekday(),
            day_of_year: self.day_of_year(),
            week_of_year: self.week_of_year(),
            tenday_of_year: self.tenday_of_year(),
            custom_year: self.custom_year(),
            short: self.format_short(),
            full: self.format(),
        }
    }

    fn day_month_year(&self) -> String {
        let year = self
            .custom_year
            .map(|year| format!(" {year}"))
            .unwrap_or_default();
        format!("{:02} {}{year}", self.day(), self.month_name())
    }
}

impl fmt::Display for FaerunDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for FaerunDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, ConverterOptions::default())
    }
}

impl From<NaiveDate> for FaerunDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(&date, ConverterOptions::default())
    }
}

/// Every value derived from a [`FaerunDate`], ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaerunSummary {
    pub date: CalendarDate,
    pub month_name: &'static str,
    pub festival: Option<&'static str>,
    pub season: &'static str,
    pub weekday: &'static str,
    pub day_of_year: u16,
    pub week_of_year: u16,
    pub tenday_of_year: u16,
    pub custom_year: Option<i32>,
    pub short: String,
    pub full: String,
}

fn parse_naive_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    let iso_error = match NaiveDate::parse_from_str(input, ISO_DATE_FORMAT) {
        Ok(date) => return Ok(date),
        Err(err) => err,
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        trace!(input, "parsed as RFC 3339");
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        trace!(input, "parsed as RFC 2822");
        return Ok(dt.date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            trace!(input, format, "parsed as naive datetime");
            return Ok(dt.date());
        }
    }
    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            trace!(input, format, "parsed as date");
            return Ok(date);
        }
    }

    Err(iso_error)
}
