//! Gregorian week to Faerûn tenday correspondence.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, trace};

use crate::{ConverterOptions, DAYS_PER_WEEK, FaerunDate};

/// Weeks listed when no count is given
pub const DEFAULT_WEEKS: i64 = 20;

/// `Mon Jan 01 2024`
pub const HUMAN_DATE_FORMAT: &str = "%a %b %d %Y";

/// Error type for report configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Week count below one.
    #[error("Invalid week count: {0} (must be at least 1)")]
    InvalidWeeks(i64),

    /// January 1st of the target year cannot be represented.
    #[error("Year {0} is outside the supported date range")]
    YearOutOfRange(i32),

    /// The last requested week runs past the supported date range.
    #[error("Week {week} after the start of {year} is outside the supported date range")]
    DateOutOfRange { year: i32, week: i64 },
}

/// One line of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekCorrespondence {
    pub gregorian_week: u32,
    pub tenday: u16,
    pub date: NaiveDate,
}

impl fmt::Display for WeekCorrespondence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Week {:02} → Tenday {:02} ({})",
            self.gregorian_week,
            self.tenday,
            self.date.format(HUMAN_DATE_FORMAT)
        )
    }
}

/// Correspondence rows for consecutive weeks starting on January 1st.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekReport {
    year: i32,
    rows: Vec<WeekCorrespondence>,
}

impl WeekReport {
    /// Builds the report for `weeks` weeks of `year`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidWeeks` if `weeks < 1`,
    /// `ConfigError::YearOutOfRange` if January 1st of `year` is not
    /// representable and `ConfigError::DateOutOfRange` if the last week is not.
    pub fn new(year: i32, weeks: i64) -> Result<Self, ConfigError> {
        if weeks < 1 {
            return Err(ConfigError::InvalidWeeks(weeks));
        }
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(ConfigError::YearOutOfRange(year))?;
        // reject before allocating anything
        week_start(start, weeks).ok_or(ConfigError::DateOutOfRange { year, week: weeks })?;

        debug!(year, weeks, "building week correspondence");

        let rows = (1..=weeks)
            .map(|week| {
                let date = week_start(start, week)
                    .ok_or(ConfigError::DateOutOfRange { year, week })?;
                let row = WeekCorrespondence {
                    gregorian_week: gregorian_week_of_year(date),
                    tenday: FaerunDate::new(&date, ConverterOptions::default()).tenday_of_year(),
                    date,
                };
                trace!(week, %date, tenday = row.tenday, "week row");
                Ok(row)
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { year, rows })
    }

    /// Returns the target year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the rows in week order
    pub fn rows(&self) -> &[WeekCorrespondence] {
        &self.rows
    }

    /// Title line printed above the rows
    pub fn header(&self) -> String {
        format!(
            "Gregorian Week → Faerûn Tenday Correspondence for year {}",
            self.year
        )
    }
}

impl fmt::Display for WeekReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Builds the week correspondence report. See [`WeekReport::new`].
///
/// # Errors
/// Returns `ConfigError` when `weeks` or `year` are out of range.
pub fn compare_weeks(year: i32, weeks: i64) -> Result<WeekReport, ConfigError> {
    WeekReport::new(year, weeks)
}

/// 1-based week of the Gregorian year, counted in whole weeks from January 1st
pub fn gregorian_week_of_year(date: NaiveDate) -> u32 {
    date.ordinal0() / u32::from(DAYS_PER_WEEK) + 1
}

/// January 1st plus `week - 1` weeks, rolling into later years as needed
fn week_start(start: NaiveDate, week: i64) -> Option<NaiveDate> {
    let days = u64::try_from(week.checked_sub(1)?)
        .ok()?
        .checked_mul(u64::from(DAYS_PER_WEEK))?;
    start.checked_add_days(Days::new(days))
}
