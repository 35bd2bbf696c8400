use crate::ParseError;
use crate::consts::{
    DALE_RECKONING_SUFFIX, LEAP_YEAR_CYCLE, MONTH_NAMES, MONTHS_PER_YEAR, SEASONS,
};
use crate::prelude::*;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Years chrono renders with exactly four digits and no sign
const PLAIN_YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// A proleptic Gregorian date decomposed into day, 1-based month and year.
///
/// Always holds a real date: it is built either from a `chrono` date or from
/// components checked by `NaiveDate::from_ymd_opt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if `month` is outside 1..=12,
    /// `ParseError::InvalidYear` if the year is outside chrono's range and
    /// `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(ParseError::InvalidMonth(month));
        }
        if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
            return Err(ParseError::InvalidYear(year));
        }
        let date = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .ok_or(ParseError::InvalidDay { year, month, day })?;
        Ok(Self::from_date(&date))
    }

    /// Decomposes any `chrono` date into its day, month and year.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        // chrono keeps month in 1..=12 and day in 1..=31
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }

    /// Returns the Gregorian year
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 1-based Gregorian month
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(month, day)`, the key festivals are ordered by
    #[inline]
    pub const fn month_day(&self) -> (u8, u8) {
        (self.month, self.day)
    }

    /// Converts back into a `chrono` date
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(&date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if PLAIN_YEAR_RANGE.contains(&self.year) {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        } else {
            write!(f, "{:+05}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        trimmed
            .parse::<NaiveDate>()
            .map(Self::from)
            .map_err(|reason| ParseError::InvalidDate {
                input: trimmed.to_owned(),
                reason,
            })
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A Dale Reckoning year label. Opaque: it carries no calendar arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From, Into,
)]
#[display(fmt = "{} {}", "_0", DALE_RECKONING_SUFFIX)]
#[serde(transparent)]
pub struct DrYear(i32);

impl DrYear {
    /// Returns the label value
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

// Helper functions

/// Quadrennial leap rule: every year divisible by 4, centuries included.
pub const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == 0
}

/// Faerûn name of a 1-based Gregorian month
pub fn month_name(month: u8) -> Option<&'static str> {
    let index = usize::from(month).checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Name of the season containing a 1-based Gregorian month
pub fn season_of_month(month: u8) -> Option<&'static str> {
    SEASONS
        .iter()
        .find(|season| season.months.contains(&month))
        .map(|season| season.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_new_valid() {
        let date = CalendarDate::new(2024, 2, 29).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 29);
        assert_eq!(date.month_day(), (2, 29));
    }

    #[test]
    fn test_calendar_date_new_invalid_month() {
        assert!(matches!(
            CalendarDate::new(2024, 0, 1),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_calendar_date_new_invalid_day() {
        // Gregorian validity comes from chrono, which uses the full century rule
        let result = CalendarDate::new(1900, 2, 29);
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: 1900,
                month: 2,
                day: 29
            })
        ));
        assert!(CalendarDate::new(2024, 4, 31).is_err());
        assert!(CalendarDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn test_calendar_date_new_invalid_year() {
        let result = CalendarDate::new(i32::MAX, 1, 1);
        assert!(matches!(result, Err(ParseError::InvalidYear(i32::MAX))));
    }

    #[test]
    fn test_calendar_date_from_naive_date() {
        let naive = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let date = CalendarDate::from(naive);
        assert_eq!(date, CalendarDate::new(2025, 6, 15).unwrap());
        assert_eq!(date.to_naive_date(), Some(naive));
    }

    #[test]
    fn test_calendar_date_from_datetime() {
        let dt = NaiveDate::from_ymd_opt(2023, 7, 2)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let date = CalendarDate::from_date(&dt);
        assert_eq!(date.month_day(), (7, 2));
        assert_eq!(date.year(), 2023);
    }

    #[test]
    fn test_calendar_date_display() {
        assert_eq!(
            CalendarDate::new(2024, 2, 1).unwrap().to_string(),
            "2024-02-01"
        );
        assert_eq!(CalendarDate::new(987, 12, 9).unwrap().to_string(), "0987-12-09");
        assert_eq!(
            CalendarDate::new(12345, 1, 1).unwrap().to_string(),
            "+12345-01-01"
        );
    }

    #[test]
    fn test_calendar_date_from_str() {
        let date: CalendarDate = " 2024-07-02 ".parse().unwrap();
        assert_eq!(date, CalendarDate::new(2024, 7, 2).unwrap());

        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2024-02-30".parse::<CalendarDate>(),
            Err(ParseError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_calendar_date_ordering() {
        let a = CalendarDate::new(2024, 1, 31).unwrap();
        let b = CalendarDate::new(2024, 2, 1).unwrap();
        let c = CalendarDate::new(2025, 1, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_calendar_date_serde() {
        let date = CalendarDate::new(2024, 9, 27).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-09-27\"");

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let bad: Result<CalendarDate, _> = serde_json::from_str("\"2024-13-01\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_dr_year_display_and_conversions() {
        let year = DrYear::from(1492);
        assert_eq!(year.to_string(), "1492 DR");
        assert_eq!(year.get(), 1492);
        let raw: i32 = year.into();
        assert_eq!(raw, 1492);
        assert_eq!(DrYear::from(-3).to_string(), "-3 DR");
    }

    #[test]
    fn test_dr_year_serde_transparent() {
        let json = serde_json::to_string(&DrYear::from(1372)).unwrap();
        assert_eq!(json, "1372");
        let parsed: DrYear = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.get(), 1372);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: true,
                description: "century years are leap years too",
            },
            TestCase {
                year: 2100,
                is_leap: true,
                description: "century years are leap years too",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "year zero",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative multiple of 4",
            },
            TestCase {
                year: -1,
                is_leap: false,
                description: "negative non-multiple of 4",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_month_name_all_months() {
        let expected = [
            "Hammer",
            "Alturiak",
            "Ches",
            "Tarsakh",
            "Mirtul",
            "Kythorn",
            "Flamerule",
            "Eleasis",
            "Eleint",
            "Marpenoth",
            "Uktar",
            "Nightal",
        ];
        for month in 1..=12u8 {
            assert_eq!(
                month_name(month),
                Some(expected[usize::from(month) - 1]),
                "Month {month} has the wrong name"
            );
        }
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_season_of_month_partition() {
        let expected = [
            (1, "Deepwinter"),
            (2, "Deepwinter"),
            (3, "Spring"),
            (4, "Spring"),
            (5, "Spring"),
            (6, "Summer"),
            (7, "Summer"),
            (8, "Summer"),
            (9, "Autumn"),
            (10, "Autumn"),
            (11, "Winter"),
            (12, "Winter"),
        ];
        for (month, season) in expected {
            assert_eq!(season_of_month(month), Some(season), "Month {month}");
        }
        assert_eq!(season_of_month(0), None);
        assert_eq!(season_of_month(13), None);
    }

    #[test]
    fn test_seasons_do_not_overlap() {
        for month in 1..=12u8 {
            let claims = SEASONS
                .iter()
                .filter(|season| season.months.contains(&month))
                .count();
            assert_eq!(claims, 1, "Month {month} claimed by {claims} seasons");
        }
    }
}
