/// Faerûn month names, index 0 is Hammer (Gregorian January)
pub const MONTH_NAMES: [&str; 12] = [
    "Hammer",    // January
    "Alturiak",  // February
    "Ches",      // March
    "Tarsakh",   // April
    "Mirtul",    // May
    "Kythorn",   // June
    "Flamerule", // July
    "Eleasis",   // August
    "Eleint",    // September
    "Marpenoth", // October
    "Uktar",     // November
    "Nightal",   // December
];

/// Names of the ten days of a tenday, indexed by simplified day-of-year modulo 10
pub const WEEKDAYS: [&str; 10] = [
    "Sul", "Far", "Tar", "Sar", "Rai", "Zor", "Kyth", "Hamar", "Ith", "Alt",
];

/// A named season covering a fixed set of Gregorian months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Season {
    pub name: &'static str,
    pub months: &'static [u8],
}

/// Seasons partitioning months 1..=12; no month belongs to two seasons
pub const SEASONS: [Season; 5] = [
    Season {
        name: "Deepwinter",
        months: &[1, 2],
    },
    Season {
        name: "Spring",
        months: &[3, 4, 5],
    },
    Season {
        name: "Summer",
        months: &[6, 7, 8],
    },
    Season {
        name: "Autumn",
        months: &[9, 10],
    },
    Season {
        name: "Winter",
        months: &[11, 12],
    },
];

/// Returned by season lookups when no season claims the month
pub const UNKNOWN_SEASON: &str = "Unknown";

/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Every Faerûn month is treated as exactly thirty days
pub const DAYS_PER_MONTH: u16 = 30;

/// Length of the cyclic weekday names
pub const WEEKDAY_CYCLE: u16 = 10;

/// Days per week for `week_of_year`
pub const DAYS_PER_WEEK: u16 = 7;

/// Days per tenday for `tenday_of_year`
pub const DAYS_PER_TENDAY: u16 = 10;

/// Leap years occur every 4 years, with no century correction
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;

/// Suffix appended to Dale Reckoning year labels
pub const DALE_RECKONING_SUFFIX: &str = "DR";

/// Separator between the parts of a full rendering (an en dash)
pub const PART_SEPARATOR: &str = " – ";
