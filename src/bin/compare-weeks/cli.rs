use clap::Parser;
use faerun_date::report::DEFAULT_WEEKS;

/// Print which Faerûn tenday each Gregorian week falls in.
#[derive(Parser, Debug)]
#[command(
    name = "faerun-compare-weeks",
    version,
    about = "Gregorian week to Faerûn tenday correspondence"
)]
pub struct Cli {
    /// Gregorian year to enumerate (default: current year).
    #[arg(long)]
    pub year: Option<i32>,

    /// Number of weeks to list.
    #[arg(long, default_value_t = DEFAULT_WEEKS, allow_negative_numbers = true)]
    pub weeks: i64,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
