mod cli;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use faerun_date::{Clock, SystemClock, report};
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli, &SystemClock) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli, clock: &impl Clock) -> Result<()> {
    let year = cli.year.unwrap_or_else(|| clock.today().year());
    info!(year, weeks = cli.weeks, "comparing weeks");

    let report = report::compare_weeks(year, cli.weeks)
        .with_context(|| format!("cannot build the week report for {year}"))?;

    let mut out = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &report).context("failed to encode report")?;
        writeln!(out)?;
    } else {
        write!(out, "{report}")?;
    }
    out.flush()?;
    Ok(())
}
