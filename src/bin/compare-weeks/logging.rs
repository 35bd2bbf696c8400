use tracing_subscriber::EnvFilter;

/// Targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["faerun_date", "faerun_compare_weeks"];

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(
            default_filter(0),
            "faerun_date=warn,faerun_compare_weeks=warn"
        );
        assert_eq!(
            default_filter(2),
            "faerun_date=debug,faerun_compare_weeks=debug"
        );
        assert_eq!(
            default_filter(7),
            "faerun_date=trace,faerun_compare_weeks=trace"
        );
    }
}
