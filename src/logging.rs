use tracing_subscriber::EnvFilter;

/// Initialize tracing from the CLI verbosity count.
///
/// 0 -> warn, 1 (-v) -> info, 2 (-vv) -> debug, 3+ (-vvv) -> trace, applied
/// to every pinpoint crate. A set `RUST_LOG` env var wins over the flag.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter = [
        "pinpoint",
        "pinpoint_dataset",
        "pinpoint_knn",
        "pinpoint_session",
    ]
    .map(|target| format!("{target}={level}"))
    .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
