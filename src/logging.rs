use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "PROFILE_CARDS_LOG";

/// Initialize structured logging to stderr.
///
/// `PROFILE_CARDS_LOG` takes precedence; otherwise `warn`, or `debug` for this
/// crate when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "warn,profile_cards=debug"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
