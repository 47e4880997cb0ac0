use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the tracing filter, e.g. `KALKULUS_LOG=debug`
pub const LOG_ENV: &str = "KALKULUS_LOG";

/// Filter used when `KALKULUS_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "kalkulus=debug"
    } else {
        "kalkulus=warn"
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// parseable when printing JSON.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
