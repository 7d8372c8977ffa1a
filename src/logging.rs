use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sets up the global tracing subscriber, logging to stderr.
///
/// The level is `warn`, or `debug` if `verbose` is set. `RUST_LOG`, if set,
/// overrides either (e.g. `RUST_LOG=employees=trace`).
///
/// # Errors
///
/// Returns an error if a global subscriber has already been set.
pub fn setup_tracing(verbose: bool) -> Result<()> {
    let default = if verbose { "employees=debug" } else { "employees=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;
    Ok(())
}
