use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Without `debug` the level is pinned to `info` and `RUST_LOG` is ignored, so a
/// stray variable in the environment does not flood the terminal while the
/// pointer is moving. With `debug` the variable may override the level.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
