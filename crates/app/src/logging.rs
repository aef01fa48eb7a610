use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` is only honored in verbose mode,
/// otherwise the level is fixed at `info`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
