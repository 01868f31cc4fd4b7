use tracing_subscriber::EnvFilter;

/// Initialize tracing for a terminal-facing binary. Quiet by default;
/// `verbose` raises the floor to debug. `RUST_LOG` overrides both.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
