/// Initializes structured logging for the process.
///
/// Uses the `tracing` subscriber with environment-based filtering:
/// set `RUST_LOG=info` (or `debug`, `trace`, `bootcamp_api=debug`, ...)
/// to control verbosity.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
