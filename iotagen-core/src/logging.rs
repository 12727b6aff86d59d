//! Structured logging setup using **tracing**.
//!
//! The library itself stays quiet during extraction: findings come back
//! as the issue report and the caller decides how to render them. Only
//! the emission workers and the CLI log, through the subscriber
//! installed here.

/// Initializes the global tracing collector (subscriber).
///
/// Call once at the beginning of the application's runtime. Configures
/// structured JSON output to stderr, keeping stdout clean for tool
/// output.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=iotagen=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
