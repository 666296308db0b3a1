//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes a formatting tracing subscriber.
///
/// Filters events by `level` when given, otherwise by the `RUST_LOG`
/// environment variable, defaulting to `info`.
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
/// A host that installs its own subscriber can skip this entirely; the
/// engine's instrumentation degrades to no-ops without one.
///
/// # Example
///
/// ```rust
/// showcase::observability::init_tracing(Some("debug"));
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
