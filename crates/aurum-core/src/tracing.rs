use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured stdout tracing: JSON lines, filtered by the
/// `RUST_LOG` env var. Call once from the composition root.
///
/// Safe to call more than once — later calls are ignored, which keeps
/// test binaries from panicking when several tests initialize it.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}
