use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, writing to stderr so logs never mix
/// with the menu on stdout. `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(format!("finance_tracker={default_level}")))
            .unwrap_or_else(|_| EnvFilter::new("finance_tracker=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
