//! Tracing setup for the `ledger` binary

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is not set
const DEFAULT_DIRECTIVE: &str = "category_ledger=warn";

/// Initializes the global tracing subscriber, writing to stderr
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // A subscriber may already be installed by an embedding application
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
