//! Shared fixtures for the `depdag` test suites.

pub mod builders;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Route `depdag`'s tracing events into the test harness.
///
/// Output goes through `with_test_writer()`, so it is only shown for failing
/// tests (or with `-- --nocapture`). Without `RUST_LOG` only warnings from
/// the graph are shown, e.g. failed validations; raise it with
/// `RUST_LOG=depdag=debug cargo test` to see every mutation.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("depdag=warn"));

        // Another test binary helper may already have installed one.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
