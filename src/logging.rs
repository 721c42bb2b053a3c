//! Console logging.
//!
//! rollkit reports through [`tracing`]. Applications that already install a
//! subscriber need nothing from here; others can call [`init`].

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info";

static INSTALLED: Once = Once::new();

/// Installs a console subscriber filtered by `RUST_LOG` (default `info`).
///
/// Safe to call more than once. Does nothing if another global subscriber
/// is already set.
pub fn init() {
    INSTALLED.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(filter))
            .try_init();

        if result.is_err() {
            tracing::debug!("a global subscriber was already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        tracing::info!("logging ready");
    }
}
