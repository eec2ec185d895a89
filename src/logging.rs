//! Console logging for binaries and tests built on daprs.
//!
//! The library only emits [`tracing`] events; nothing is printed until a
//! subscriber is installed. [`init`] installs a formatted console subscriber
//! that honours `RUST_LOG` and otherwise shows `daprs` events at `info` and
//! above, which is where progress reports are logged.

use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "daprs=info";

/// Install the console subscriber. Safe to call more than once.
///
/// If another global subscriber is already set, it is left in place.
pub fn init() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .with_target(true)
                .with_thread_names(true)
                .with_level(true),
        );

        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already set, keeping it");
        }
    });
}
