//! Diagnostic logging.
//!
//! Logging is disabled by default because the TUI owns the terminal. Set
//! `POMOCLOCK_LOG` to a file path to append a plain-text log there; the
//! level is taken from `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "POMOCLOCK_LOG";

/// Initialize tracing if `POMOCLOCK_LOG` is set.
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV).filter(|v| !v.is_empty()) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: Failed to open log file {}: {e}",
                std::path::Path::new(&log_path).display()
            );
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
