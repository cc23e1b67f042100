//! Tracing setup.
//!
//! The show owns the terminal, so logs never go to stdout or stderr. Set
//! `HACKTYPER_LOG` to a file path to enable logging; `RUST_LOG` filters
//! (default `info`).

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "HACKTYPER_LOG";

/// Install the file logger if `HACKTYPER_LOG` is set.
///
/// Returns the log path when logging was enabled.
pub fn init_tracing() -> Option<String> {
    let log_path = std::env::var(LOG_ENV).ok().filter(|p| !p.is_empty())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match File::create(&log_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", log_path, e);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(log_path)
}
