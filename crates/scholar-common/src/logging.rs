//! Structured Logging Configuration
//!
//! Binaries call [`init_logging`] once at startup. Library crates only emit
//! `tracing` events and never install a subscriber.
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: Set to "json" for JSON output, anything else for text (default: text)
//! - `RUST_LOG`: Standard log level filter (default: info)
//!   Examples: `RUST_LOG=debug`, `RUST_LOG=scholar_client=trace,reqwest=info`
//!
//! # Usage
//!
//! ```rust,ignore
//! use scholar_common::logging::init_logging;
//!
//! fn main() {
//!     init_logging("scholar-health");
//!     tracing::info!(environment = "prod", "Probing services");
//! }
//! ```

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize logging for a binary.
///
/// Reads LOG_FORMAT to pick JSON or text output and RUST_LOG for filtering.
/// Calling it a second time is a no-op.
pub fn init_logging(service_name: &str) {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    let env_filter = default_filter();

    let installed = if log_format.eq_ignore_ascii_case("json") {
        init_json_logging(env_filter)
    } else {
        init_text_logging(env_filter)
    };

    if installed {
        tracing::debug!(service = service_name, format = %log_format, "Logging initialized");
    }
}

/// Install a test-friendly subscriber that writes through the libtest capture.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(fmt::layer().with_test_writer().with_target(true))
        .try_init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_json_logging(env_filter: EnvFilter) -> bool {
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .flatten_event(true)
                .with_span_events(FmtSpan::CLOSE),
        )
        .try_init()
        .is_ok()
}

fn init_text_logging(env_filter: EnvFilter) -> bool {
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(true),
        )
        .try_init()
        .is_ok()
}
