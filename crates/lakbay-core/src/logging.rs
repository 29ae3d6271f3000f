//! Logging integration for the lakbay admin platform.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-form-session
//! spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info",
/// "warn", "error"). In debug mode a pretty, human-readable format is used;
/// in production a structured JSON format is used.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one in-progress form session.
///
/// Attach this span while driving a wizard so that all log entries emitted
/// during editing and submission carry the listing identifier.
///
/// # Examples
///
/// ```
/// use lakbay_core::logging::wizard_span;
///
/// let span = wizard_span("new-listing");
/// let _guard = span.enter();
/// tracing::info!("step advanced");
/// ```
pub fn wizard_span(listing: &str) -> tracing::Span {
    tracing::info_span!("wizard", listing = listing)
}
