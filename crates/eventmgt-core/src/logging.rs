//! Logging integration for eventmgt-rs.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-registration spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level`; an invalid directive falls
/// back to "info". In debug mode a pretty, human-readable format is used; in
/// production a structured JSON format is used. Installing a second
/// subscriber is a no-op.
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

/// Creates a tracing span for processing one registration of an event.
///
/// # Examples
///
/// ```
/// use eventmgt_core::logging::registration_span;
///
/// let span = registration_span(Some(12));
/// let _guard = span.enter();
/// tracing::info!("validating registration");
/// ```
pub fn registration_span(event_uid: Option<i64>) -> tracing::Span {
    tracing::info_span!("registration", event = ?event_uid)
}
