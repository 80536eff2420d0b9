//! Logging configuration access
//!
//! Buffer sizes come from compile-time constants; verbosity and output
//! format come from the runtime logging preferences.

use crate::config::compile_time::logging::{LOG_BUFFER_SIZE, MAX_COLLECTED_EVENTS};
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Install logging preferences, once per process
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime logging preferences already initialized".to_string())
}

fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

pub fn get_log_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

pub fn get_max_collected_events() -> usize {
    MAX_COLLECTED_EVENTS
}

/// Sanity checks run during global logging init
pub fn validate_config() -> Result<(), String> {
    if LOG_BUFFER_SIZE == 0 {
        return Err("LOG_BUFFER_SIZE must be greater than zero".to_string());
    }
    if MAX_COLLECTED_EVENTS == 0 {
        return Err("MAX_COLLECTED_EVENTS must be greater than zero".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config().is_ok());
        assert!(get_log_buffer_size() > 0);
    }

    #[test]
    fn default_level_without_init() {
        // Preferences may or may not be installed by other tests; either
        // way the accessor must not panic.
        let _ = get_min_log_level();
    }
}
