//! Core logging bootstrap.
//!
//! # Responsibility
//! - Initialize console (stderr) diagnostics exactly once per process.
//! - Emit stable, metadata-only diagnostic events from core.
//!
//! # Invariants
//! - Logging init is idempotent for the same level.
//! - Re-initialization with a different level is rejected.
//! - Logging initialization must not panic.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Initializes console logging at the given level.
///
/// Returns `Ok(())` when logging is active, or a human-readable error
/// string when initialization fails.
///
/// # Invariants
/// - Calling this function repeatedly with the same `level` is idempotent.
/// - Calling this function with a different `level` after init is rejected.
/// - Initialization never panics.
pub fn init_logging(level: &str) -> Result<(), String> {
    let normalized_level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.level != normalized_level {
            return Err(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                state.level, normalized_level
            ));
        }
        return Ok(());
    }

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, String> {
        let logger = Logger::try_with_str(normalized_level)
            .map_err(|err| format!("invalid log level `{normalized_level}`: {err}"))?
            .log_to_stderr()
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))?;

        info!(
            "event=app_start module=core status=ok platform={} build_mode={} version={}",
            std::env::consts::OS,
            build_mode(),
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: normalized_level,
            _logger: logger,
        })
    })?;

    if state.level != normalized_level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, normalized_level
        ));
    }

    Ok(())
}

/// Returns the active logging level, `None` before initialization.
pub fn logging_status() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn build_mode() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, normalize_level};

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(
            normalize_level("INFO").expect("INFO should normalize"),
            "info"
        );
        assert_eq!(
            normalize_level(" warning ").expect("warning should normalize"),
            "warn"
        );
    }

    #[test]
    fn normalize_level_rejects_unknown_values() {
        let error = normalize_level("loud").expect_err("unknown levels must be rejected");
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_level_switch() {
        init_logging("info").expect("first init should succeed");
        init_logging("info").expect("same level should be idempotent");

        let error = init_logging("debug").expect_err("level switch should fail");
        assert!(error.contains("refusing to switch"));

        assert_eq!(logging_status(), Some("info"));
    }
}
